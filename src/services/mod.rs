// Service exports
pub mod cache;
pub mod invitations;
pub mod mailer;
pub mod supabase;

pub use cache::{CacheManager, CacheKey, CacheError, CacheStats};
pub use invitations::{submit_invitation, InvitationError, InvitationNotices};
pub use mailer::{Mailer, MailError};
pub use supabase::{SupabaseClient, SupabaseTables, StoreError};
