use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use chrono::Utc;
use thiserror::Error;

use crate::models::{ErrorResponse, Invitation, InvitationResponse, InvitationStatus};
use crate::services::mailer::{escape_html, Mailer};
use crate::services::supabase::{StoreError, SupabaseClient};

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const RANDOM_SUFFIX_LEN: usize = 4;

/// Invitation request failures; email problems are not errors
#[derive(Debug, Error)]
pub enum InvitationError {
    #[error("name and email are required")]
    MissingFields,

    #[error("Server configuration error")]
    Misconfigured,

    #[error("Failed to save invitation request")]
    Persistence(#[source] StoreError),
}

impl ResponseError for InvitationError {
    fn status_code(&self) -> StatusCode {
        match self {
            InvitationError::MissingFields => StatusCode::BAD_REQUEST,
            InvitationError::Misconfigured | InvitationError::Persistence(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let message = match self {
            InvitationError::Persistence(e) => e.to_string(),
            other => other.to_string(),
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.to_string(),
            message,
            status_code: status.as_u16(),
        })
    }
}

/// Where invitation notifications go
#[derive(Debug, Clone)]
pub struct InvitationNotices {
    pub admin_recipients: Vec<String>,
}

/// Uppercase base-36 representation of `value`
pub fn to_base36(mut value: u128) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    String::from_utf8(digits).unwrap_or_default()
}

/// `K` + base-36 millisecond timestamp + 4 random base-36 characters
pub fn generate_invitation_code(timestamp_millis: i64) -> String {
    let mut random = uuid::Uuid::new_v4().as_u128();
    let suffix: String = (0..RANDOM_SUFFIX_LEN)
        .map(|_| {
            let digit = BASE36_DIGITS[(random % 36) as usize] as char;
            random /= 36;
            digit
        })
        .collect();

    format!("K{}{}", to_base36(timestamp_millis.max(0) as u128), suffix)
}

fn admin_notice_html(name: &str, email: &str, submitted_at: &str) -> String {
    format!(
        r#"
            <h1>New Founding Candidate Request</h1>
            <p><strong>Name:</strong> {}</p>
            <p><strong>Email:</strong> {}</p>
            <p><strong>Submitted at:</strong> {}</p>
        "#,
        escape_html(name),
        escape_html(email),
        submitted_at
    )
}

fn confirmation_html(name: &str) -> String {
    format!(
        r#"
            <div style="font-family: 'DM Sans', Arial, sans-serif; max-width: 600px; margin: 0 auto; padding: 40px 20px;">
              <h1 style="color: #1a1a1a; font-size: 24px; margin-bottom: 20px;">Hi {},</h1>
              <p style="color: #4a4a4a; font-size: 16px; line-height: 1.6; margin-bottom: 20px;">
                Thank you for your interest in becoming a Founding Co-Parent Candidate with Kindly.
              </p>
              <p style="color: #4a4a4a; font-size: 16px; line-height: 1.6; margin-bottom: 20px;">
                We've received your request and our team will carefully review your application.
              </p>
              <p style="color: #4a4a4a; font-size: 16px; line-height: 1.6;">
                Warm regards,<br><strong>The Kindly Team</strong>
              </p>
            </div>
        "#,
        escape_html(name)
    )
}

/// Record an invitation request and notify admin and requester
///
/// The row is written before any email goes out so the request shows up in
/// the admin queue even if Resend is down. Without a mailer both emails are
/// skipped.
pub async fn submit_invitation(
    store: Option<&SupabaseClient>,
    mailer: Option<&Mailer>,
    notices: &InvitationNotices,
    name: &str,
    email: &str,
) -> Result<InvitationResponse, InvitationError> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() {
        return Err(InvitationError::MissingFields);
    }

    tracing::info!("Processing invitation request for: {} ({})", name, email);

    let Some(store) = store else {
        tracing::error!("Missing Supabase URL or service role key");
        return Err(InvitationError::Misconfigured);
    };

    let now = Utc::now();
    let invitation = Invitation {
        code: generate_invitation_code(now.timestamp_millis()),
        email: email.to_string(),
        name: name.to_string(),
        status: InvitationStatus::Pending,
        created_by: None,
    };

    if let Err(e) = store.insert_invitation(&invitation).await {
        tracing::error!("Failed to insert invitation: {}", e);
        return Err(InvitationError::Persistence(e));
    }

    let mut admin_email_sent = false;
    let mut confirmation_email_sent = false;

    match mailer {
        Some(mailer) => {
            match mailer
                .send(
                    &notices.admin_recipients,
                    &format!("New Kindly Invitation Request: {}", name),
                    &admin_notice_html(name, email, &now.to_rfc3339()),
                )
                .await
            {
                Ok(()) => admin_email_sent = true,
                Err(e) => tracing::error!("Admin notification email failed: {}", e),
            }

            match mailer
                .send(
                    &[email.to_string()],
                    "Your Kindly Invitation Request Received",
                    &confirmation_html(name),
                )
                .await
            {
                Ok(()) => confirmation_email_sent = true,
                Err(e) => tracing::error!("Confirmation email failed: {}", e),
            }
        }
        None => tracing::warn!("Resend API key not set; skipping emails"),
    }

    Ok(InvitationResponse {
        success: true,
        admin_email_sent,
        confirmation_email_sent,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_base36_upper(value: &str) -> bool {
        value.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
    }

    #[test]
    fn test_to_base36() {
        assert_eq!(to_base36(0), "0");
        assert_eq!(to_base36(35), "Z");
        assert_eq!(to_base36(36), "10");
        assert_eq!(to_base36(1_700_000_000_000), "LOYW3V28");
    }

    #[test]
    fn test_invitation_code_format() {
        let code = generate_invitation_code(1_700_000_000_000);

        assert!(code.starts_with("KLOYW3V28"));
        assert_eq!(code.len(), 1 + 8 + RANDOM_SUFFIX_LEN);
        assert!(is_base36_upper(&code[1..]));
    }

    #[test]
    fn test_codes_share_timestamp_prefix() {
        let a = generate_invitation_code(1_700_000_000_000);
        let b = generate_invitation_code(1_700_000_000_000);
        assert_eq!(&a[..9], &b[..9]);
    }

    #[tokio::test]
    async fn test_blank_fields_rejected_before_store() {
        let notices = InvitationNotices { admin_recipients: vec![] };

        let result = submit_invitation(None, None, &notices, "  ", "a@b.com").await;
        assert!(matches!(result, Err(InvitationError::MissingFields)));

        let result = submit_invitation(None, None, &notices, "Ana", "").await;
        assert!(matches!(result, Err(InvitationError::MissingFields)));
    }

    #[tokio::test]
    async fn test_missing_store_is_misconfiguration() {
        let notices = InvitationNotices { admin_recipients: vec![] };
        let result = submit_invitation(None, None, &notices, "Ana", "a@b.com").await;

        let err = result.unwrap_err();
        assert!(matches!(err, InvitationError::Misconfigured));
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
