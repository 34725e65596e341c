use crate::models::{Invitation, SessionProfile, StoredProfile, UserRole};
use reqwest::{Client, RequestBuilder};
use serde_json::{json, Value};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when talking to the Supabase REST API
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("API returned error: {0}")]
    ApiError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: invalid service role key")]
    Unauthorized,

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// Table names in the Supabase database
#[derive(Debug, Clone)]
pub struct SupabaseTables {
    pub profiles: String,
    pub invitations: String,
}

impl Default for SupabaseTables {
    fn default() -> Self {
        Self {
            profiles: "profiles".to_string(),
            invitations: "invitations".to_string(),
        }
    }
}

/// Supabase (PostgREST) client
///
/// Handles all communication with the storage backend:
/// - Reading profile records
/// - Reading and updating the user's app mode
/// - Inserting invitation requests
pub struct SupabaseClient {
    base_url: String,
    service_role_key: String,
    client: Client,
    tables: SupabaseTables,
}

impl SupabaseClient {
    /// Create a new Supabase client
    pub fn new(
        base_url: String,
        service_role_key: String,
        tables: SupabaseTables,
    ) -> Result<Self, StoreError> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            base_url,
            service_role_key,
            client,
            tables,
        })
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url.trim_end_matches('/'), table)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("apikey", &self.service_role_key)
            .header("Authorization", format!("Bearer {}", self.service_role_key))
    }

    async fn check_status(response: reqwest::Response, action: &str) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StoreError::Unauthorized);
        }

        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Unable to read body".to_string());
        tracing::error!("Failed to {}: {} - {}", action, status, body);
        Err(StoreError::ApiError(format!("Failed to {}: {}", action, status)))
    }

    /// Fetch every profile record
    ///
    /// Records that are not JSON objects are skipped; individual malformed
    /// fields are tolerated by [`StoredProfile`]'s decoding.
    pub async fn fetch_profiles(&self) -> Result<Vec<StoredProfile>, StoreError> {
        let url = format!("{}?select=*", self.table_url(&self.tables.profiles));

        tracing::debug!("Fetching profiles from: {}", url);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check_status(response, "fetch profiles").await?;

        let json: Value = response.json().await?;
        let rows = json
            .as_array()
            .ok_or_else(|| StoreError::InvalidResponse("Expected an array of rows".into()))?;

        let profiles: Vec<StoredProfile> = rows
            .iter()
            .filter(|row| row.is_object())
            .filter_map(|row| serde_json::from_value(row.clone()).ok())
            .collect();

        tracing::debug!("Fetched {} profiles (rows: {})", profiles.len(), rows.len());

        Ok(profiles)
    }

    /// Get the `app_mode` / `photo_url` columns for a user
    pub async fn get_session_profile(&self, user_id: &str) -> Result<SessionProfile, StoreError> {
        let url = format!(
            "{}?select=app_mode,photo_url&user_id=eq.{}",
            self.table_url(&self.tables.profiles),
            urlencoding::encode(user_id)
        );

        tracing::debug!("Fetching session profile for user: {}", user_id);

        let response = self.authorized(self.client.get(&url)).send().await?;
        let response = Self::check_status(response, "fetch session profile").await?;

        let json: Value = response.json().await?;
        let row = json
            .as_array()
            .ok_or_else(|| StoreError::InvalidResponse("Expected an array of rows".into()))?
            .first()
            .ok_or_else(|| StoreError::NotFound(format!("Profile not found for user {}", user_id)))?;

        serde_json::from_value(row.clone())
            .map_err(|e| StoreError::InvalidResponse(format!("Failed to parse profile: {}", e)))
    }

    /// Persist the user's app mode
    pub async fn update_app_mode(&self, user_id: &str, role: UserRole) -> Result<(), StoreError> {
        let url = format!(
            "{}?user_id=eq.{}",
            self.table_url(&self.tables.profiles),
            urlencoding::encode(user_id)
        );

        let response = self
            .authorized(self.client.patch(&url))
            .header("Prefer", "return=minimal")
            .json(&json!({ "app_mode": role.as_str() }))
            .send()
            .await?;
        Self::check_status(response, "update app mode").await?;

        tracing::debug!("Updated app mode for {} to {}", user_id, role.as_str());

        Ok(())
    }

    /// Insert an invitation row
    pub async fn insert_invitation(&self, invitation: &Invitation) -> Result<(), StoreError> {
        let response = self
            .authorized(self.client.post(self.table_url(&self.tables.invitations)))
            .header("Prefer", "return=minimal")
            .json(invitation)
            .send()
            .await?;
        Self::check_status(response, "insert invitation").await?;

        tracing::debug!("Inserted invitation {} for {}", invitation.code, invitation.email);

        Ok(())
    }
}
