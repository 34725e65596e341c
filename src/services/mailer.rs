use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when sending email through Resend
#[derive(Debug, Error)]
pub enum MailError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to send email: {0}")]
    Rejected(String),
}

#[derive(Debug, Serialize)]
struct OutgoingEmail<'a> {
    from: &'a str,
    to: &'a [String],
    subject: &'a str,
    html: &'a str,
}

/// Resend API client
pub struct Mailer {
    api_base: String,
    api_key: String,
    from: String,
    client: Client,
}

impl Mailer {
    pub fn new(api_base: String, api_key: String, from: String) -> Result<Self, MailError> {
        let client = Client::builder().timeout(Duration::from_secs(15)).build()?;

        Ok(Self {
            api_base,
            api_key,
            from,
            client,
        })
    }

    /// Send one HTML email
    pub async fn send(&self, to: &[String], subject: &str, html: &str) -> Result<(), MailError> {
        let url = format!("{}/emails", self.api_base.trim_end_matches('/'));

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&OutgoingEmail {
                from: &self.from,
                to,
                subject,
                html,
            })
            .send()
            .await?;

        if !response.status().is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read body".to_string());
            return Err(MailError::Rejected(body));
        }

        tracing::debug!("Sent email '{}' to {} recipient(s)", subject, to.len());
        Ok(())
    }
}

/// Escape text for interpolation into an HTML body
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<b>Ana & Bo</b>"), "&lt;b&gt;Ana &amp; Bo&lt;/b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[tokio::test]
    async fn test_send_posts_to_resend() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/emails")
            .match_header("authorization", "Bearer re_test")
            .match_body(mockito::Matcher::PartialJson(json!({
                "from": "Kindly <hello@example.com>",
                "to": ["a@b.com"],
                "subject": "Hi"
            })))
            .with_status(200)
            .with_body(r#"{"id":"email_1"}"#)
            .create_async()
            .await;

        let mailer = Mailer::new(
            server.url(),
            "re_test".to_string(),
            "Kindly <hello@example.com>".to_string(),
        )
        .unwrap();

        mailer.send(&["a@b.com".to_string()], "Hi", "<p>Hi</p>").await.unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_send_reports_rejection() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/emails")
            .with_status(422)
            .with_body("invalid from")
            .create_async()
            .await;

        let mailer = Mailer::new(server.url(), "re_test".to_string(), "x@y.z".to_string()).unwrap();
        let result = mailer.send(&["a@b.com".to_string()], "Hi", "").await;

        assert!(matches!(result, Err(MailError::Rejected(body)) if body == "invalid from"));
    }
}
