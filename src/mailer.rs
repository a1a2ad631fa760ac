use async_trait::async_trait;
use std::sync::Arc;

/// Outbound transactional email for the public contact form, behind the same
/// trait-object pattern as the storage layer so handlers and tests never touch
/// the real relay.

/// MailError
///
/// The two ways a contact relay can fail: the relay was never configured
/// (deployment issue, 500), or the upstream API rejected the send (502).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MailError {
    NotConfigured,
    Upstream(String),
}

/// Mailer Contract
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Relays one contact-form message to the site owner. `reply_to` is the
    /// visitor's address so the owner can answer directly from their inbox.
    async fn send_contact(
        &self,
        name: &str,
        reply_to: &str,
        message: &str,
    ) -> Result<(), MailError>;
}

/// MailerState
///
/// The concrete type used to share the mailer across the application state.
pub type MailerState = Arc<dyn Mailer>;

/// BrevoMailer
///
/// The real implementation, posting to the Brevo SMTP API. The visitor's
/// input is HTML-escaped before it is embedded in the message body.
#[derive(Clone)]
pub struct BrevoMailer {
    client: reqwest::Client,
    api_key: String,
    sender_email: String,
    sender_name: String,
    recipient: String,
}

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

impl BrevoMailer {
    pub fn new(api_key: &str, sender_email: &str, sender_name: &str, recipient: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            sender_email: sender_email.to_string(),
            sender_name: sender_name.to_string(),
            recipient: recipient.to_string(),
        }
    }
}

#[async_trait]
impl Mailer for BrevoMailer {
    async fn send_contact(
        &self,
        name: &str,
        reply_to: &str,
        message: &str,
    ) -> Result<(), MailError> {
        let html_content = format!(
            "<p><strong>From:</strong> {} &lt;{}&gt;</p>\
             <p><strong>Message:</strong></p>\
             <p>{}</p>",
            escape_html(name),
            escape_html(reply_to),
            escape_html(message).replace('\n', "<br>"),
        );

        let response = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&serde_json::json!({
                "sender": { "email": self.sender_email, "name": self.sender_name },
                "to": [{ "email": self.recipient }],
                "replyTo": { "email": reply_to, "name": name },
                "subject": format!("Portfolio: Message from {}", name),
                "htmlContent": html_content,
            }))
            .send()
            .await
            .map_err(|e| MailError::Upstream(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!("Brevo API error: {} {}", status, body);
            return Err(MailError::Upstream(format!("status {}", status)));
        }

        Ok(())
    }
}

/// DisabledMailer
///
/// Stand-in used when no BREVO_API_KEY is configured; every send reports
/// `NotConfigured` so the contact endpoint can answer with a clear server
/// error instead of silently dropping messages.
#[derive(Clone, Default)]
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send_contact(
        &self,
        _name: &str,
        _reply_to: &str,
        _message: &str,
    ) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

/// MockMailer
///
/// Test double mirroring `MockStorageService`: succeeds silently, or fails
/// with an upstream error when constructed failing.
#[derive(Clone)]
pub struct MockMailer {
    pub should_fail: bool,
}

impl MockMailer {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send_contact(
        &self,
        _name: &str,
        _reply_to: &str,
        _message: &str,
    ) -> Result<(), MailError> {
        if self.should_fail {
            return Err(MailError::Upstream(
                "Mock Mailer Error: Simulation requested".to_string(),
            ));
        }
        Ok(())
    }
}

/// escape_html
///
/// Minimal entity escaping for user-provided text embedded in the email body.
fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
