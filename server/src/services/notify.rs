//! Owner notification for new contact messages.
//!
//! DESIGN
//! ======
//! `ContactNotifier` is the seam between the contact route and email
//! delivery so tests can observe notifications without a Resend account.
//! Delivery is best-effort: the route spawns it after the row is stored and
//! only logs failures.

use resend_rs::Resend;
use resend_rs::types::CreateEmailBaseOptions;

use crate::config::NotifyConfig;
use crate::services::contact::ContactMessageRow;

const CONTACT_NOTIFICATION_TEMPLATE: &str = include_str!("../../templates/contact_notification.html");

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("email delivery failed: {0}")]
    Delivery(String),
}

/// Delivers a notice about a freshly stored contact message.
#[async_trait::async_trait]
pub trait ContactNotifier: Send + Sync {
    /// # Errors
    ///
    /// Returns [`NotifyError`] if the message could not be handed off.
    async fn notify(&self, message: &ContactMessageRow) -> Result<(), NotifyError>;
}

/// Resend-backed notifier addressed to the site owner.
pub struct ResendNotifier {
    resend: Resend,
    from: String,
    to: String,
}

impl ResendNotifier {
    #[must_use]
    pub fn new(config: &NotifyConfig) -> Self {
        Self { resend: Resend::new(&config.resend_api_key), from: config.from.clone(), to: config.to.clone() }
    }
}

#[async_trait::async_trait]
impl ContactNotifier for ResendNotifier {
    async fn notify(&self, message: &ContactMessageRow) -> Result<(), NotifyError> {
        let to = [self.to.as_str()];
        let subject = notification_subject(message);
        let html = render_contact_notification(message);

        let email = CreateEmailBaseOptions::new(&self.from, to, &subject).with_html(&html);
        self.resend
            .emails
            .send(email)
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        Ok(())
    }
}

#[must_use]
pub fn notification_subject(message: &ContactMessageRow) -> String {
    format!("Portfolio contact: {}", message.subject)
}

/// Minimal HTML escaping for visitor-supplied text.
#[must_use]
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn placeholder_value<'a>(message: &'a ContactMessageRow, key: &str) -> Option<&'a str> {
    match key {
        "NAME" => Some(message.name.as_str()),
        "EMAIL" => Some(message.email.as_str()),
        "SUBJECT" => Some(message.subject.as_str()),
        "MESSAGE" => Some(message.message.as_str()),
        _ => None,
    }
}

/// Fill the template in a single left-to-right pass.
///
/// Substituted text is never rescanned, so visitor input that looks like a
/// `{{PLACEHOLDER}}` stays literal.
#[must_use]
pub fn render_contact_notification(message: &ContactMessageRow) -> String {
    let mut out = String::with_capacity(CONTACT_NOTIFICATION_TEMPLATE.len() + message.message.len());
    let mut rest = CONTACT_NOTIFICATION_TEMPLATE;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        match placeholder_value(message, &after[..end]) {
            Some(value) => out.push_str(&escape_html(value)),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
#[path = "notify_test.rs"]
mod tests;
