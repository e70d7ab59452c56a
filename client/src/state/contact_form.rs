//! Contact form fields and submission lifecycle.
//!
//! DESIGN
//! ======
//! `Idle -> Submitting -> Idle`. Only one submission may be in flight; the
//! page disables the button while `Submitting` and `begin_submit` refuses a
//! second attempt as well. A failed submission keeps every field so the
//! visitor can resend without retyping.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use crate::net::api::ApiError;
use crate::net::types::ContactMessage;
use crate::state::toast::ToastContent;

pub const SUCCESS_TITLE: &str = "Message sent successfully!";
pub const SUCCESS_DESCRIPTION: &str = "Thank you for reaching out. I'll get back to you soon.";
pub const ERROR_TITLE: &str = "Error sending message";
pub const ERROR_DESCRIPTION: &str = "Something went wrong. Please try again or contact me directly.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Clone, Debug, Default)]
pub struct ContactFormState {
    pub fields: ContactMessage,
    pub phase: SubmitPhase,
}

impl ContactFormState {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.fields.name,
            ContactField::Email => &self.fields.email,
            ContactField::Subject => &self.fields.subject,
            ContactField::Message => &self.fields.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.fields.name,
            ContactField::Email => &mut self.fields.email,
            ContactField::Subject => &mut self.fields.subject,
            ContactField::Message => &mut self.fields.message,
        };
        *slot = value;
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.phase == SubmitPhase::Submitting
    }

    /// Fields that are empty or whitespace-only.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<ContactField> {
        ContactField::ALL
            .into_iter()
            .filter(|f| self.field(*f).trim().is_empty())
            .collect()
    }

    /// Enter `Submitting` and hand back the payload to send.
    ///
    /// Returns `None` (and stays put) if a submission is already in flight or
    /// a required field is blank.
    pub fn begin_submit(&mut self) -> Option<ContactMessage> {
        if self.is_submitting() || !self.missing_fields().is_empty() {
            return None;
        }
        self.phase = SubmitPhase::Submitting;
        Some(self.fields.clone())
    }

    /// Leave `Submitting` and describe the outcome as a toast.
    ///
    /// Success clears the form; failure leaves the entered values intact.
    pub fn finish_submit(&mut self, outcome: Result<(), ApiError>) -> ToastContent {
        self.phase = SubmitPhase::Idle;
        if outcome.is_ok() {
            self.fields = ContactMessage::default();
        }
        outcome_toast(&outcome)
    }
}

/// Toast for a submission outcome, independent of any form instance.
#[must_use]
pub fn outcome_toast(outcome: &Result<(), ApiError>) -> ToastContent {
    match outcome {
        Ok(()) => ToastContent::success(SUCCESS_TITLE, SUCCESS_DESCRIPTION),
        Err(_) => ToastContent::error(ERROR_TITLE, ERROR_DESCRIPTION),
    }
}
