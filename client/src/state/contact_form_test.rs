use super::*;
use crate::state::toast::ToastVariant;

fn filled() -> ContactFormState {
    let mut state = ContactFormState::default();
    state.set_field(ContactField::Name, "Ada Lovelace".to_owned());
    state.set_field(ContactField::Email, "ada@example.com".to_owned());
    state.set_field(ContactField::Subject, "Collaboration".to_owned());
    state.set_field(ContactField::Message, "Interested in a project.".to_owned());
    state
}

// =============================================================
// Fields
// =============================================================

#[test]
fn default_state_is_idle_and_blank() {
    let state = ContactFormState::default();
    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.fields, ContactMessage::default());
    assert_eq!(state.missing_fields(), ContactField::ALL.to_vec());
}

#[test]
fn set_field_updates_matching_slot() {
    let state = filled();
    assert_eq!(state.field(ContactField::Name), "Ada Lovelace");
    assert_eq!(state.field(ContactField::Email), "ada@example.com");
    assert_eq!(state.field(ContactField::Subject), "Collaboration");
    assert_eq!(state.field(ContactField::Message), "Interested in a project.");
}

#[test]
fn whitespace_only_field_counts_as_missing() {
    let mut state = filled();
    state.set_field(ContactField::Subject, "   ".to_owned());
    assert_eq!(state.missing_fields(), vec![ContactField::Subject]);
}

// =============================================================
// Submission
// =============================================================

#[test]
fn begin_submit_returns_payload_and_enters_submitting() {
    let mut state = filled();
    let payload = state.begin_submit().expect("form is complete");
    assert_eq!(payload.name, "Ada Lovelace");
    assert_eq!(payload.email, "ada@example.com");
    assert!(state.is_submitting());
}

#[test]
fn begin_submit_rejects_incomplete_form() {
    let mut state = filled();
    state.set_field(ContactField::Message, String::new());
    assert_eq!(state.begin_submit(), None);
    assert_eq!(state.phase, SubmitPhase::Idle);
}

#[test]
fn begin_submit_refuses_duplicate_while_in_flight() {
    let mut state = filled();
    assert!(state.begin_submit().is_some());
    assert_eq!(state.begin_submit(), None);
    assert!(state.is_submitting());
}

#[test]
fn success_clears_fields_and_shows_success_toast() {
    let mut state = filled();
    state.begin_submit();
    let toast = state.finish_submit(Ok(()));

    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.fields, ContactMessage::default());
    assert_eq!(toast.title, SUCCESS_TITLE);
    assert_eq!(toast.description, SUCCESS_DESCRIPTION);
    assert_eq!(toast.variant, ToastVariant::Default);
}

#[test]
fn non_2xx_keeps_fields_and_shows_error_toast() {
    let mut state = filled();
    let sent = state.begin_submit().expect("form is complete");
    let toast = state.finish_submit(Err(ApiError::Status(500)));

    assert_eq!(state.phase, SubmitPhase::Idle);
    assert_eq!(state.fields, sent);
    assert_eq!(toast.title, ERROR_TITLE);
    assert_eq!(toast.description, ERROR_DESCRIPTION);
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn network_error_keeps_fields() {
    let mut state = filled();
    state.begin_submit();
    let toast = state.finish_submit(Err(ApiError::Network("offline".to_owned())));
    assert_eq!(state.field(ContactField::Name), "Ada Lovelace");
    assert_eq!(toast.variant, ToastVariant::Destructive);
}

#[test]
fn resubmit_allowed_after_failure() {
    let mut state = filled();
    state.begin_submit();
    state.finish_submit(Err(ApiError::Status(502)));
    assert!(state.begin_submit().is_some());
}

#[test]
fn outcome_toast_matches_finish_submit() {
    assert_eq!(outcome_toast(&Ok(())).title, SUCCESS_TITLE);
    assert_eq!(outcome_toast(&Err(ApiError::Decode("bad".to_owned()))).title, ERROR_TITLE);
}
