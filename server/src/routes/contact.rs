//! Contact form routes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;

use crate::routes::{ApiError, error_body};
use crate::services::contact::{self, ContactError, ContactMessageRow, NewContactMessage};
use crate::state::AppState;

pub(crate) fn contact_error_to_status(err: &ContactError) -> StatusCode {
    match err {
        ContactError::MissingField(_) | ContactError::InvalidEmail => StatusCode::UNPROCESSABLE_ENTITY,
        ContactError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn contact_error(what: &'static str, err: ContactError) -> ApiError {
    let status = contact_error_to_status(&err);
    if status.is_server_error() {
        tracing::error!(error = %err, what, "contact storage failed");
        return error_body(status, format!("Failed to {what}"));
    }
    error_body(status, err.to_string())
}

/// `POST /api/contact`: store a visitor message and notify the owner.
pub async fn submit_contact(
    State(state): State<AppState>,
    Json(body): Json<NewContactMessage>,
) -> Result<(StatusCode, Json<ContactMessageRow>), ApiError> {
    let row = contact::submit_message(&state.pool, body)
        .await
        .map_err(|e| contact_error("save contact message", e))?;
    tracing::info!(message_id = %row.id, "contact message stored");

    if let Some(notifier) = state.notifier.clone() {
        let stored = row.clone();
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(&stored).await {
                tracing::warn!(error = %e, message_id = %stored.id, "owner notification failed");
            }
        });
    }

    Ok((StatusCode::CREATED, Json(row)))
}

/// `GET /api/contact`: stored messages, newest first.
pub async fn list_contact_messages(State(state): State<AppState>) -> Result<Json<Vec<ContactMessageRow>>, ApiError> {
    let rows = contact::list_messages(&state.pool)
        .await
        .map_err(|e| contact_error("fetch messages", e))?;
    Ok(Json(rows))
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
