//! Contact messages: validation, storage and admin listing.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures are distinct variants so the route layer can answer
//! `422` with a readable message; anything from the pool is a `500`.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

pub const MAX_CONTACT_MESSAGES: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("invalid email")]
    InvalidEmail,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Body of `POST /api/contact`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow)]
pub struct ContactMessageRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[must_use]
pub fn normalize_email(email: &str) -> Option<String> {
    let normalized = email.trim().to_ascii_lowercase();
    if normalized.is_empty() || normalized.chars().any(char::is_whitespace) {
        return None;
    }
    let (local, domain) = normalized.split_once('@')?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return None;
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return None;
    }
    Some(normalized)
}

/// Trim every field, require all four, and normalize the email.
///
/// # Errors
///
/// [`ContactError::MissingField`] for the first blank field in form order,
/// [`ContactError::InvalidEmail`] if the address is not `local@domain.tld`.
pub fn validate_message(input: NewContactMessage) -> Result<NewContactMessage, ContactError> {
    let name = input.name.trim().to_owned();
    let email = input.email.trim().to_owned();
    let subject = input.subject.trim().to_owned();
    let message = input.message.trim().to_owned();

    for (field, value) in [("name", &name), ("email", &email), ("subject", &subject), ("message", &message)] {
        if value.is_empty() {
            return Err(ContactError::MissingField(field));
        }
    }
    let email = normalize_email(&email).ok_or(ContactError::InvalidEmail)?;

    Ok(NewContactMessage { name, email, subject, message })
}

/// Validate and persist a message, returning the stored row.
pub async fn submit_message(pool: &PgPool, input: NewContactMessage) -> Result<ContactMessageRow, ContactError> {
    let msg = validate_message(input)?;
    let row = sqlx::query_as::<_, ContactMessageRow>(
        r"INSERT INTO contact_messages (name, email, subject, message)
          VALUES ($1, $2, $3, $4)
          RETURNING id, name, email, subject, message, created_at",
    )
    .bind(&msg.name)
    .bind(&msg.email)
    .bind(&msg.subject)
    .bind(&msg.message)
    .fetch_one(pool)
    .await?;
    Ok(row)
}

/// Stored messages, newest first.
pub async fn list_messages(pool: &PgPool) -> Result<Vec<ContactMessageRow>, ContactError> {
    let rows = sqlx::query_as::<_, ContactMessageRow>(
        r"SELECT id, name, email, subject, message, created_at
          FROM contact_messages
          ORDER BY created_at DESC
          LIMIT $1",
    )
    .bind(MAX_CONTACT_MESSAGES)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

#[cfg(test)]
#[path = "contact_test.rs"]
mod tests;
