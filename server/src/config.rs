//! Server configuration parsed from environment variables.
//!
//! SYSTEM CONTEXT
//! ==============
//! `main` loads `.env` via `dotenvy`, then calls `ServerConfig::from_env`.
//! Parsing goes through a lookup closure so tests can feed a map instead of
//! mutating the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CORS_ALLOW_ORIGIN: &str = "*";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} required")]
    Missing { var: &'static str },
    #[error("invalid {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Owner notification settings. Present only when every key is set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyConfig {
    pub resend_api_key: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database_url: String,
    pub port: u16,
    /// `*` or a comma-separated origin list.
    pub cors_allow_origin: String,
    pub notify: Option<NotifyConfig>,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Required:
    /// - `DATABASE_URL`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CORS_ALLOW_ORIGIN`: default `*`
    /// - `RESEND_API_KEY`, `RESEND_FROM`, `CONTACT_NOTIFY_TO`: owner email on
    ///   new contact messages, enabled only when all three are set
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `DATABASE_URL` is missing or `PORT` does not
    /// parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] but reads keys through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let database_url = get("DATABASE_URL").ok_or(ConfigError::Missing { var: "DATABASE_URL" })?;
        let port = match get("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };
        let cors_allow_origin = get("CORS_ALLOW_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ALLOW_ORIGIN.to_owned());

        let notify = match (get("RESEND_API_KEY"), get("RESEND_FROM"), get("CONTACT_NOTIFY_TO")) {
            (Some(resend_api_key), Some(from), Some(to)) => Some(NotifyConfig { resend_api_key, from, to }),
            _ => None,
        };

        Ok(Self { database_url, port, cors_allow_origin, notify })
    }
}
