//! Server configuration parsed from environment variables.
//!
//! Every setting has a default except the optional integrations: without
//! `DATABASE_URL` the server keeps tenants and appointments in memory, and
//! without `RESEND_API_KEY` booking notifications are skipped.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CLIENT_SLUG: &str = "demo";
pub const DEFAULT_RESEND_FROM: &str = "Receptionist <noreply@receptionist.local>";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Email delivery settings for booking notifications.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailConfig {
    pub resend_api_key: String,
    pub from: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub database_url: Option<String>,
    /// Tenant used when a request names no client or an unknown one.
    pub default_client: String,
    pub email: Option<EmailConfig>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// - `PORT`: listen port, default 3000
    /// - `DATABASE_URL`: Postgres URL; in-memory store when unset
    /// - `DEFAULT_CLIENT`: fallback tenant slug, default `demo`
    /// - `RESEND_API_KEY` / `RESEND_FROM`: booking notification email
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, ConfigError> {
        let port = match non_empty_var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let email = non_empty_var("RESEND_API_KEY").map(|resend_api_key| EmailConfig {
            resend_api_key,
            from: non_empty_var("RESEND_FROM").unwrap_or_else(|| DEFAULT_RESEND_FROM.to_owned()),
        });

        Ok(Self {
            port,
            database_url: non_empty_var("DATABASE_URL"),
            default_client: non_empty_var("DEFAULT_CLIENT").unwrap_or_else(|| DEFAULT_CLIENT_SLUG.to_owned()),
            email,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, database_url: None, default_client: DEFAULT_CLIENT_SLUG.to_owned(), email: None }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Parse an env var into `T`, falling back to `default` when unset or invalid.
pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
