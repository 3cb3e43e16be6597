use std::env;

// ============================================================================
// Configuration - Environment-Driven Settings
// ============================================================================
//
// Everything is read once at startup and validated before any component is
// constructed. The SMTP block mirrors the transport variables the mail
// relay expects; HTTP_PORT is optional and defaults to 8080.
//
// ============================================================================

const DEFAULT_HTTP_PORT: u16 = 8080;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub http_port: u16,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub pass: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source; tests substitute a map for the
    /// process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let http_port = match lookup("HTTP_PORT") {
            Some(raw) => parse_port("HTTP_PORT", &raw)?,
            None => DEFAULT_HTTP_PORT,
        };

        Ok(Self {
            http_port,
            smtp: SmtpConfig::from_lookup(&lookup)?,
        })
    }
}

impl SmtpConfig {
    fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| match lookup(key) {
            Some(value) if !value.trim().is_empty() => Ok(value),
            _ => Err(ConfigError::Missing(key)),
        };

        let port = parse_port("SMTP_PORT", &required("SMTP_PORT")?)?;

        Ok(Self {
            host: required("SMTP_HOST")?,
            port,
            user: required("SMTP_USER")?,
            pass: required("SMTP_PASS")?,
            from: required("SMTP_FROM")?,
            to: required("SMTP_TO")?,
        })
    }
}

fn parse_port(field: &'static str, raw: &str) -> Result<u16, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        field,
        reason: format!("'{}' is not a valid port number", raw),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
