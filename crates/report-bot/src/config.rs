use std::fmt;
use std::time::Duration;

use axum::http::Uri;
use line_messaging::DEFAULT_API_BASE;
use thiserror::Error;

pub const ACCESS_TOKEN_VAR: &str = "LINE_CHANNEL_ACCESS_TOKEN";
pub const CHANNEL_SECRET_VAR: &str = "LINE_CHANNEL_SECRET";
pub const HOST_VAR: &str = "HOST";
pub const PORT_VAR: &str = "PORT";
pub const API_BASE_VAR: &str = "LINE_API_BASE_URL";
pub const REPLY_TIMEOUT_VAR: &str = "LINE_REPLY_TIMEOUT_SECS";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;
const DEFAULT_REPLY_TIMEOUT_SECS: u64 = 10;

/// Values shipped in sample `.env` files; never valid credentials.
const PLACEHOLDERS: [&str; 2] = ["YOUR_ACCESS_TOKEN_HERE", "YOUR_CHANNEL_SECRET_HERE"];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    Missing(&'static str),
    #[error("{0} still holds a placeholder value")]
    Placeholder(&'static str),
    #[error("invalid {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

/// Process configuration, read once at startup and shared read-only.
#[derive(Clone)]
pub struct Config {
    pub channel_access_token: String,
    pub channel_secret: String,
    pub host: String,
    pub port: u16,
    pub api_base_url: String,
    pub reply_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let channel_access_token = credential(&lookup, ACCESS_TOKEN_VAR)?;
        let channel_secret = credential(&lookup, CHANNEL_SECRET_VAR)?;

        let host = optional(&lookup, HOST_VAR).unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match optional(&lookup, PORT_VAR) {
            Some(raw) => raw.parse().map_err(|err| ConfigError::Invalid {
                name: PORT_VAR,
                reason: format!("{raw:?}: {err}"),
            })?,
            None => DEFAULT_PORT,
        };

        let api_base_url =
            optional(&lookup, API_BASE_VAR).unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        validate_api_base(&api_base_url)?;

        let reply_timeout_secs = match optional(&lookup, REPLY_TIMEOUT_VAR) {
            Some(raw) => raw.parse().map_err(|err| ConfigError::Invalid {
                name: REPLY_TIMEOUT_VAR,
                reason: format!("{raw:?}: {err}"),
            })?,
            None => DEFAULT_REPLY_TIMEOUT_SECS,
        };

        Ok(Self {
            channel_access_token,
            channel_secret,
            host,
            port,
            api_base_url,
            reply_timeout: Duration::from_secs(reply_timeout_secs),
        })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn validate_api_base(raw: &str) -> Result<(), ConfigError> {
    let uri: Uri = raw.parse().map_err(|err| ConfigError::Invalid {
        name: API_BASE_VAR,
        reason: format!("{raw:?}: {err}"),
    })?;
    match (uri.scheme_str(), uri.host()) {
        (Some("http" | "https"), Some(host)) if !host.is_empty() => Ok(()),
        _ => Err(ConfigError::Invalid {
            name: API_BASE_VAR,
            reason: format!("{raw:?} must be an absolute http(s) URL"),
        }),
    }
}

fn optional<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn credential<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = optional(lookup, name).ok_or(ConfigError::Missing(name))?;
    if PLACEHOLDERS.contains(&value.as_str()) {
        return Err(ConfigError::Placeholder(name));
    }
    Ok(value)
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("channel_access_token", &"***")
            .field("channel_secret", &"***")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("api_base_url", &self.api_base_url)
            .field("reply_timeout", &self.reply_timeout)
            .finish()
    }
}
