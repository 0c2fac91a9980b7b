use std::{env, time::Duration};

use thiserror::Error;
use url::Url;

pub const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";
pub const DEFAULT_NOTICE_TTL_SECS: u64 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid backend URL {value:?}: {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("{var} must be a whole number of seconds, got {value:?}")]
    InvalidSeconds { var: &'static str, value: String },
}

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Backend base URL, without a trailing slash.
    pub backend_url: String,
    /// Cookie header sent with credentialed requests.
    pub session_cookie: Option<String>,
    /// Per-request timeout. Unset means requests may wait indefinitely.
    pub request_timeout: Option<Duration>,
    /// How long auto-dismissing notices stay visible.
    pub notice_ttl: Duration,
}

impl Config {
    /// Configuration for `backend_url` with every other value at its default.
    pub fn new(backend_url: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: normalize_url(backend_url)?,
            session_cookie: None,
            request_timeout: None,
            notice_ttl: Duration::from_secs(DEFAULT_NOTICE_TTL_SECS),
        })
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `MEMBERDB_BACKEND_URL` - Backend base URL (default: "http://localhost:5000")
    /// - `MEMBERDB_SESSION_COOKIE` - Cookie header for credentialed requests (default: unset)
    /// - `MEMBERDB_REQUEST_TIMEOUT_SECS` - Request timeout in seconds (default: unset)
    /// - `MEMBERDB_NOTICE_TTL_SECS` - Notice auto-dismiss delay in seconds (default: 5)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let backend_url =
            lookup("MEMBERDB_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let mut config = Self::new(&backend_url)?;
        config.session_cookie = lookup("MEMBERDB_SESSION_COOKIE").filter(|c| !c.is_empty());
        config.request_timeout =
            parse_seconds("MEMBERDB_REQUEST_TIMEOUT_SECS", lookup("MEMBERDB_REQUEST_TIMEOUT_SECS"))?;
        if let Some(ttl) =
            parse_seconds("MEMBERDB_NOTICE_TTL_SECS", lookup("MEMBERDB_NOTICE_TTL_SECS"))?
        {
            config.notice_ttl = ttl;
        }
        Ok(config)
    }

    pub fn with_backend_url(mut self, backend_url: &str) -> Result<Self, ConfigError> {
        self.backend_url = normalize_url(backend_url)?;
        Ok(self)
    }

    pub fn with_session_cookie(mut self, cookie: Option<String>) -> Self {
        self.session_cookie = cookie.filter(|c| !c.is_empty());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }
}

fn normalize_url(value: &str) -> Result<String, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl {
        value: value.to_string(),
        source,
    })?;
    Ok(url.as_str().trim_end_matches('/').to_string())
}

fn parse_seconds(
    var: &'static str,
    value: Option<String>,
) -> Result<Option<Duration>, ConfigError> {
    match value {
        None => Ok(None),
        Some(value) if value.trim().is_empty() => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(|secs| Some(Duration::from_secs(secs)))
            .map_err(|_| ConfigError::InvalidSeconds { var, value }),
    }
}
