//! Configuration loading and resolution.
//!
//! Every setting resolves as: explicit CLI value, then environment variable,
//! then built-in default.

use pagelens::{HttpFetcher, DEFAULT_TIMEOUT_MS};

pub const TIMEOUT_ENV: &str = "PAGELENS_TIMEOUT_MS";
pub const USER_AGENT_ENV: &str = "PAGELENS_USER_AGENT";
pub const TOKEN_ENV: &str = "PAGELENS_TOKEN";

/// Settings for the page fetcher shared by all tool calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout_ms: u64,
    pub user_agent: String,
}

impl FetchConfig {
    pub fn resolve(timeout_ms: Option<u64>, user_agent: Option<&str>) -> Self {
        Self {
            timeout_ms: resolve_timeout_ms(timeout_ms),
            user_agent: resolve_user_agent(user_agent),
        }
    }
}

/// Resolve the HTTP timeout in milliseconds. Zero or unparsable values fall
/// through to the next source.
pub fn resolve_timeout_ms(explicit: Option<u64>) -> u64 {
    if let Some(ms) = explicit.filter(|ms| *ms > 0) {
        return ms;
    }

    if let Ok(raw) = std::env::var(TIMEOUT_ENV) {
        match raw.trim().parse::<u64>() {
            Ok(ms) if ms > 0 => return ms,
            _ => tracing::warn!("Ignoring invalid {TIMEOUT_ENV}={raw}"),
        }
    }

    DEFAULT_TIMEOUT_MS
}

/// Resolve the User-Agent header sent with page requests.
pub fn resolve_user_agent(explicit: Option<&str>) -> String {
    if let Some(ua) = explicit.map(str::trim).filter(|ua| !ua.is_empty()) {
        return ua.to_string();
    }

    if let Ok(env_ua) = std::env::var(USER_AGENT_ENV) {
        if !env_ua.trim().is_empty() {
            return env_ua.trim().to_string();
        }
    }

    HttpFetcher::default_user_agent()
}

/// Resolve the bearer token for the HTTP transport, if any.
pub fn resolve_token(explicit: Option<String>) -> Option<String> {
    explicit
        .or_else(|| std::env::var(TOKEN_ENV).ok())
        .filter(|token| !token.is_empty())
}
