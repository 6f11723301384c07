//! API client configuration.
//!
//! The browser bundle has no process environment, so the base URL override is
//! captured at build time through `PORTAL_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:5000";

/// Location of the subscription backend, passed explicitly to each panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config from a base URL. Trailing slashes are dropped; a blank
    /// value falls back to [`DEFAULT_API_BASE_URL`].
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Config baked in at compile time, or the default backend address.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("PORTAL_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path such as `/api/login`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url())
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL)
    }
}
