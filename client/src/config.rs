//! Backend endpoint configuration.
//!
//! The base URL is fixed at build time from `LIBRARY_API_BASE_URL` because the
//! WASM bundle has no process environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

/// Where the REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the compile-time `LIBRARY_API_BASE_URL`, falling back
    /// to [`DEFAULT_API_BASE_URL`].
    pub fn from_build_env() -> Self {
        Self::with_base_url(option_env!("LIBRARY_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Build config from an explicit base URL. Trailing slashes are dropped;
    /// a blank value selects the default.
    pub fn with_base_url(raw: &str) -> Self {
        let trimmed = raw.trim().trim_end_matches('/');
        let base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self { base_url: base_url.to_owned() }
    }

    /// Join a backend path (which must start with `/`) onto the base URL.
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
