use dotenvy::dotenv;
use std::env;

/// Environment variable holding the backend base URL.
pub const BASE_URL_VAR: &str = "CIVIC_API_BASE_URL";

/// Environment variable toggling mock data ("false" or "0" turns mocks off).
pub const USE_MOCKS_VAR: &str = "CIVIC_USE_MOCKS";

const DEFAULT_USE_MOCKS: bool = true;

/// Client configuration.
///
/// Owned by the dispatcher rather than read from process state on every
/// call, so tests can build dispatchers with different settings side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Option<String>,
    use_mocks: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::mocked()
    }
}

impl ApiConfig {
    /// Mocks on, no backend.
    pub fn mocked() -> Self {
        Self {
            base_url: None,
            use_mocks: DEFAULT_USE_MOCKS,
        }
    }

    /// Mocks off, talking to `base_url`.
    pub fn remote(base_url: impl Into<String>) -> Self {
        Self::mocked().with_base_url(base_url).with_use_mocks(false)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup(BASE_URL_VAR).filter(|url| !url.trim().is_empty());
        let use_mocks = Self::parse_use_mocks(lookup(USE_MOCKS_VAR).as_deref());

        Self {
            base_url,
            use_mocks,
        }
    }

    /// Interpret the mocks toggle. Only "false" (any case) and "0" disable
    /// mocks; anything else, including an absent value, leaves them on.
    pub fn parse_use_mocks(raw: Option<&str>) -> bool {
        match raw {
            Some(value) => !(value.eq_ignore_ascii_case("false") || value == "0"),
            None => DEFAULT_USE_MOCKS,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = if url.trim().is_empty() { None } else { Some(url) };
        self
    }

    pub fn without_base_url(mut self) -> Self {
        self.base_url = None;
        self
    }

    pub fn with_use_mocks(mut self, use_mocks: bool) -> Self {
        self.use_mocks = use_mocks;
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn use_mocks(&self) -> bool {
        self.use_mocks
    }
}
