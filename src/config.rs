// Configuration: the backend base URL is the only setting. It is read once
// at startup from the environment (or overridden by `--api-base`) and then
// handed to `ApiClient`. Nothing is written back to disk.

/// Environment variable holding the backend base URL.
pub const API_BASE_ENV: &str = "SMARTCURATOR_API_BASE_URL";

/// Environment variable the one-shot commands read a bearer token from.
pub const TOKEN_ENV: &str = "SMARTCURATOR_TOKEN";

/// Local placeholder used when no base URL is configured.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base_url: String,
}

impl Config {
    /// Build a config for an explicit base URL. A trailing slash is dropped
    /// so endpoint paths (which start with `/`) join cleanly.
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() {
            DEFAULT_API_BASE.to_string()
        } else {
            trimmed.to_string()
        };
        Config { api_base_url }
    }

    /// Read `SMARTCURATOR_API_BASE_URL`, falling back to the local default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        match lookup(API_BASE_ENV) {
            Some(url) => Config::new(&url),
            None => Config::new(DEFAULT_API_BASE),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_API_BASE)
    }
}
