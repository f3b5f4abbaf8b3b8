//! Client configuration.

/// Default backend API base when `WHISK_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Backend client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base path of the backend REST API, without a trailing slash.
    pub base_url: String,
}

impl ClientConfig {
    /// Build from the environment, falling back to the default base URL.
    pub fn from_env() -> Self {
        let base_url = std::env::var("WHISK_API_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::new(base_url)
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_stripped() {
        let config = ClientConfig::new("http://localhost:8000/api/");
        assert_eq!(config.base_url, "http://localhost:8000/api");
    }

    #[test]
    fn test_default_base_url() {
        assert_eq!(ClientConfig::default().base_url, DEFAULT_API_URL);
    }
}
