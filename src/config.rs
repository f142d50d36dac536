//! Injected configuration for the companion core
//!
//! All endpoints and paths are passed in at construction time so tests can
//! substitute doubles; nothing reads the environment outside `from_env`.

use crate::error::CompanionError;
use crate::Result;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CompanionConfig {
    /// Full URL of the chat endpoint (POST).
    pub chat_endpoint: String,
    /// API key appended to the chat request.
    pub chat_api_key: String,
    /// Base URL of the company data service, no trailing slash.
    pub data_base_url: String,
    /// Directory that receives cached logo artifacts.
    pub cache_dir: PathBuf,
}

impl CompanionConfig {
    pub fn new(
        chat_endpoint: impl Into<String>,
        chat_api_key: impl Into<String>,
        data_base_url: impl Into<String>,
        cache_dir: impl Into<PathBuf>,
    ) -> Self {
        let data_base_url: String = data_base_url.into();

        Self {
            chat_endpoint: chat_endpoint.into(),
            chat_api_key: chat_api_key.into(),
            data_base_url: data_base_url.trim_end_matches('/').to_string(),
            cache_dir: cache_dir.into(),
        }
    }

    /// Build configuration from the environment.
    ///
    /// `CHAT_ENDPOINT` and `COMPANY_API_BASE_URL` are required;
    /// `CHAT_API_KEY` defaults to empty and `COMPANION_CACHE_DIR` falls back
    /// to the system temp directory.
    pub fn from_env() -> Result<Self> {
        let chat_endpoint = env::var("CHAT_ENDPOINT").map_err(|_| {
            CompanionError::ConfigError("CHAT_ENDPOINT is not configured".to_string())
        })?;

        let data_base_url = env::var("COMPANY_API_BASE_URL").map_err(|_| {
            CompanionError::ConfigError("COMPANY_API_BASE_URL is not configured".to_string())
        })?;

        let chat_api_key = env::var("CHAT_API_KEY").unwrap_or_default();

        let cache_dir = env::var("COMPANION_CACHE_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| env::temp_dir().join("companion_logos"));

        Ok(Self::new(chat_endpoint, chat_api_key, data_base_url, cache_dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let config = CompanionConfig::new(
            "https://chat.example.com/generate",
            "key",
            "https://data.example.com/",
            "/tmp/logos",
        );
        assert_eq!(config.data_base_url, "https://data.example.com");
    }
}
