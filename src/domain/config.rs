//! Application configuration
//!
//! Persisted as `config.toml` in the platform config directory. The backend
//! API token is stored AES-encrypted, never in plaintext.

use crate::error::Result;
use crate::helpers;
use serde::{Deserialize, Serialize};
use std::fs;

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Connection settings for the management backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend, without trailing slash
    pub url: String,
    /// API path prefix appended to the base URL
    pub api_base: String,
    /// AES-256-GCM encrypted API token, Base64 encoded
    #[serde(default)]
    pub token_encrypted: Option<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            api_base: "/api".to_string(),
            token_encrypted: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    crate::constants::REQUEST_TIMEOUT_SECS
}

/// UI preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Locale code, e.g. "en-US" or "de-DE"; None means follow the system
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            locale: None,
            page_size: default_page_size(),
        }
    }
}

fn default_page_size() -> usize {
    crate::constants::DEFAULT_PAGE_SIZE
}

impl UiConfig {
    /// Configured page size constrained to the supported options; a
    /// hand-edited config file falls back to the default.
    pub fn effective_page_size(&self) -> usize {
        if crate::constants::PAGE_SIZE_OPTIONS.contains(&self.page_size) {
            self.page_size
        } else {
            default_page_size()
        }
    }
}

impl BackendConfig {
    /// Build a full endpoint URL from a path like "/library/taf-files"
    pub fn api_url(&self, path: &str) -> String {
        let base = self.url.trim_end_matches('/');
        let api = self.api_base.trim_end_matches('/');
        format!("{base}{api}{path}")
    }

    /// Store a plaintext token encrypted; an empty token clears it
    pub fn set_token(&mut self, token: &str) -> Result<()> {
        if token.is_empty() {
            self.token_encrypted = None;
        } else {
            self.token_encrypted = Some(helpers::string::encrypt(token)?);
        }
        Ok(())
    }

    /// Decrypt the stored token, if any
    pub fn token(&self) -> Result<Option<String>> {
        match &self.token_encrypted {
            Some(encrypted) => Ok(Some(helpers::string::decrypt(encrypted)?)),
            None => Ok(None),
        }
    }
}

impl AppConfig {
    /// Load from the config directory, falling back to defaults when the
    /// file is missing or unreadable
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {e}");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self> {
        let path = helpers::fs::get_or_create_config_dir()?.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Persist to the config directory
    pub fn save(&self) -> Result<()> {
        let path = helpers::fs::get_or_create_config_dir()?.join(CONFIG_FILE);
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_without_double_slash() {
        let backend = BackendConfig {
            url: "http://localhost:8000/".to_string(),
            api_base: "/api".to_string(),
            ..Default::default()
        };
        assert_eq!(
            backend.api_url("/library/taf-files"),
            "http://localhost:8000/api/library/taf-files"
        );
    }

    #[test]
    fn test_token_roundtrip() {
        let mut backend = BackendConfig::default();
        backend.set_token("secret").expect("set token");
        assert!(backend.token_encrypted.is_some());
        assert_ne!(backend.token_encrypted.as_deref(), Some("secret"));
        assert_eq!(backend.token().expect("get token").as_deref(), Some("secret"));
    }

    #[test]
    fn test_empty_token_clears() {
        let mut backend = BackendConfig::default();
        backend.set_token("secret").expect("set token");
        backend.set_token("").expect("clear token");
        assert!(backend.token_encrypted.is_none());
    }

    #[test]
    fn test_effective_page_size_rejects_unknown_values() {
        let mut ui = UiConfig::default();
        ui.page_size = 37;
        assert_eq!(ui.effective_page_size(), crate::constants::DEFAULT_PAGE_SIZE);
        ui.page_size = 25;
        assert_eq!(ui.effective_page_size(), 25);
    }

    #[test]
    fn test_config_toml_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("parse");
        assert_eq!(parsed.backend.url, "http://localhost:8000");
        assert_eq!(parsed.ui.page_size, crate::constants::DEFAULT_PAGE_SIZE);
    }
}
