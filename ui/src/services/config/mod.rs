use std::sync::OnceLock;

use reqwest::Url;
use thiserror::Error;
use tracing::warn;

use crate::services::errors::RegistrationError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_COMMERCE_PATH: &str = "/distribuicao";

/// Build-time override for the registry host, e.g. `REDE_ALVA_API_URL=https://api.example.org`
const API_BASE_URL_OVERRIDE: Option<&str> = option_env!("REDE_ALVA_API_URL");

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("api_base_url is not a valid http(s) URL: {0}")]
    InvalidBaseUrl(String),

    #[error("commerce_path must start with '/': {0}")]
    InvalidPath(String),
}

impl From<ConfigError> for RegistrationError {
    fn from(error: ConfigError) -> Self {
        match error {
            ConfigError::InvalidBaseUrl(value) => RegistrationError::Configuration {
                field: "api_base_url".to_string(),
                value,
            },
            ConfigError::InvalidPath(value) => RegistrationError::Configuration {
                field: "commerce_path".to_string(),
                value,
            },
        }
    }
}

/// Where registration requests are sent
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationConfig {
    pub api_base_url: String,
    pub commerce_path: String,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            commerce_path: DEFAULT_COMMERCE_PATH.to_string(),
        }
    }
}

impl RegistrationConfig {
    /// Defaults with the build-time host override applied when present
    pub fn new() -> Self {
        match API_BASE_URL_OVERRIDE {
            Some(base) => Self::with_base_url(base),
            None => Self::default(),
        }
    }

    pub fn with_base_url(base: &str) -> Self {
        Self {
            api_base_url: base.to_string(),
            ..Self::default()
        }
    }

    /// Full URL of the commerce registration endpoint
    pub fn commerce_endpoint(&self) -> String {
        format!(
            "{}{}",
            self.api_base_url.trim_end_matches('/'),
            self.commerce_path
        )
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match Url::parse(&self.api_base_url) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            _ => return Err(ConfigError::InvalidBaseUrl(self.api_base_url.clone())),
        }

        if !self.commerce_path.starts_with('/') {
            return Err(ConfigError::InvalidPath(self.commerce_path.clone()));
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<RegistrationConfig> = OnceLock::new();

/// Get the global configuration, falling back to defaults when the override is invalid
pub fn get_global_config() -> RegistrationConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = RegistrationConfig::new();
            if let Err(e) = config.validate() {
                warn!("Invalid configuration: {}", e);
                RegistrationConfig::default()
            } else {
                config
            }
        })
        .clone()
}
