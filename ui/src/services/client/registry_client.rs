use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, instrument, warn};

use crate::features::commerce::CommerceRecord;
use crate::services::config::RegistrationConfig;
use crate::services::errors::{RegistrationError, RegistrationResult};

/// Sends a validated commerce record to the remote registry
#[async_trait(?Send)]
pub trait CommerceSubmitter {
    /// Perform exactly one registration attempt
    async fn submit(&self, record: &CommerceRecord) -> RegistrationResult<()>;
}

/// HTTP client for the energy registry backend
#[derive(Clone)]
pub struct RegistryClient {
    pub(crate) http_client: Client,
    commerce_endpoint: String,
}

impl RegistryClient {
    /// Create a client for the given configuration
    pub fn new(config: &RegistrationConfig) -> RegistrationResult<Self> {
        config.validate()?;
        Ok(Self {
            http_client: Client::new(),
            commerce_endpoint: config.commerce_endpoint(),
        })
    }

    pub fn commerce_endpoint(&self) -> &str {
        &self.commerce_endpoint
    }

    /// POST the record as JSON. Non-2xx answers carry the response body as the message.
    #[instrument(skip(self), err)]
    pub async fn register_commerce(&self, record: &CommerceRecord) -> RegistrationResult<()> {
        info!("Registering commerce at {}", self.commerce_endpoint);

        let response = self
            .http_client
            .post(&self.commerce_endpoint)
            .header("Content-Type", "application/json")
            .json(record)
            .send()
            .await
            .map_err(|e| RegistrationError::Transport {
                message: format!("Failed to call {}: {}", self.commerce_endpoint, e),
            })?;

        let status = response.status();
        if status.is_success() {
            info!("Commerce registered (status {})", status.as_u16());
            return Ok(());
        }

        let message = response
            .text()
            .await
            .map_err(|e| RegistrationError::Transport {
                message: format!("Failed to read error response: {}", e),
            })?;

        warn!("Registry rejected commerce (status {}): {}", status.as_u16(), message);
        Err(RegistrationError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

#[async_trait(?Send)]
impl CommerceSubmitter for RegistryClient {
    async fn submit(&self, record: &CommerceRecord) -> RegistrationResult<()> {
        self.register_commerce(record).await
    }
}
