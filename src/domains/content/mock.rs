//! Mock content service.
//!
//! Stands in for the SenseNet client: it logs the configured endpoint, waits
//! a fixed delay to mimic network latency and returns a deterministic string.

use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing::{info, instrument, warn};

use super::error::ContentServiceError;
use super::service::ContentService;
use crate::core::config::SenseNetConfig;

/// Content service returning mock details after a simulated delay.
#[derive(Debug, Clone)]
pub struct MockContentService {
    config: SenseNetConfig,
    delay: Duration,
}

impl MockContentService {
    /// Create a mock service from the SenseNet configuration.
    pub fn new(config: SenseNetConfig) -> Self {
        info!(
            "Content service created. ServiceUrl: '{}', ApiKey is {}",
            config.service_url.as_deref().unwrap_or_default(),
            if config.api_key.is_some() { "set" } else { "NOT set" }
        );

        if config.service_url.is_none() {
            warn!("SenseNet service URL is not configured");
        }

        let delay = Duration::from_millis(config.mock_delay_ms);
        Self { config, delay }
    }

    /// The simulated latency applied to every request.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait::async_trait]
impl ContentService for MockContentService {
    #[instrument(skip(self, cancel))]
    async fn get_content_details(
        &self,
        content_id: &str,
        cancel: &CancellationToken,
    ) -> Result<String, ContentServiceError> {
        info!(
            "Fetching content details using service URL {:?}",
            self.config.service_url
        );

        tokio::select! {
            _ = cancel.cancelled() => {
                warn!("Content request cancelled before completion");
                Err(ContentServiceError::Cancelled)
            }
            _ = tokio::time::sleep(self.delay) => {
                Ok(format!("Mock details for content: {}", content_id))
            }
        }
    }
}
