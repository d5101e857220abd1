use anyhow::{Context, Result};
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("Webhook request failed: {0}")]
    Request(String),

    #[error("Webhook returned status {0}")]
    Status(u16),
}

/// Spreadsheet webhook collaborator: deliver one JSON payload to one URL.
#[async_trait]
pub trait SheetsNotifier: Send + Sync {
    async fn notify(&self, url: &str, payload: &serde_json::Value) -> Result<(), NotifyError>;
}

/// HTTP implementation with a bounded per-request timeout.
#[derive(Clone)]
pub struct WebhookNotifier {
    http: reqwest::Client,
}

impl WebhookNotifier {
    pub fn new(timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to create HTTP client for sheets webhooks")?;
        Ok(WebhookNotifier { http })
    }
}

#[async_trait]
impl SheetsNotifier for WebhookNotifier {
    async fn notify(&self, url: &str, payload: &serde_json::Value) -> Result<(), NotifyError> {
        let response = self
            .http
            .post(url)
            .json(payload)
            .send()
            .await
            .map_err(|e| NotifyError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(NotifyError::Status(status.as_u16()));
        }

        tracing::debug!(status = %status, "Sheets webhook delivered");
        Ok(())
    }
}
