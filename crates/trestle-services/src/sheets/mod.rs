//! Spreadsheet webhook relay
//!
//! Mirrors persisted submissions into a spreadsheet via a configured webhook.
//! Delivery is strictly best-effort: failures are logged and reported to the
//! caller only as a `sheetsUpdated` flag, never as a request failure, and
//! there are no retries.

pub mod notifier;
pub mod payload;

pub use notifier::{NotifyError, SheetsNotifier, WebhookNotifier};

/// Relay a notification if a webhook URL is configured.
///
/// Returns the `sheetsUpdated` flag: `false` both when the relay is skipped
/// (no URL) and when delivery fails.
pub async fn relay(
    notifier: &dyn SheetsNotifier,
    url: Option<&str>,
    payload: &serde_json::Value,
) -> bool {
    let Some(url) = url else {
        tracing::debug!("No sheets webhook configured, skipping relay");
        return false;
    };

    match notifier.notify(url, payload).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Sheets webhook delivery failed");
            false
        }
    }
}
