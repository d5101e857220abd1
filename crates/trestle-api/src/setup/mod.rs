//! Application assembly: construct collaborator clients from configuration,
//! wire them into shared state, and build the router.

pub mod routes;
pub mod server;

use crate::state::AppState;
use axum::Router;
use std::sync::Arc;
use std::time::Duration;
use trestle_core::Config;
use trestle_db::{PostgrestStore, SubmissionStore};
use trestle_services::{SheetsNotifier, WebhookNotifier};
use trestle_storage::{DriveStorage, FileStorage};

/// Build the application state and router.
///
/// Unconfigured or unconstructable collaborators are wired as absent rather
/// than aborting startup; the affected endpoints answer with the
/// configuration-error response until the environment is fixed.
pub fn initialize_app(config: Config) -> Result<(Arc<AppState>, Router), anyhow::Error> {
    let storage: Option<Arc<dyn FileStorage>> = match &config.drive_service_account_key {
        Some(key) => match DriveStorage::new(key) {
            Ok(storage) => Some(Arc::new(storage)),
            Err(e) => {
                tracing::error!(error = %e, "File storage client unavailable, uploads will be rejected");
                None
            }
        },
        None => {
            tracing::warn!("DRIVE_SERVICE_ACCOUNT_KEY not set, uploads will be rejected");
            None
        }
    };

    let submissions: Option<Arc<dyn SubmissionStore>> =
        match (&config.supabase_url, &config.supabase_service_key) {
            (Some(url), Some(key)) => Some(Arc::new(PostgrestStore::new(url, key))),
            _ => {
                tracing::warn!(
                    "SUPABASE_URL / SUPABASE_SERVICE_KEY not set, persistence will be rejected"
                );
                None
            }
        };

    let notifier: Arc<dyn SheetsNotifier> = Arc::new(WebhookNotifier::new(
        Duration::from_secs(config.webhook_timeout_seconds),
    )?);

    let state = Arc::new(AppState::new(config.clone(), storage, submissions, notifier));
    let router = routes::setup_routes(&config, state.clone())?;

    Ok((state, router))
}
