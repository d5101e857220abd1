//! Application state.
//!
//! Collaborator clients are constructed once at startup and injected here as
//! trait objects, so handlers and tests never reach for process-global
//! clients. Storage and datastore are optional: when unconfigured, their
//! accessors produce the configuration-error response instead of panicking
//! at startup.

use std::sync::Arc;
use trestle_core::{AppError, Config};
use trestle_db::SubmissionStore;
use trestle_services::SheetsNotifier;
use trestle_storage::FileStorage;

pub struct AppState {
    pub config: Config,
    storage: Option<Arc<dyn FileStorage>>,
    submissions: Option<Arc<dyn SubmissionStore>>,
    notifier: Arc<dyn SheetsNotifier>,
}

impl AppState {
    pub fn new(
        config: Config,
        storage: Option<Arc<dyn FileStorage>>,
        submissions: Option<Arc<dyn SubmissionStore>>,
        notifier: Arc<dyn SheetsNotifier>,
    ) -> Self {
        AppState {
            config,
            storage,
            submissions,
            notifier,
        }
    }

    pub fn storage(&self) -> Result<&Arc<dyn FileStorage>, AppError> {
        self.storage
            .as_ref()
            .ok_or_else(|| AppError::Config("file storage is not configured".to_string()))
    }

    pub fn submissions(&self) -> Result<&Arc<dyn SubmissionStore>, AppError> {
        self.submissions
            .as_ref()
            .ok_or_else(|| AppError::Config("datastore is not configured".to_string()))
    }

    pub fn notifier(&self) -> &dyn SheetsNotifier {
        self.notifier.as_ref()
    }
}
