//! Counting fakes for the three external collaborators.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use trestle_db::{DbError, DbResult, InsertedRecord, SubmissionStore};
use trestle_services::{NotifyError, SheetsNotifier};
use trestle_storage::{FileStorage, StorageError, StorageResult, StoredFile};

#[derive(Default)]
pub struct RecordingStorage {
    calls: AtomicUsize,
    fail_on_call: Option<usize>,
    pub names: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the nth upload call (1-based) with a simulated outage.
    pub fn failing_on(call: usize) -> Self {
        RecordingStorage {
            fail_on_call: Some(call),
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FileStorage for RecordingStorage {
    async fn upload(
        &self,
        filename: &str,
        _content_type: &str,
        _data: Vec<u8>,
        _folder_id: Option<&str>,
    ) -> StorageResult<StoredFile> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(StorageError::UploadFailed(
                "simulated storage outage".to_string(),
            ));
        }
        self.names.lock().unwrap().push(filename.to_string());
        Ok(StoredFile {
            id: format!("file-{call}"),
            view_url: format!("https://files.test/file-{call}"),
        })
    }
}

#[derive(Default)]
pub struct RecordingStore {
    calls: AtomicUsize,
    fail: bool,
    pub rows: Mutex<Vec<(String, Value)>>,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        RecordingStore {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubmissionStore for RecordingStore {
    async fn insert(&self, table: &str, row: Value) -> DbResult<InsertedRecord> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(DbError::InsertFailed(
                "simulated datastore outage".to_string(),
            ));
        }
        self.rows.lock().unwrap().push((table.to_string(), row));
        Ok(InsertedRecord {
            id: uuid::Uuid::new_v4().to_string(),
            created_at: Utc::now(),
        })
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    calls: AtomicUsize,
    fail: bool,
    pub deliveries: Mutex<Vec<(String, Value)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        RecordingNotifier {
            fail: true,
            ..Default::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SheetsNotifier for RecordingNotifier {
    async fn notify(&self, url: &str, payload: &Value) -> Result<(), NotifyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.deliveries
            .lock()
            .unwrap()
            .push((url.to_string(), payload.clone()));
        if self.fail {
            Err(NotifyError::Status(500))
        } else {
            Ok(())
        }
    }
}
