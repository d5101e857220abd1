use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Insert failed: {0}")]
    InsertFailed(String),

    #[error("Unexpected datastore response: {0}")]
    InvalidResponse(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// The persisted row's identity, as assigned by the datastore.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InsertedRecord {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

/// Datastore abstraction trait.
///
/// One insert per successful pipeline run, only after every required upload
/// has succeeded. Uniqueness is intentionally not enforced here; resubmission
/// is the product's correction path.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn insert(&self, table: &str, row: serde_json::Value) -> DbResult<InsertedRecord>;
}
