//! Hosted-Postgres REST implementation of [`SubmissionStore`].
//!
//! Rows go through `POST {base}/rest/v1/{table}` with the project's service
//! key and `Prefer: return=representation`, so the response carries the
//! persisted row back including its assigned id.

use crate::store::{DbError, DbResult, InsertedRecord, SubmissionStore};
use async_trait::async_trait;
use chrono::{DateTime, Utc};

pub struct PostgrestStore {
    http: reqwest::Client,
    base_url: String,
    service_key: String,
}

impl PostgrestStore {
    pub fn new(base_url: impl Into<String>, service_key: impl Into<String>) -> Self {
        PostgrestStore {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            service_key: service_key.into(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

/// Pull id and created_at out of a `return=representation` response body.
fn parse_inserted(body: &serde_json::Value) -> DbResult<InsertedRecord> {
    let row = body
        .as_array()
        .and_then(|rows| rows.first())
        .ok_or_else(|| DbError::InvalidResponse("expected a returned row".to_string()))?;

    let id = match &row["id"] {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        _ => {
            return Err(DbError::InvalidResponse(
                "returned row has no id".to_string(),
            ))
        }
    };

    let created_at = row["created_at"]
        .as_str()
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc))
        .ok_or_else(|| {
            DbError::InvalidResponse("returned row has no created_at".to_string())
        })?;

    Ok(InsertedRecord { id, created_at })
}

#[async_trait]
impl SubmissionStore for PostgrestStore {
    async fn insert(&self, table: &str, row: serde_json::Value) -> DbResult<InsertedRecord> {
        let start = std::time::Instant::now();
        let response = self
            .http
            .post(self.table_url(table))
            .header("apikey", &self.service_key)
            .bearer_auth(&self.service_key)
            .header("Prefer", "return=representation")
            .json(&serde_json::Value::Array(vec![row]))
            .send()
            .await
            .map_err(|e| DbError::InsertFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                table = %table,
                status = %status,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Datastore insert failed"
            );
            return Err(DbError::InsertFailed(format!(
                "datastore returned {}: {}",
                status, detail
            )));
        }

        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| DbError::InvalidResponse(e.to_string()))?;
        let inserted = parse_inserted(&body)?;

        tracing::info!(
            table = %table,
            id = %inserted.id,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Datastore insert successful"
        );

        Ok(inserted)
    }
}
