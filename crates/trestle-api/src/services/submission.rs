//! The generic submission pipeline
//!
//! Every submission endpoint is the same machine with different parameters:
//! validate the draft against a schema, gate the file slots, fan the accepted
//! blobs out to storage, persist exactly one row, then best-effort relay to
//! the spreadsheet webhook. `EndpointSpec` carries the per-endpoint
//! parameters so the stages are written once.
//!
//! Ordering is load-bearing: no collaborator is called before validation and
//! gating pass, and the datastore is only reached after every upload has
//! succeeded, so a persisted row never references a missing file. A failed
//! insert leaves already-uploaded files orphaned by design; there is no
//! compensating delete and no retry.

use crate::state::AppState;
use futures::future;
use std::collections::BTreeMap;
use std::sync::Arc;
use trestle_core::forms::{check_files, DraftRecord, FileSlot, Schema, ValidRecord};
use trestle_core::models::UploadedFileRef;
use trestle_core::{AppError, WebhookTarget};
use trestle_db::InsertedRecord;
use trestle_storage::{extension_for, unique_file_name};

/// Per-endpoint pipeline parameters.
pub struct EndpointSpec {
    /// Tag used in logs and spreadsheet payloads, e.g. `team-competition`.
    pub submission_type: &'static str,
    /// Datastore table the persisted row goes to.
    pub table: &'static str,
    /// Field whose validated value seeds generated storage names.
    pub name_field: &'static str,
    pub slots: &'static [FileSlot],
    pub webhook: WebhookTarget,
}

/// Uploaded file references keyed by slot name.
#[derive(Debug, Default)]
pub struct SlotUploads(BTreeMap<&'static str, UploadedFileRef>);

impl SlotUploads {
    pub fn get(&self, slot: &str) -> Option<&UploadedFileRef> {
        self.0.get(slot)
    }

    pub fn ids(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(slot, file)| (slot.to_string(), file.external_id.clone()))
            .collect()
    }

    pub fn urls(&self) -> BTreeMap<String, String> {
        self.0
            .iter()
            .map(|(slot, file)| (slot.to_string(), file.view_url.clone()))
            .collect()
    }
}

/// Everything a handler needs to compose its success payload.
pub struct SubmissionOutcome {
    pub record: ValidRecord,
    pub uploads: SlotUploads,
    pub inserted: InsertedRecord,
    pub sheets_updated: bool,
}

pub struct SubmissionService {
    state: Arc<AppState>,
}

impl SubmissionService {
    pub fn new(state: &Arc<AppState>) -> Self {
        SubmissionService {
            state: state.clone(),
        }
    }

    /// Run the whole pipeline for one decoded draft.
    ///
    /// `build` turns the validated record and upload handles into the
    /// datastore row and the spreadsheet payload; it runs only after every
    /// upload succeeded.
    pub async fn submit(
        &self,
        spec: &EndpointSpec,
        schema: &Schema,
        mut draft: DraftRecord,
        build: impl FnOnce(
            &ValidRecord,
            &SlotUploads,
        ) -> Result<(serde_json::Value, serde_json::Value), AppError>,
    ) -> Result<SubmissionOutcome, AppError> {
        let record = self.validate(schema, spec.slots, &draft)?;
        let uploads = self
            .upload_files(spec.slots, &mut draft, record.get(spec.name_field))
            .await?;
        let (row, sheet_payload) = build(&record, &uploads)?;
        let inserted = self.persist(spec.table, row).await?;
        let sheets_updated = self.relay(spec.webhook, &sheet_payload).await;

        tracing::info!(
            submission_type = spec.submission_type,
            id = %inserted.id,
            sheets_updated,
            "Submission persisted"
        );

        Ok(SubmissionOutcome {
            record,
            uploads,
            inserted,
            sheets_updated,
        })
    }

    /// Scalar validation then the file gate. Exhaustive within each stage;
    /// nothing touches the network until both pass.
    pub fn validate(
        &self,
        schema: &Schema,
        slots: &[FileSlot],
        draft: &DraftRecord,
    ) -> Result<ValidRecord, AppError> {
        let record = schema.validate(draft).map_err(AppError::Validation)?;
        check_files(slots, draft).map_err(AppError::FileRejected)?;
        Ok(record)
    }

    /// Fan the gated blobs out to storage concurrently and wait for all of
    /// them; the first failure aborts the request.
    pub async fn upload_files(
        &self,
        slots: &[FileSlot],
        draft: &mut DraftRecord,
        base_name: &str,
    ) -> Result<SlotUploads, AppError> {
        let storage = self.state.storage()?;
        let folder = self.state.config.drive_folder_id.as_deref();

        let mut jobs = Vec::with_capacity(slots.len());
        for slot in slots {
            // Absent optional slots were admitted by the gate.
            if let Some(blob) = draft.take_file(slot.name) {
                jobs.push((slot, blob));
            }
        }

        let uploaded = future::try_join_all(jobs.into_iter().map(|(slot, blob)| {
            let storage = storage.clone();
            let filename =
                unique_file_name(base_name, slot.label, extension_for(&blob.content_type));
            async move {
                let stored = storage
                    .upload(&filename, &blob.content_type, blob.bytes.to_vec(), folder)
                    .await
                    .map_err(|e| AppError::Storage(e.to_string()))?;
                Ok::<_, AppError>((
                    slot.name,
                    UploadedFileRef {
                        external_id: stored.id,
                        view_url: stored.view_url,
                        declared_mime_type: blob.content_type,
                    },
                ))
            }
        }))
        .await?;

        Ok(SlotUploads(uploaded.into_iter().collect()))
    }

    /// Write exactly one row. Reached only after every upload succeeded.
    pub async fn persist(
        &self,
        table: &str,
        row: serde_json::Value,
    ) -> Result<InsertedRecord, AppError> {
        let store = self.state.submissions()?;
        store
            .insert(table, row)
            .await
            .map_err(|e| AppError::Database(e.to_string()))
    }

    /// Best-effort spreadsheet relay; never fails the request.
    pub async fn relay(&self, target: WebhookTarget, payload: &serde_json::Value) -> bool {
        trestle_services::relay(
            self.state.notifier(),
            self.state.config.webhook_url(target),
            payload,
        )
        .await
    }
}
