//! Standalone single-file upload.
//!
//! Lets clients push each large attachment ahead of a JSON-only registration
//! call, keeping individual requests under platform body-size ceilings. The
//! file arrives under a generic `file` part together with the logical slot it
//! is destined for and the team name used purely for storage naming.

use crate::error::{ApiResponse, HttpAppError};
use crate::extract;
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use serde_json::json;
use std::sync::{Arc, LazyLock};
use trestle_core::forms::{check_files, DraftRecord, FieldErrors, FieldSpec, Rule, Schema};
use trestle_core::AppError;
use trestle_storage::{extension_for, unique_file_name};

use super::team_competition;

const FILE_TYPES: &[&str] = &["idScan", "paymentProof", "promoProof"];

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        FieldSpec::required("fileType", vec![Rule::OneOf(FILE_TYPES)]),
        FieldSpec::required("teamName", vec![Rule::MaxLen(100)]),
    ])
});

#[utoipa::path(
    post,
    path = "/upload-file",
    tag = "files",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded", body = ApiResponse),
        (status = 400, description = "Validation or file gate failure", body = ApiResponse),
        (status = 500, description = "Upload or configuration failure", body = ApiResponse)
    )
)]
pub async fn upload_file(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let mut draft = extract::draft_from_multipart(multipart).await?;
    let record = SCHEMA.validate(&draft).map_err(AppError::Validation)?;

    let file_type = record.get("fileType");
    let slot = team_competition::SLOTS
        .iter()
        .find(|slot| slot.name == file_type)
        .ok_or_else(|| {
            AppError::Internal("file type failed to resolve after validation".to_string())
        })?;

    let Some(blob) = draft.take_file("file") else {
        let mut errors = FieldErrors::default();
        errors.push("file", "is required");
        return Err(AppError::FileRejected(errors).into());
    };

    // Re-key the blob under its destination slot so the shared gate applies
    // that slot's MIME and size ceiling.
    let mut gated = DraftRecord::new();
    gated.insert_file(slot.name, blob.clone());
    check_files(std::slice::from_ref(slot), &gated).map_err(AppError::FileRejected)?;

    let storage = state.storage()?;
    let filename = unique_file_name(
        record.get("teamName"),
        slot.label,
        extension_for(&blob.content_type),
    );
    let stored = storage
        .upload(
            &filename,
            &blob.content_type,
            blob.bytes.to_vec(),
            state.config.drive_folder_id.as_deref(),
        )
        .await
        .map_err(|e| AppError::Storage(e.to_string()))?;

    Ok(Json(ApiResponse::success(
        "File uploaded successfully",
        json!({
            "externalId": stored.id,
            "viewUrl": stored.view_url,
            "fileName": filename,
            "fileType": slot.name,
        }),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_type_list_matches_the_team_slots() {
        let slot_names: Vec<&str> = team_competition::SLOTS.iter().map(|s| s.name).collect();
        assert_eq!(FILE_TYPES, slot_names.as_slice());
    }
}
