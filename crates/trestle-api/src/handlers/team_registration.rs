//! JSON-only team registration.
//!
//! Clients upload each file beforehand through `/upload-file` (to stay under
//! platform body-size ceilings) and submit here with the returned file
//! references instead of attachments. Scalar validation is shared with the
//! multipart team-competition endpoint; the upload stage is skipped.

use crate::error::{ApiResponse, HttpAppError, ValidatedJson};
use crate::extract;
use crate::services::submission::SubmissionService;
use crate::state::AppState;
use axum::{extract::State, Json};
use serde_json::json;
use std::collections::BTreeMap;
use std::sync::Arc;
use trestle_core::forms::{FieldErrors, FileSlot};
use trestle_core::{AppError, WebhookTarget};
use trestle_services::sheets::payload;

use super::team_competition;

const TABLE: &str = "competition_submissions";

/// Collect the per-slot file references under `fileIds` / `fileUrls`,
/// reporting missing ones into the shared error map.
fn collect_refs(
    body: &serde_json::Value,
    key: &str,
    slots: &[FileSlot],
    errors: &mut FieldErrors,
) -> BTreeMap<String, String> {
    let mut refs = BTreeMap::new();
    for slot in slots {
        match body[key][slot.name]
            .as_str()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(value) => {
                refs.insert(slot.name.to_string(), value.to_string());
            }
            None => errors.push(format!("{key}.{}", slot.name), "is required"),
        }
    }
    refs
}

#[utoipa::path(
    post,
    path = "/submit-team-registration",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "application/json"),
    responses(
        (status = 200, description = "Registration stored", body = ApiResponse),
        (status = 400, description = "Validation failure", body = ApiResponse),
        (status = 500, description = "Datastore or configuration failure", body = ApiResponse)
    )
)]
pub async fn submit_team_registration(
    State(state): State<Arc<AppState>>,
    ValidatedJson(body): ValidatedJson<serde_json::Value>,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let draft = extract::draft_from_json(&body, &["leader", "member2", "member3"]);

    let mut errors = FieldErrors::default();
    let record = match team_competition::SCHEMA.validate(&draft) {
        Ok(record) => Some(record),
        Err(scalar_errors) => {
            errors.merge(scalar_errors);
            None
        }
    };
    let file_ids = collect_refs(&body, "fileIds", &team_competition::SLOTS, &mut errors);
    let file_urls = collect_refs(&body, "fileUrls", &team_competition::SLOTS, &mut errors);

    let record = match record {
        Some(record) if errors.is_empty() => record,
        _ => return Err(AppError::Validation(errors).into()),
    };

    let row = team_competition::build_row(&record, file_ids, file_urls)?;

    let service = SubmissionService::new(&state);
    let row_json = serde_json::to_value(&row).map_err(AppError::from)?;
    let inserted = service.persist(TABLE, row_json).await?;
    let sheets_updated = service
        .relay(WebhookTarget::TeamRegistration, &payload::team_registration(&row))
        .await;

    tracing::info!(
        submission_type = "team-registration",
        id = %inserted.id,
        sheets_updated,
        "Submission persisted"
    );

    Ok(Json(ApiResponse::success(
        "Team registration received successfully",
        json!({
            "submissionId": inserted.id,
            "sheetsUpdated": sheets_updated,
        }),
    )))
}
