//! Essay submission: one participant, team name, subtheme, one PDF.

use crate::error::{ApiResponse, HttpAppError};
use crate::extract;
use crate::services::submission::{EndpointSpec, SubmissionService};
use crate::state::AppState;
use axum::{
    extract::{Multipart, State},
    Json,
};
use chrono::Utc;
use serde_json::json;
use std::sync::{Arc, LazyLock};
use trestle_core::forms::{FieldSpec, FileSlot, Rule, Schema};
use trestle_core::models::{EssaySubmissionRow, ParticipantInfo};
use trestle_core::{AppError, WebhookTarget};
use trestle_services::sheets::payload;

use super::MB;

static SLOTS: [FileSlot; 1] = [FileSlot::pdf("essayDocument", "essay", 10 * MB)];

static SPEC: EndpointSpec = EndpointSpec {
    submission_type: "essay-submission",
    table: "essay_submissions",
    name_field: "teamName",
    slots: &SLOTS,
    webhook: WebhookTarget::Default,
};

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    let mut fields = vec![
        FieldSpec::required("teamName", vec![Rule::MinLen(2), Rule::MaxLen(100)]),
        FieldSpec::required("subtheme", vec![Rule::MaxLen(200)]),
    ];
    fields.extend(ParticipantInfo::field_specs("participant"));
    Schema::new(fields)
});

#[utoipa::path(
    post,
    path = "/submit-essay",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Submission stored", body = ApiResponse),
        (status = 400, description = "Validation or file gate failure", body = ApiResponse),
        (status = 500, description = "Upload, datastore, or configuration failure", body = ApiResponse)
    )
)]
pub async fn submit_essay(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let draft = extract::draft_from_multipart(multipart).await?;
    let service = SubmissionService::new(&state);

    let outcome = service
        .submit(&SPEC, &SCHEMA, draft, |record, uploads| {
            let essay = uploads.get("essayDocument").ok_or_else(|| {
                AppError::Internal("essay document missing after upload".to_string())
            })?;
            let participant = ParticipantInfo::from_record(record, "participant");
            let row = EssaySubmissionRow {
                team_name: record.get("teamName").to_string(),
                full_name: participant.full_name,
                student_id: participant.student_id,
                phone_number: participant.phone_number,
                messaging_id: participant.messaging_id,
                email: participant.email,
                institution: participant.institution,
                department: participant.department,
                subtheme: record.get("subtheme").to_string(),
                file_id: essay.external_id.clone(),
                file_url: essay.view_url.clone(),
                created_at: Utc::now(),
            };
            Ok((
                serde_json::to_value(&row)?,
                payload::essay_submission(&row),
            ))
        })
        .await?;

    let essay = outcome.uploads.get("essayDocument");
    Ok(Json(ApiResponse::success(
        "Essay submission received successfully",
        json!({
            "submissionId": outcome.inserted.id,
            "fileId": essay.map(|f| f.external_id.clone()),
            "fileUrl": essay.map(|f| f.view_url.clone()),
            "sheetsUpdated": outcome.sheets_updated,
        }),
    )))
}
