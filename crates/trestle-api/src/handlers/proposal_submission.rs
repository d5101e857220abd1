//! Proposal submission: one participant, team name, subtheme, the proposal
//! PDF plus the cost-plan spreadsheet.

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
use trestle_core::models::{ParticipantInfo, ProposalSubmissionRow};
use trestle_core::{AppError, WebhookTarget};
use trestle_services::sheets::payload;

use super::MB;

static SLOTS: [FileSlot; 2] = [
    FileSlot::pdf("proposalDocument", "proposal", 10 * MB),
    FileSlot::spreadsheet("costPlan", "cost-plan", 20 * MB),
];

static SPEC: EndpointSpec = EndpointSpec {
    submission_type: "proposal-submission",
    table: "proposal_submissions",
    name_field: "teamName",
    slots: &SLOTS,
    webhook: WebhookTarget::Proposal,
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
    path = "/submit-proposal",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Submission stored", body = ApiResponse),
        (status = 400, description = "Validation or file gate failure", body = ApiResponse),
        (status = 500, description = "Upload, datastore, or configuration failure", body = ApiResponse)
    )
)]
pub async fn submit_proposal(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let draft = extract::draft_from_multipart(multipart).await?;
    let service = SubmissionService::new(&state);

    let outcome = service
        .submit(&SPEC, &SCHEMA, draft, |record, uploads| {
            let proposal = uploads.get("proposalDocument").ok_or_else(|| {
                AppError::Internal("proposal document missing after upload".to_string())
            })?;
            let cost_plan = uploads.get("costPlan").ok_or_else(|| {
                AppError::Internal("cost plan missing after upload".to_string())
            })?;
            let participant = ParticipantInfo::from_record(record, "participant");
            let row = ProposalSubmissionRow {
                team_name: record.get("teamName").to_string(),
                full_name: participant.full_name,
                student_id: participant.student_id,
                phone_number: participant.phone_number,
                messaging_id: participant.messaging_id,
                email: participant.email,
                institution: participant.institution,
                department: participant.department,
                subtheme: record.get("subtheme").to_string(),
                proposal_file_id: proposal.external_id.clone(),
                proposal_file_url: proposal.view_url.clone(),
                cost_plan_file_id: cost_plan.external_id.clone(),
                cost_plan_file_url: cost_plan.view_url.clone(),
                created_at: Utc::now(),
            };
            Ok((
                serde_json::to_value(&row)?,
                payload::proposal_submission(&row),
            ))
        })
        .await?;

    let proposal = outcome.uploads.get("proposalDocument");
    let cost_plan = outcome.uploads.get("costPlan");
    Ok(Json(ApiResponse::success(
        "Proposal submission received successfully",
        json!({
            "submissionId": outcome.inserted.id,
            "fileId": proposal.map(|f| f.external_id.clone()),
            "fileUrl": proposal.map(|f| f.view_url.clone()),
            "costPlanFileId": cost_plan.map(|f| f.external_id.clone()),
            "costPlanFileUrl": cost_plan.map(|f| f.view_url.clone()),
            "sheetsUpdated": outcome.sheets_updated,
        }),
    )))
}
