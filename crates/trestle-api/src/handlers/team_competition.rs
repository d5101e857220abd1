//! Team competition entry: team name + three participants + three PDFs.

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
use trestle_core::models::{CompetitionKind, ParticipantInfo, TeamCompetitionRow};
use trestle_core::{AppError, WebhookTarget};
use trestle_services::sheets::payload;

use super::MB;

pub(crate) static SLOTS: [FileSlot; 3] = [
    FileSlot::pdf("idScan", "id-scan", 20 * MB),
    FileSlot::pdf("paymentProof", "payment-proof", 20 * MB),
    FileSlot::pdf("promoProof", "promo-proof", 20 * MB),
];

static SPEC: EndpointSpec = EndpointSpec {
    submission_type: "team-competition",
    table: "competition_submissions",
    name_field: "teamName",
    slots: &SLOTS,
    webhook: WebhookTarget::Default,
};

pub(crate) static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    let mut fields = vec![
        FieldSpec::required("teamName", vec![Rule::MinLen(2), Rule::MaxLen(100)]),
        FieldSpec::required(
            "competitionKind",
            vec![Rule::OneOf(CompetitionKind::VALUES)],
        ),
    ];
    for prefix in ["leader", "member2", "member3"] {
        fields.extend(ParticipantInfo::field_specs(prefix));
    }
    Schema::new(fields)
});

pub(crate) fn build_row(
    record: &trestle_core::forms::ValidRecord,
    file_ids: std::collections::BTreeMap<String, String>,
    file_urls: std::collections::BTreeMap<String, String>,
) -> Result<TeamCompetitionRow, AppError> {
    let kind = CompetitionKind::parse(record.get("competitionKind")).ok_or_else(|| {
        AppError::Internal("competition kind failed to parse after validation".to_string())
    })?;

    Ok(TeamCompetitionRow {
        team_name: record.get("teamName").to_string(),
        competition_kind: kind,
        team_leader: ParticipantInfo::from_record(record, "leader"),
        member2: ParticipantInfo::from_record(record, "member2"),
        member3: ParticipantInfo::from_record(record, "member3"),
        file_ids,
        file_urls,
        created_at: Utc::now(),
    })
}

#[utoipa::path(
    post,
    path = "/submit-team-competition",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Submission stored", body = ApiResponse),
        (status = 400, description = "Validation or file gate failure", body = ApiResponse),
        (status = 500, description = "Upload, datastore, or configuration failure", body = ApiResponse)
    )
)]
pub async fn submit_team_competition(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let draft = extract::draft_from_multipart(multipart).await?;
    let service = SubmissionService::new(&state);

    let outcome = service
        .submit(&SPEC, &SCHEMA, draft, |record, uploads| {
            let row = build_row(record, uploads.ids(), uploads.urls())?;
            Ok((
                serde_json::to_value(&row)?,
                payload::team_competition(&row),
            ))
        })
        .await?;

    Ok(Json(ApiResponse::success(
        "Team competition submission received successfully",
        json!({
            "submissionId": outcome.inserted.id,
            "fileIds": outcome.uploads.ids(),
            "fileUrls": outcome.uploads.urls(),
            "sheetsUpdated": outcome.sheets_updated,
        }),
    )))
}
