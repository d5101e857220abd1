//! Event registration: one person's contact fields, the event, optional
//! freeform requirements, and an optional supporting PDF.

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
use trestle_core::models::{EventKind, EventRegistrationRow};
use trestle_core::{AppError, WebhookTarget};
use trestle_services::sheets::payload;

use super::MB;

static SLOTS: [FileSlot; 1] = [FileSlot::optional_pdf(
    "supportingDocument",
    "supporting-document",
    10 * MB,
)];

static SPEC: EndpointSpec = EndpointSpec {
    submission_type: "event-registration",
    table: "event_registrations",
    name_field: "fullName",
    slots: &SLOTS,
    webhook: WebhookTarget::Default,
};

static SCHEMA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::new(vec![
        FieldSpec::required("fullName", vec![Rule::MinLen(2), Rule::MaxLen(100)]),
        FieldSpec::required("email", vec![Rule::Email]),
        FieldSpec::required("phoneNumber", vec![Rule::Phone { min_digits: 10 }]),
        FieldSpec::required("institution", vec![Rule::MinLen(2), Rule::MaxLen(200)]),
        FieldSpec::required("eventKind", vec![Rule::OneOf(EventKind::VALUES)]),
        FieldSpec::optional("specialRequirements", vec![Rule::MaxLen(1000)]),
    ])
});

#[utoipa::path(
    post,
    path = "/submit-event-registration",
    tag = "submissions",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Registration stored", body = ApiResponse),
        (status = 400, description = "Validation or file gate failure", body = ApiResponse),
        (status = 500, description = "Upload, datastore, or configuration failure", body = ApiResponse)
    )
)]
pub async fn submit_event_registration(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse>, HttpAppError> {
    let draft = extract::draft_from_multipart(multipart).await?;
    let service = SubmissionService::new(&state);

    let outcome = service
        .submit(&SPEC, &SCHEMA, draft, |record, uploads| {
            let kind = EventKind::parse(record.get("eventKind")).ok_or_else(|| {
                AppError::Internal("event kind failed to parse after validation".to_string())
            })?;
            let supporting = uploads.get("supportingDocument");
            let row = EventRegistrationRow {
                full_name: record.get("fullName").to_string(),
                email: record.get("email").to_string(),
                phone_number: record.get("phoneNumber").to_string(),
                institution: record.get("institution").to_string(),
                event_kind: kind,
                special_requirements: record.opt("specialRequirements").map(str::to_string),
                file_id: supporting.map(|f| f.external_id.clone()),
                file_url: supporting.map(|f| f.view_url.clone()),
                created_at: Utc::now(),
            };
            Ok((
                serde_json::to_value(&row)?,
                payload::event_registration(&row),
            ))
        })
        .await?;

    let supporting = outcome.uploads.get("supportingDocument");
    Ok(Json(ApiResponse::success(
        "Event registration received successfully",
        json!({
            "submissionId": outcome.inserted.id,
            "fileId": supporting.map(|f| f.external_id.clone()),
            "fileUrl": supporting.map(|f| f.view_url.clone()),
            "sheetsUpdated": outcome.sheets_updated,
        }),
    )))
}
