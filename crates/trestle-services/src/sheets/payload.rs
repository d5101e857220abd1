//! Flattened notification payloads, one builder per submission type.
//!
//! Each payload is a fresh denormalized projection of the persisted row plus
//! a `submissionType` tag and an RFC3339 timestamp, shaped for a spreadsheet
//! row rather than for the datastore.

use serde_json::{json, Value};
use trestle_core::models::{
    EssaySubmissionRow, EventRegistrationRow, ProposalSubmissionRow, TeamCompetitionRow,
};

/// Wrap flattened fields with the submission-type tag and timestamp.
fn notification(submission_type: &str, mut fields: Value) -> Value {
    if let Some(object) = fields.as_object_mut() {
        object.insert("submissionType".to_string(), json!(submission_type));
        object.insert(
            "timestamp".to_string(),
            json!(chrono::Utc::now().to_rfc3339()),
        );
    }
    fields
}

pub fn team_competition(row: &TeamCompetitionRow) -> Value {
    notification(
        "team-competition",
        json!({
            "teamName": row.team_name,
            "competitionKind": row.competition_kind,
            "teamLeaderName": row.team_leader.full_name,
            "teamLeaderEmail": row.team_leader.email,
            "studentCount": 3,
            "fileUrls": row.file_urls,
        }),
    )
}

pub fn essay_submission(row: &EssaySubmissionRow) -> Value {
    notification(
        "essay-submission",
        json!({
            "teamName": row.team_name,
            "fullName": row.full_name,
            "studentId": row.student_id,
            "phoneNumber": row.phone_number,
            "messagingId": row.messaging_id,
            "email": row.email,
            "institution": row.institution,
            "department": row.department,
            "subtheme": row.subtheme,
            "fileUrl": row.file_url,
        }),
    )
}

pub fn proposal_submission(row: &ProposalSubmissionRow) -> Value {
    notification(
        "proposal-submission",
        json!({
            "teamName": row.team_name,
            "fullName": row.full_name,
            "studentId": row.student_id,
            "phoneNumber": row.phone_number,
            "messagingId": row.messaging_id,
            "email": row.email,
            "institution": row.institution,
            "department": row.department,
            "subtheme": row.subtheme,
            "proposalUrl": row.proposal_file_url,
            "costPlanUrl": row.cost_plan_file_url,
        }),
    )
}

pub fn event_registration(row: &EventRegistrationRow) -> Value {
    notification(
        "event-registration",
        json!({
            "fullName": row.full_name,
            "email": row.email,
            "phoneNumber": row.phone_number,
            "institution": row.institution,
            "eventKind": row.event_kind,
            "specialRequirements": row.special_requirements,
            "fileUrl": row.file_url,
        }),
    )
}

/// The JSON-only team registration reuses the team-competition projection
/// under its own tag, so both spreadsheet tabs stay distinguishable.
pub fn team_registration(row: &TeamCompetitionRow) -> Value {
    notification(
        "team-registration",
        json!({
            "teamName": row.team_name,
            "competitionKind": row.competition_kind,
            "teamLeaderName": row.team_leader.full_name,
            "teamLeaderEmail": row.team_leader.email,
            "studentCount": 3,
            "fileUrls": row.file_urls,
        }),
    )
}
