use super::participant::ParticipantInfo;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Which competition a team submission belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompetitionKind {
    InnovativeEssay,
    NationalTender,
}

impl CompetitionKind {
    pub const VALUES: &'static [&'static str] = &["innovative-essay", "national-tender"];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompetitionKind::InnovativeEssay => "innovative-essay",
            CompetitionKind::NationalTender => "national-tender",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "innovative-essay" => Some(CompetitionKind::InnovativeEssay),
            "national-tender" => Some(CompetitionKind::NationalTender),
            _ => None,
        }
    }
}

/// Which event a single-person registration is for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventKind {
    Workshop,
    StudentDiscussionForum,
    NationalSummit,
}

impl EventKind {
    pub const VALUES: &'static [&'static str] = &[
        "workshop",
        "student-discussion-forum",
        "national-summit",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Workshop => "workshop",
            EventKind::StudentDiscussionForum => "student-discussion-forum",
            EventKind::NationalSummit => "national-summit",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "workshop" => Some(EventKind::Workshop),
            "student-discussion-forum" => Some(EventKind::StudentDiscussionForum),
            "national-summit" => Some(EventKind::NationalSummit),
            _ => None,
        }
    }
}

/// Handle to a file that has been accepted by the storage collaborator.
/// Created only after a successful upload and never mutated afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFileRef {
    pub external_id: String,
    pub view_url: String,
    pub declared_mime_type: String,
}

/// Datastore row for a full team entry: three participants, three files.
/// Participants are nested JSON objects; columns are snake_case.
#[derive(Clone, Debug, Serialize)]
pub struct TeamCompetitionRow {
    pub team_name: String,
    pub competition_kind: CompetitionKind,
    pub team_leader: ParticipantInfo,
    pub member2: ParticipantInfo,
    pub member3: ParticipantInfo,
    pub file_ids: BTreeMap<String, String>,
    pub file_urls: BTreeMap<String, String>,
    pub created_at: DateTime<Utc>,
}

/// Datastore row for an essay submission: one participant, one document.
#[derive(Clone, Debug, Serialize)]
pub struct EssaySubmissionRow {
    pub team_name: String,
    pub full_name: String,
    pub student_id: String,
    pub phone_number: String,
    pub messaging_id: String,
    pub email: String,
    pub institution: String,
    pub department: String,
    pub subtheme: String,
    pub file_id: String,
    pub file_url: String,
    pub created_at: DateTime<Utc>,
}

/// Datastore row for a proposal submission: the proposal document plus the
/// cost-plan spreadsheet.
#[derive(Clone, Debug, Serialize)]
pub struct ProposalSubmissionRow {
    pub team_name: String,
    pub full_name: String,
    pub student_id: String,
    pub phone_number: String,
    pub messaging_id: String,
    pub email: String,
    pub institution: String,
    pub department: String,
    pub subtheme: String,
    pub proposal_file_id: String,
    pub proposal_file_url: String,
    pub cost_plan_file_id: String,
    pub cost_plan_file_url: String,
    pub created_at: DateTime<Utc>,
}

/// Datastore row for an event registration. The supporting document is
/// optional; absent columns persist as NULL.
#[derive(Clone, Debug, Serialize)]
pub struct EventRegistrationRow {
    pub full_name: String,
    pub email: String,
    pub phone_number: String,
    pub institution: String,
    pub event_kind: EventKind,
    pub special_requirements: Option<String>,
    pub file_id: Option<String>,
    pub file_url: Option<String>,
    pub created_at: DateTime<Utc>,
}
