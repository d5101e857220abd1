use crate::forms::{FieldSpec, Rule, ValidRecord};
use serde::{Deserialize, Serialize};

/// One competitor or registrant. All fields are required strings with the
/// bounds encoded in [`ParticipantInfo::field_specs`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantInfo {
    pub full_name: String,
    pub student_id: String,
    pub phone_number: String,
    pub messaging_id: String,
    pub email: String,
    pub institution: String,
    pub department: String,
}

impl ParticipantInfo {
    /// Validation specs for one participant's fields, named `{prefix}.{field}`
    /// the way multi-step forms submit them (e.g. `leader.email`).
    pub fn field_specs(prefix: &str) -> Vec<FieldSpec> {
        vec![
            FieldSpec::required(
                format!("{prefix}.fullName"),
                vec![Rule::MinLen(2), Rule::MaxLen(100)],
            ),
            FieldSpec::required(
                format!("{prefix}.studentId"),
                vec![Rule::MinLen(5), Rule::MaxLen(20)],
            ),
            FieldSpec::required(
                format!("{prefix}.phoneNumber"),
                vec![Rule::Phone { min_digits: 10 }],
            ),
            FieldSpec::required(format!("{prefix}.messagingId"), vec![Rule::MaxLen(100)]),
            FieldSpec::required(format!("{prefix}.email"), vec![Rule::Email]),
            FieldSpec::required(
                format!("{prefix}.institution"),
                vec![Rule::MinLen(2), Rule::MaxLen(200)],
            ),
            FieldSpec::required(
                format!("{prefix}.department"),
                vec![Rule::MinLen(2), Rule::MaxLen(200)],
            ),
        ]
    }

    /// Assemble a participant from a validated record under the given prefix.
    pub fn from_record(record: &ValidRecord, prefix: &str) -> Self {
        let get = |field: &str| record.get(&format!("{prefix}.{field}")).to_string();
        ParticipantInfo {
            full_name: get("fullName"),
            student_id: get("studentId"),
            phone_number: get("phoneNumber"),
            messaging_id: get("messagingId"),
            email: get("email"),
            institution: get("institution"),
            department: get("department"),
        }
    }

}
