//! Domain models: participants, submission kinds, uploaded file references,
//! and the datastore row records each endpoint persists.

mod participant;
mod submission;

pub use participant::ParticipantInfo;
pub use submission::{
    CompetitionKind, EssaySubmissionRow, EventKind, EventRegistrationRow,
    ProposalSubmissionRow, TeamCompetitionRow, UploadedFileRef,
};
