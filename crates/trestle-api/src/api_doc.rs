use crate::error::ApiResponse;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "trestle-api",
        description = "Registration and submission API for a university civil-engineering competition series"
    ),
    paths(
        crate::handlers::team_competition::submit_team_competition,
        crate::handlers::team_registration::submit_team_registration,
        crate::handlers::essay_submission::submit_essay,
        crate::handlers::proposal_submission::submit_proposal,
        crate::handlers::event_registration::submit_event_registration,
        crate::handlers::file_upload::upload_file,
    ),
    components(schemas(ApiResponse)),
    tags(
        (name = "submissions", description = "Multi-step form submission pipeline"),
        (name = "files", description = "Standalone file upload")
    )
)]
pub struct ApiDoc;
