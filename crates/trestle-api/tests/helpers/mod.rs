#![allow(dead_code)] // Each test binary uses a different slice of the helpers.

pub mod fakes;

use axum_test::multipart::{MultipartForm, Part};
use axum_test::TestServer;
use std::sync::Arc;
use trestle_api::setup::routes::setup_routes;
use trestle_api::state::AppState;
use trestle_core::Config;
use trestle_db::SubmissionStore;
use trestle_services::SheetsNotifier;
use trestle_storage::FileStorage;

/// Configuration with every webhook target set, so relay behavior is
/// observable through the fake notifier.
pub fn test_config() -> Config {
    Config {
        drive_folder_id: Some("folder-1".to_string()),
        sheets_webhook_url: Some("https://hooks.test/default".to_string()),
        sheets_webhook_url_team_registration: Some(
            "https://hooks.test/team-registration".to_string(),
        ),
        sheets_webhook_url_proposal: Some("https://hooks.test/proposal".to_string()),
        ..Config::default()
    }
}

pub fn test_server(
    storage: Arc<dyn FileStorage>,
    store: Arc<dyn SubmissionStore>,
    notifier: Arc<dyn SheetsNotifier>,
) -> TestServer {
    let config = test_config();
    let state = Arc::new(AppState::new(
        config.clone(),
        Some(storage),
        Some(store),
        notifier,
    ));
    let router = setup_routes(&config, state).expect("router should build");
    TestServer::new(router).expect("test server should start")
}

pub fn pdf_part(len: usize) -> Part {
    Part::bytes(vec![b'%'; len])
        .file_name("document.pdf")
        .mime_type("application/pdf")
}

pub fn xlsx_part(len: usize) -> Part {
    Part::bytes(vec![0u8; len])
        .file_name("plan.xlsx")
        .mime_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
}

/// Fill one participant's fields under the given prefix.
pub fn participant_fields(form: MultipartForm, prefix: &str) -> MultipartForm {
    form.add_text(format!("{prefix}.fullName"), "Siti Rahma")
        .add_text(format!("{prefix}.studentId"), "21035017")
        .add_text(format!("{prefix}.phoneNumber"), "081234567890")
        .add_text(format!("{prefix}.messagingId"), "sitirahma")
        .add_text(format!("{prefix}.email"), format!("{prefix}@example.ac.id"))
        .add_text(format!("{prefix}.institution"), "Gadjah Mada University")
        .add_text(format!("{prefix}.department"), "Civil Engineering")
}

pub fn participant_json(prefix: &str) -> serde_json::Value {
    serde_json::json!({
        "fullName": "Siti Rahma",
        "studentId": "21035017",
        "phoneNumber": "081234567890",
        "messagingId": "sitirahma",
        "email": format!("{prefix}@example.ac.id"),
        "institution": "Gadjah Mada University",
        "department": "Civil Engineering",
    })
}
