mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::MultipartForm;
use helpers::fakes::{RecordingNotifier, RecordingStorage, RecordingStore};
use serde_json::{json, Value};
use std::sync::Arc;

fn essay_form() -> MultipartForm {
    let form = MultipartForm::new()
        .add_text("teamName", "Bridgeworks")
        .add_text("subtheme", "Sustainable infrastructure");
    helpers::participant_fields(form, "participant")
        .add_part("essayDocument", helpers::pdf_part(2048))
}

fn proposal_form() -> MultipartForm {
    let form = MultipartForm::new()
        .add_text("teamName", "Bridgeworks")
        .add_text("subtheme", "Sustainable infrastructure");
    helpers::participant_fields(form, "participant")
        .add_part("proposalDocument", helpers::pdf_part(2048))
        .add_part("costPlan", helpers::xlsx_part(2048))
}

#[tokio::test]
async fn essay_submission_persists_one_document() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let response = server.post("/submit-essay").multipart(essay_form()).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["fileId"], "file-1");
    assert_eq!(body["data"]["fileUrl"], "https://files.test/file-1");
    assert_eq!(storage.call_count(), 1);

    let rows = store.rows.lock().unwrap();
    let (table, row) = &rows[0];
    assert_eq!(table, "essay_submissions");
    assert_eq!(row["subtheme"], "Sustainable infrastructure");
    assert_eq!(row["full_name"], "Siti Rahma");
    assert_eq!(row["file_id"], "file-1");
}

#[tokio::test]
async fn essay_without_its_document_is_gated() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let form = MultipartForm::new()
        .add_text("teamName", "Bridgeworks")
        .add_text("subtheme", "Sustainable infrastructure");
    let form = helpers::participant_fields(form, "participant");

    let response = server.post("/submit-essay").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["essayDocument"][0], "is required");
    assert_eq!(storage.call_count(), 0);
}

#[tokio::test]
async fn proposal_requires_the_spreadsheet_mime_for_the_cost_plan() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    // A PDF in the spreadsheet slot must be rejected.
    let form = MultipartForm::new()
        .add_text("teamName", "Bridgeworks")
        .add_text("subtheme", "Sustainable infrastructure");
    let form = helpers::participant_fields(form, "participant")
        .add_part("proposalDocument", helpers::pdf_part(2048))
        .add_part("costPlan", helpers::pdf_part(2048));

    let response = server.post("/submit-proposal").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("costPlan"));
    assert!(body["errors"]["costPlan"][0]
        .as_str()
        .unwrap()
        .contains("spreadsheetml"));
    assert_eq!(storage.call_count(), 0);
}

#[tokio::test]
async fn proposal_submission_uploads_both_attachments() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let response = server
        .post("/submit-proposal")
        .multipart(proposal_form())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert!(body["data"]["fileId"].is_string());
    assert!(body["data"]["costPlanFileId"].is_string());
    assert_eq!(storage.call_count(), 2);

    // The proposal relay goes to its own webhook target.
    let deliveries = notifier.deliveries.lock().unwrap();
    assert_eq!(deliveries[0].0, "https://hooks.test/proposal");
    assert_eq!(deliveries[0].1["submissionType"], "proposal-submission");
}

#[tokio::test]
async fn event_registration_without_a_file_skips_storage_entirely() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let form = MultipartForm::new()
        .add_text("fullName", "Siti Rahma")
        .add_text("email", "siti@example.ac.id")
        .add_text("phoneNumber", "081234567890")
        .add_text("institution", "Gadjah Mada University")
        .add_text("eventKind", "workshop");

    let response = server
        .post("/submit-event-registration")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert!(body["data"]["fileId"].is_null());
    assert_eq!(storage.call_count(), 0);
    assert_eq!(store.call_count(), 1);

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows[0].0, "event_registrations");
    assert!(rows[0].1["file_id"].is_null());
}

#[tokio::test]
async fn event_registration_rejects_unknown_events() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let form = MultipartForm::new()
        .add_text("fullName", "Siti Rahma")
        .add_text("email", "siti@example.ac.id")
        .add_text("phoneNumber", "081234567890")
        .add_text("institution", "Gadjah Mada University")
        .add_text("eventKind", "karaoke-night");

    let response = server
        .post("/submit-event-registration")
        .multipart(form)
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]["eventKind"][0]
        .as_str()
        .unwrap()
        .contains("workshop"));
}

fn registration_body() -> Value {
    json!({
        "teamName": "Bridgeworks",
        "competitionKind": "innovative-essay",
        "leader": helpers::participant_json("leader"),
        "member2": helpers::participant_json("member2"),
        "member3": helpers::participant_json("member3"),
        "fileIds": {
            "idScan": "drv-1",
            "paymentProof": "drv-2",
            "promoProof": "drv-3",
        },
        "fileUrls": {
            "idScan": "https://files.test/drv-1",
            "paymentProof": "https://files.test/drv-2",
            "promoProof": "https://files.test/drv-3",
        },
    })
}

#[tokio::test]
async fn json_team_registration_persists_without_touching_storage() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let response = server
        .post("/submit-team-registration")
        .json(&registration_body())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["sheetsUpdated"], true);
    assert_eq!(storage.call_count(), 0);
    assert_eq!(store.call_count(), 1);

    let rows = store.rows.lock().unwrap();
    assert_eq!(rows[0].0, "competition_submissions");
    assert_eq!(rows[0].1["file_ids"]["paymentProof"], "drv-2");

    let deliveries = notifier.deliveries.lock().unwrap();
    assert_eq!(deliveries[0].0, "https://hooks.test/team-registration");
}

#[tokio::test]
async fn json_team_registration_reports_missing_file_refs() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let mut body = registration_body();
    body["fileIds"]
        .as_object_mut()
        .unwrap()
        .remove("paymentProof");

    let response = server.post("/submit-team-registration").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["fileIds.paymentProof"][0], "is required");
    assert_eq!(store.call_count(), 0);
}

#[tokio::test]
async fn json_team_registration_collects_scalar_and_ref_errors_together() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let mut body = registration_body();
    body["teamName"] = json!("");
    body["fileUrls"].as_object_mut().unwrap().remove("idScan");

    let response = server.post("/submit-team-registration").json(&body).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]["teamName"].is_array());
    assert!(body["errors"]["fileUrls.idScan"].is_array());
}
