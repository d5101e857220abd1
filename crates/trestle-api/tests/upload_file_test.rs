mod helpers;

use axum::http::StatusCode;
use axum_test::multipart::{MultipartForm, Part};
use helpers::fakes::{RecordingNotifier, RecordingStorage, RecordingStore};
use serde_json::Value;
use std::sync::Arc;

const MB: usize = 1024 * 1024;

fn upload_form(part: Part) -> MultipartForm {
    MultipartForm::new()
        .add_text("fileType", "paymentProof")
        .add_text("teamName", "Bridgeworks")
        .add_part("file", part)
}

#[tokio::test]
async fn uploads_a_single_file_and_returns_its_handle() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let response = server
        .post("/upload-file")
        .multipart(upload_form(helpers::pdf_part(4096)))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["externalId"], "file-1");
    assert_eq!(body["data"]["fileType"], "paymentProof");
    let file_name = body["data"]["fileName"].as_str().unwrap();
    assert!(file_name.starts_with("Bridgeworks_payment-proof_"));
    assert!(file_name.ends_with(".pdf"));

    // This endpoint only uploads; nothing is persisted or relayed.
    assert_eq!(storage.call_count(), 1);
    assert_eq!(store.call_count(), 0);
    assert_eq!(notifier.call_count(), 0);
}

#[tokio::test]
async fn rejects_unknown_file_types() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let form = MultipartForm::new()
        .add_text("fileType", "mixtape")
        .add_text("teamName", "Bridgeworks")
        .add_part("file", helpers::pdf_part(4096));

    let response = server.post("/upload-file").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]["fileType"][0]
        .as_str()
        .unwrap()
        .contains("idScan"));
    assert_eq!(storage.call_count(), 0);
}

#[tokio::test]
async fn rejects_a_missing_file_part() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let form = MultipartForm::new()
        .add_text("fileType", "paymentProof")
        .add_text("teamName", "Bridgeworks");

    let response = server.post("/upload-file").multipart(form).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["errors"]["file"][0], "is required");
    assert_eq!(storage.call_count(), 0);
}

#[tokio::test]
async fn rejects_files_over_the_slot_ceiling() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let response = server
        .post("/upload-file")
        .multipart(upload_form(helpers::pdf_part(25 * MB)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["message"].as_str().unwrap().contains("paymentProof"));
    assert_eq!(storage.call_count(), 0);
}

#[tokio::test]
async fn rejects_non_pdf_uploads() {
    let storage = Arc::new(RecordingStorage::new());
    let store = Arc::new(RecordingStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let server = helpers::test_server(storage.clone(), store.clone(), notifier.clone());

    let part = Part::bytes(vec![0u8; 1024])
        .file_name("proof.png")
        .mime_type("image/png");
    let response = server.post("/upload-file").multipart(upload_form(part)).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["errors"]["paymentProof"][0]
        .as_str()
        .unwrap()
        .contains("application/pdf"));
    assert_eq!(storage.call_count(), 0);
}
