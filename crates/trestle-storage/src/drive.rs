//! Google Drive storage implementation.
//!
//! Uploads through the v3 `uploadType=multipart` endpoint: one
//! multipart/related body carrying the metadata JSON and the file content,
//! asking back only the file id and its web view link.

use crate::auth::ServiceAccountAuth;
use crate::traits::{FileStorage, StorageError, StorageResult, StoredFile};
use async_trait::async_trait;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::Deserialize;

const UPLOAD_URL: &str =
    "https://www.googleapis.com/upload/drive/v3/files?uploadType=multipart&fields=id,webViewLink&supportsAllDrives=true";
const DRIVE_SCOPE: &str = "https://www.googleapis.com/auth/drive.file";

/// Drive-backed [`FileStorage`].
pub struct DriveStorage {
    auth: ServiceAccountAuth,
    http: reqwest::Client,
}

#[derive(Deserialize)]
struct DriveFile {
    id: String,
    #[serde(rename = "webViewLink")]
    web_view_link: String,
}

impl DriveStorage {
    /// Build from the service-account key JSON stored in the environment.
    pub fn new(service_account_key_json: &str) -> StorageResult<Self> {
        Ok(DriveStorage {
            auth: ServiceAccountAuth::from_json(service_account_key_json, DRIVE_SCOPE)?,
            http: reqwest::Client::new(),
        })
    }

    fn metadata_json(filename: &str, content_type: &str, folder_id: Option<&str>) -> String {
        let mut metadata = serde_json::json!({
            "name": filename,
            "mimeType": content_type,
        });
        if let Some(folder) = folder_id {
            metadata["parents"] = serde_json::json!([folder]);
        }
        metadata.to_string()
    }
}

/// Frame a multipart/related body: metadata part, then the media part.
fn related_body(
    boundary: &str,
    metadata_json: &str,
    content_type: &str,
    data: &[u8],
) -> Vec<u8> {
    let mut body = Vec::with_capacity(data.len() + metadata_json.len() + 256);
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{metadata_json}\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Type: {content_type}\r\n\r\n").as_bytes(),
    );
    body.extend_from_slice(data);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

#[async_trait]
impl FileStorage for DriveStorage {
    async fn upload(
        &self,
        filename: &str,
        content_type: &str,
        data: Vec<u8>,
        folder_id: Option<&str>,
    ) -> StorageResult<StoredFile> {
        let token = self.auth.access_token().await?;

        let boundary: String = {
            let token: String = rand::rng()
                .sample_iter(&Alphanumeric)
                .take(16)
                .map(char::from)
                .collect();
            format!("trestle-{}", token)
        };
        let metadata = Self::metadata_json(filename, content_type, folder_id);
        let size = data.len();
        let body = related_body(&boundary, &metadata, content_type, &data);

        let start = std::time::Instant::now();
        let response = self
            .http
            .post(UPLOAD_URL)
            .bearer_auth(token)
            .header(
                reqwest::header::CONTENT_TYPE,
                format!("multipart/related; boundary={}", boundary),
            )
            .body(body)
            .send()
            .await
            .map_err(|e| StorageError::UploadFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            tracing::error!(
                filename = %filename,
                status = %status,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Drive upload failed"
            );
            return Err(StorageError::UploadFailed(format!(
                "storage returned {}: {}",
                status, detail
            )));
        }

        let file: DriveFile = response
            .json()
            .await
            .map_err(|e| StorageError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            filename = %filename,
            file_id = %file.id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Drive upload successful"
        );

        Ok(StoredFile {
            id: file.id,
            view_url: file.web_view_link,
        })
    }
}
