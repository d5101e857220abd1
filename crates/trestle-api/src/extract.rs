//! Input decoding: wire bodies into draft records.
//!
//! Decoding is deliberately permissive - unknown fields are carried along and
//! simply never read, and missing fields stay absent so the validator can
//! report them per field. Only a malformed body itself is a decode error.

use axum::extract::Multipart;
use trestle_core::forms::{DraftRecord, FileBlob};
use trestle_core::AppError;

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

fn decode_error(err: impl std::fmt::Display) -> AppError {
    AppError::Decode(format!(
        "Invalid form data. Make sure you are sending multipart/form-data: {}",
        err
    ))
}

/// Read a multipart body into a draft record. Parts with a filename become
/// file blobs; everything else is treated as scalar text.
pub async fn draft_from_multipart(mut multipart: Multipart) -> Result<DraftRecord, AppError> {
    let mut draft = DraftRecord::new();

    while let Some(field) = multipart.next_field().await.map_err(decode_error)? {
        let Some(name) = field.name().map(str::to_string) else {
            continue;
        };

        if let Some(filename) = field.file_name().map(str::to_string) {
            let content_type = field
                .content_type()
                .unwrap_or(FALLBACK_CONTENT_TYPE)
                .to_string();
            let bytes = field.bytes().await.map_err(decode_error)?;
            draft.insert_file(
                name,
                FileBlob {
                    bytes,
                    filename,
                    content_type,
                },
            );
        } else {
            let text = field.text().await.map_err(decode_error)?;
            draft.insert_text(name, text);
        }
    }

    Ok(draft)
}

/// Flatten a JSON body into the same draft shape multipart forms produce:
/// top-level strings keep their name, participant objects become
/// `{prefix}.{field}` entries. Non-string values and unknown keys are left
/// for the validator to report as absent.
pub fn draft_from_json(body: &serde_json::Value, participant_prefixes: &[&str]) -> DraftRecord {
    let mut draft = DraftRecord::new();

    if let Some(object) = body.as_object() {
        for (key, value) in object {
            if let Some(text) = value.as_str() {
                draft.insert_text(key.clone(), text);
            }
        }
    }

    for prefix in participant_prefixes {
        if let Some(object) = body[prefix].as_object() {
            for (key, value) in object {
                if let Some(text) = value.as_str() {
                    draft.insert_text(format!("{prefix}.{key}"), text);
                }
            }
        }
    }

    draft
}
