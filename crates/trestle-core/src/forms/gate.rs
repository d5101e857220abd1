use super::draft::DraftRecord;
use super::schema::FieldErrors;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_XLSX: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A named logical file attachment position within a submission.
#[derive(Clone, Copy, Debug)]
pub struct FileSlot {
    /// Form field name, e.g. `paymentProof`.
    pub name: &'static str,
    /// Short label woven into generated storage names, e.g. `payment-proof`.
    pub label: &'static str,
    pub required: bool,
    pub content_type: &'static str,
    pub max_bytes: usize,
}

impl FileSlot {
    pub const fn pdf(name: &'static str, label: &'static str, max_bytes: usize) -> Self {
        FileSlot {
            name,
            label,
            required: true,
            content_type: MIME_PDF,
            max_bytes,
        }
    }

    pub const fn optional_pdf(
        name: &'static str,
        label: &'static str,
        max_bytes: usize,
    ) -> Self {
        FileSlot {
            name,
            label,
            required: false,
            content_type: MIME_PDF,
            max_bytes,
        }
    }

    pub const fn spreadsheet(
        name: &'static str,
        label: &'static str,
        max_bytes: usize,
    ) -> Self {
        FileSlot {
            name,
            label,
            required: true,
            content_type: MIME_XLSX,
            max_bytes,
        }
    }
}

/// Check every declared file slot before any upload is attempted.
///
/// Uploads are all-or-nothing at the gate: a violation on any slot fails the
/// whole request, so a doomed submission never leaves partial files in
/// storage. All violations are collected, mirroring scalar validation.
pub fn check_files(slots: &[FileSlot], draft: &DraftRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for slot in slots {
        let blob = match draft.file(slot.name) {
            Some(blob) => blob,
            None => {
                if slot.required {
                    errors.push(slot.name, "is required");
                }
                continue;
            }
        };

        if !blob.content_type.eq_ignore_ascii_case(slot.content_type) {
            errors.push(
                slot.name,
                format!("must be of type {}", slot.content_type),
            );
        }
        if blob.bytes.is_empty() {
            errors.push(slot.name, "is empty");
        } else if blob.bytes.len() > slot.max_bytes {
            errors.push(
                slot.name,
                format!(
                    "must be {} MB or smaller",
                    slot.max_bytes / 1024 / 1024
                ),
            );
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
