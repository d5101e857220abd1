use bytes::Bytes;
use std::collections::HashMap;

/// A raw file attachment as decoded from the wire: content plus the client's
/// declared filename and MIME type. Nothing here is trusted until the
/// gatekeeper has checked it.
#[derive(Clone, Debug)]
pub struct FileBlob {
    pub bytes: Bytes,
    pub filename: String,
    pub content_type: String,
}

/// A single decoded form field: scalar text or an attached file.
#[derive(Clone, Debug)]
pub enum FieldValue {
    Text(String),
    File(FileBlob),
}

/// The untyped output of the input decoder.
///
/// Fields the endpoint does not know about are simply never read; missing
/// fields are absent rather than errors, so the validator can report them
/// field by field.
#[derive(Debug, Default)]
pub struct DraftRecord {
    texts: HashMap<String, String>,
    files: HashMap<String, FileBlob>,
}

impl DraftRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        match value {
            FieldValue::Text(text) => {
                self.texts.insert(name.into(), text);
            }
            FieldValue::File(blob) => {
                self.files.insert(name.into(), blob);
            }
        }
    }

    pub fn insert_text(&mut self, name: impl Into<String>, text: impl Into<String>) {
        self.texts.insert(name.into(), text.into());
    }

    pub fn insert_file(&mut self, name: impl Into<String>, blob: FileBlob) {
        self.files.insert(name.into(), blob);
    }

    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts.get(name).map(String::as_str)
    }

    pub fn file(&self, name: &str) -> Option<&FileBlob> {
        self.files.get(name)
    }

    pub fn take_file(&mut self, name: &str) -> Option<FileBlob> {
        self.files.remove(name)
    }
}
