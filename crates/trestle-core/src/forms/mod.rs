//! Declarative form machinery for the submission pipeline.
//!
//! A decoded request body becomes a [`DraftRecord`] of tagged values (text or
//! file blob). A per-endpoint [`Schema`] of composable [`Rule`]s validates the
//! scalar fields exhaustively into a [`ValidRecord`] or a [`FieldErrors`] map,
//! and the [`gate`] module checks every declared file slot before any upload
//! is attempted.

mod draft;
mod gate;
mod rules;
mod schema;

pub use draft::{DraftRecord, FieldValue, FileBlob};
pub use gate::{check_files, FileSlot, MIME_PDF, MIME_XLSX};
pub use rules::Rule;
pub use schema::{FieldErrors, FieldSpec, Schema, ValidRecord};
