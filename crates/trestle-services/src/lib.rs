//! External services consumed by the submission pipeline.

pub mod sheets;

pub use sheets::{relay, NotifyError, SheetsNotifier, WebhookNotifier};
