//! Core types for the trestle submission backend: configuration, the unified
//! application error, domain models, and the declarative form machinery
//! (draft records, field rules, schemas, file gatekeeping).

pub mod config;
pub mod error;
pub mod forms;
pub mod models;

pub use config::{Config, WebhookTarget};
pub use error::{AppError, LogLevel};
