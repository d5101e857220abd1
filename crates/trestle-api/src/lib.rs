//! HTTP application for the submission pipeline.
//!
//! Exposed as a library so integration tests can assemble the router with
//! fake collaborators; the binary in `main.rs` wires the real ones.

pub mod api_doc;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod middleware;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
