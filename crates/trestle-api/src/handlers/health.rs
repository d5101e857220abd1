//! Liveness probe.
//!
//! All collaborators are remote and consumed per request, so there is no
//! pool or local dependency worth probing here.

use axum::{response::IntoResponse, Json};

pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "alive" }))
}
