//! HTTP error response conversion
//!
//! Handlers return `Result<Json<ApiResponse>, HttpAppError>`. `HttpAppError`
//! wraps the domain [`AppError`] so every failure renders the same JSON
//! envelope: `{success, message, errors?, error?}` with the status the error
//! taxonomy prescribes (400 for decode/validation/gate, 500 for collaborator
//! and configuration failures).

use axum::{
    extract::rejection::JsonRejection,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use trestle_core::forms::FieldErrors;
use trestle_core::{AppError, LogLevel};
use utoipa::ToSchema;

/// The single response envelope every endpoint speaks.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<serde_json::Value>,
    /// Field-level violations for validation and gatekeeper failures.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub errors: Option<FieldErrors>,
    /// Technical detail for server-side failures, intended for logs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn success(message: impl Into<String>, data: serde_json::Value) -> Self {
        ApiResponse {
            success: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            error: None,
        }
    }
}

/// Wrapper type for AppError to implement IntoResponse on a local type.
#[derive(Debug)]
pub struct HttpAppError(pub AppError);

impl From<AppError> for HttpAppError {
    fn from(err: AppError) -> Self {
        HttpAppError(err)
    }
}

/// Convert JSON body deserialization failures into our 400 envelope.
impl From<JsonRejection> for HttpAppError {
    fn from(rejection: JsonRejection) -> Self {
        HttpAppError(AppError::Decode(format!(
            "Invalid JSON body: {}",
            rejection.body_text()
        )))
    }
}

/// JSON body extractor that rejects with the envelope format instead of
/// axum's plain-text default.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = HttpAppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(inner) = Json::<T>::from_request(req, state)
            .await
            .map_err(HttpAppError::from)?;
        Ok(ValidatedJson(inner))
    }
}

fn log_error(error: &AppError) {
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, "Request rejected");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, "Request failed");
        }
    }
}

impl IntoResponse for HttpAppError {
    fn into_response(self) -> Response {
        let app_error = &self.0;
        log_error(app_error);

        let status = StatusCode::from_u16(app_error.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let body = ApiResponse {
            success: false,
            message: app_error.client_message(),
            data: None,
            errors: app_error.field_errors().cloned(),
            error: app_error.detail(),
        };

        (status, Json(body)).into_response()
    }
}
