//! Public API types

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use serde::Serialize;
use serde_json::json;

use crate::brevo::SinkError;

// Errors

/// Route-level error with a distinct status per failure class:
/// rejected input, missing server credentials, and upstream sink
/// failures.
#[derive(Debug)]
pub enum ApiError {
    Validation(String),
    Configuration,
    Sink(SinkError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Configuration | ApiError::Sink(SinkError::MissingApiKey) => {
                tracing::error!("Brevo API key is not set in environment variables");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Server configuration error." })),
                )
                    .into_response()
            }
            ApiError::Sink(err) => {
                // Always log the upstream detail, never return it
                tracing::error!("{}", err);
                let status = match &err {
                    SinkError::Status { status, .. } => {
                        StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
                    }
                    _ => StatusCode::BAD_GATEWAY,
                };
                (
                    status,
                    Json(json!({ "error": "Failed to subscribe contact." })),
                )
                    .into_response()
            }
        }
    }
}

impl From<SinkError> for ApiError {
    fn from(err: SinkError) -> Self {
        ApiError::Sink(err)
    }
}

/// Body returned by both form endpoints on success.
#[derive(Serialize)]
pub struct SubmissionResponse {
    success: bool,
}

impl SubmissionResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

// Re-export public types from each route

pub mod chat {
    pub use crate::api::routes::chat::public::*;
}

pub mod contact {
    pub use crate::api::routes::contact::public::*;
}

pub mod subscribe {
    pub use crate::api::routes::subscribe::public::*;
}
