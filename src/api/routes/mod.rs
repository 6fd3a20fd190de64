//! API routes module

pub mod chat;
pub mod contact;
pub mod subscribe;

use std::sync::{Arc, RwLock};

use crate::api::public::ApiError;
use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Reject an empty or missing required form field before anything
/// goes out to the sink.
pub(crate) fn require(value: &str) -> Result<&str, ApiError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ApiError::Validation("Missing required fields".to_string()));
    }
    Ok(trimmed)
}

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat widget routes
        .nest("/chat", chat::router())
        // Contact form routes
        .nest("/contact", contact::router())
        // Lead magnet subscription routes
        .nest("/subscribe", subscribe::router())
}
