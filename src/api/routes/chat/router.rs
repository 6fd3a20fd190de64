//! Router for the chat API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, routing::post};

use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::assistant::Orchestrator;
use crate::brevo::{BrevoClient, ChatLeadSink};
use crate::openai::{ChatCompletions, Message};

use super::public;

type SharedState = Arc<RwLock<AppState>>;

/// Run one conversation turn for the widget
async fn chat_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ChatRequest>,
) -> Result<axum::Json<public::ChatResponse>, ApiError> {
    if payload.messages.is_empty() {
        return Err(ApiError::Validation("Missing messages".to_string()));
    }

    let (completions, sink) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let config = &shared_state.config;
        (
            ChatCompletions::new(
                &config.openai_api_hostname,
                &config.openai_api_key,
                &config.openai_model,
            ),
            ChatLeadSink::new(
                BrevoClient::new(&config.brevo_api_hostname, config.brevo_api_key.clone()),
                config.contact_list_id,
            ),
        )
    };

    let history: Vec<Message> = payload.messages.iter().map(Message::from).collect();
    let reply = Orchestrator::new(completions, sink).respond(&history).await;

    Ok(axum::Json(public::ChatResponse::new(&reply)))
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(chat_handler))
}
