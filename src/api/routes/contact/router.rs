//! Router for the contact form API

use std::sync::{Arc, RwLock};

use axum::{Router, extract::State, routing::post};

use crate::api::public::{ApiError, SubmissionResponse};
use crate::api::routes::require;
use crate::api::state::AppState;
use crate::brevo::{BrevoClient, ContactAttributes, ContactUpsert};

use super::public;

type SharedState = Arc<RwLock<AppState>>;

/// Upsert a contact-form submission into the contact list
async fn contact_handler(
    State(state): State<SharedState>,
    axum::Json(payload): axum::Json<public::ContactRequest>,
) -> Result<axum::Json<SubmissionResponse>, ApiError> {
    let name = require(&payload.name)?;
    let email = require(&payload.email)?;
    let service = require(&payload.service)?;
    let message = require(&payload.message)?;
    let date = require(&payload.date)?;

    let (client, list_id) = {
        let shared_state = state.read().expect("Unable to read shared state");
        let config = &shared_state.config;
        (
            BrevoClient::new(&config.brevo_api_hostname, config.brevo_api_key.clone()),
            config.contact_list_id,
        )
    };

    let upsert = ContactUpsert {
        email: email.to_string(),
        list_id,
        attributes: ContactAttributes {
            name: name.to_string(),
            company: payload.company.clone(),
            phone: payload.phone.clone(),
            service: Some(service.to_string()),
            message: Some(message.to_string()),
            date: Some(date.to_string()),
        },
    };
    client.upsert_contact(&upsert).await?;

    Ok(axum::Json(SubmissionResponse::ok()))
}

/// Create the contact form router
pub fn router() -> Router<SharedState> {
    Router::new().route("/", post(contact_handler))
}
