//! Test utilities for integration tests
#![allow(dead_code)]

use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use concierge::api::AppState;
use concierge::api::app;
use concierge::core::AppConfig;

/// Creates a test application router pointed at mock upstreams. Pass
/// `None` for `brevo_api_key` to simulate a missing credential.
pub fn test_app(llm_url: &str, brevo_url: &str, brevo_api_key: Option<&str>) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: llm_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-4o"),
        brevo_api_hostname: brevo_url.to_string(),
        brevo_api_key: brevo_api_key.map(String::from),
        contact_list_id: 14,
        blueprint_list_id: 16,
        site_dir: String::from("./site"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("Response body was not utf-8")
}
