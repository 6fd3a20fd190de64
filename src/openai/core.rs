//! Client for OpenAI-compatible chat completion APIs. Single-shot
//! request/response only; the widget renders whole replies, so there
//! is no streaming here.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::assistant::CompletionBackend;

const COMPLETION_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "system")]
    System,
    #[serde(rename = "assistant")]
    Assistant,
    #[serde(rename = "user")]
    User,
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("completion API returned status {status}")]
    Status { status: u16 },
    #[error("completion response contained no choices")]
    NoChoices,
}

// Response body, e.g.
//
// {
//     "choices": [
//         {"index": 0, "message": {"role": "assistant", "content": "..."}}
//     ]
// }
#[derive(Deserialize, Debug)]
struct CompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize, Debug)]
struct Choice {
    message: Message,
}

/// Request one assistant message for the given transcript. Message
/// order is sent exactly as given.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<Message, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches('/'));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(COMPLETION_TIMEOUT)
        .json(&payload)
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CompletionError::Status {
            status: status.as_u16(),
        });
    }

    let body: CompletionResponse = response.json().await?;
    body.choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or(CompletionError::NoChoices)
}

/// Completion backend bound to one API host, key, and model.
#[derive(Clone, Debug)]
pub struct ChatCompletions {
    api_hostname: String,
    api_key: String,
    model: String,
}

impl ChatCompletions {
    pub fn new(api_hostname: &str, api_key: &str, model: &str) -> Self {
        Self {
            api_hostname: api_hostname.to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }
}

#[async_trait]
impl CompletionBackend for ChatCompletions {
    async fn complete(&self, messages: &[Message]) -> Result<Message, CompletionError> {
        completion(messages, &self.api_hostname, &self.api_key, &self.model).await
    }
}
