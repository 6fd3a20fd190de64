//! Public types for the chat API
use serde::{Deserialize, Serialize};

use crate::openai::{Message, Role};

/// Roles the widget may send. `system` is deliberately absent; the
/// orchestrator injects its own instructions.
#[derive(Deserialize, Clone, Copy, Debug, PartialEq)]
pub enum ChatRole {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

#[derive(Deserialize, Debug)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Deserialize, Debug)]
pub struct ChatRequest {
    pub messages: Vec<ChatTurn>,
}

#[derive(Serialize)]
pub struct ChatResponse {
    reply: String,
}

impl ChatResponse {
    pub fn new(reply: &str) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

impl From<&ChatTurn> for Message {
    fn from(turn: &ChatTurn) -> Self {
        let role = match turn.role {
            ChatRole::User => Role::User,
            ChatRole::Assistant => Role::Assistant,
        };
        Message::new(role, &turn.content)
    }
}
