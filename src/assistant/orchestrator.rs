//! The per-request conversation turn. The widget keeps the history;
//! each call assembles system instructions plus that history, asks
//! the completion backend for one reply, and either hands the reply
//! back verbatim or runs the lead capture flow when the reply is a
//! directive.

use async_trait::async_trait;

use crate::brevo::{LeadRecord, SinkError};
use crate::openai::{CompletionError, Message, Role};

use super::directive::LeadCaptureDirective;
use super::prompt;

#[async_trait]
pub trait CompletionBackend: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<Message, CompletionError>;
}

#[async_trait]
pub trait LeadSink: Send + Sync {
    async fn submit(&self, record: &LeadRecord) -> Result<(), SinkError>;
}

pub struct Orchestrator<C, S> {
    completions: C,
    sink: S,
}

impl<C, S> Orchestrator<C, S>
where
    C: CompletionBackend,
    S: LeadSink,
{
    pub fn new(completions: C, sink: S) -> Self {
        Self { completions, sink }
    }

    /// Produce the assistant's reply for one turn. Infallible from
    /// the caller's perspective: every upstream failure resolves to
    /// fixed user-facing text, never an error.
    pub async fn respond(&self, history: &[Message]) -> String {
        let mut request = Vec::with_capacity(history.len() + 1);
        request.push(Message::new(Role::System, prompt::SYSTEM_PROMPT));
        request.extend_from_slice(history);

        let reply = match self.completions.complete(&request).await {
            Ok(message) => message.content,
            Err(err) => {
                tracing::error!("Completion request failed: {}", err);
                return prompt::COMPLETION_FALLBACK_HTML.to_string();
            }
        };

        // Common path: the reply is display text, returned unchanged.
        let Some(directive) = LeadCaptureDirective::parse(&reply) else {
            return reply;
        };

        self.capture_lead(history, directive).await;

        // The directive itself is never echoed and sink failures are
        // not the user's problem; the confirmation is unconditional.
        prompt::LEAD_CONFIRMATION_HTML.to_string()
    }

    /// Summarize, validate, dispatch at most once.
    async fn capture_lead(&self, history: &[Message], directive: LeadCaptureDirective) {
        let note = self.summarize_interest(history).await;

        let name = directive.data.name.trim();
        let email = directive.data.email.trim();
        if name.is_empty() || email.is_empty() {
            tracing::warn!("Discarding capture directive with missing name or email");
            return;
        }

        let phone = directive.data.phone.trim();
        let record = LeadRecord {
            name: name.to_string(),
            email: email.to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            note,
        };

        if let Err(err) = self.sink.submit(&record).await {
            tracing::error!("Lead dispatch failed for {}: {}", record.email, err);
        }
    }

    /// One-line summary of the user's interest, used as the note on
    /// the lead. Reuses the history without the system instructions.
    /// A failed summary is not fatal; the lead is still dispatched
    /// and the sink substitutes a placeholder note.
    async fn summarize_interest(&self, history: &[Message]) -> Option<String> {
        let mut request = Vec::with_capacity(history.len() + 1);
        request.extend_from_slice(history);
        request.push(Message::new(Role::User, prompt::SUMMARY_INSTRUCTION));

        match self.completions.complete(&request).await {
            Ok(message) => Some(message.content),
            Err(err) => {
                tracing::warn!("Summary request failed: {}", err);
                None
            }
        }
    }
}
