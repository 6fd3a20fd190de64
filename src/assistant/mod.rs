mod directive;
mod orchestrator;
pub mod prompt;

pub use directive::{DirectiveAction, LeadCaptureDirective, LeadFields};
pub use orchestrator::{CompletionBackend, LeadSink, Orchestrator};
