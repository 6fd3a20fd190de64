use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::assistant::Orchestrator;
use crate::brevo::{BrevoClient, ChatLeadSink};
use crate::core::AppConfig;
use crate::openai::{ChatCompletions, Message, Role};

/// Talk to the assistant from a terminal. Uses the same orchestrator
/// as the widget endpoint, so the capture flow really dispatches
/// leads when a Brevo key is configured.
pub async fn run() -> Result<()> {
    let mut rl = DefaultEditor::new().expect("Editor failed");

    let config = AppConfig::default();
    let completions = ChatCompletions::new(
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
    );
    let sink = ChatLeadSink::new(
        BrevoClient::new(&config.brevo_api_hostname, config.brevo_api_key.clone()),
        config.contact_list_id,
    );
    let orchestrator = Orchestrator::new(completions, sink);

    let mut history: Vec<Message> = Vec::new();

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                history.push(Message::new(Role::User, line.as_str()));
                let reply = orchestrator.respond(&history).await;
                println!("{}", reply);
                history.push(Message::new(Role::Assistant, &reply));
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
