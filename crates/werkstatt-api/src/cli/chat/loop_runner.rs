//! Main chat loop orchestration.
//!
//! Greets, then reads lines until EOF. Each line is either a slash command
//! or goes through the [`QuestionDispatcher`]; whatever bot messages the
//! dispatcher appended are printed afterwards.

use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use werkstatt_core::chat::dispatcher::{Conversation, QuestionDispatcher, SubmitOutcome};
use werkstatt_infra::transport::HttpAskTransport;
use werkstatt_types::chat::{DialogState, Sender};
use werkstatt_types::config::ChatConfig;

use super::banner::print_welcome_banner;
use super::commands::{self, ChatCommand};
use super::input::{ChatInput, InputEvent};
use super::renderer;

fn prompt_for(state: DialogState) -> String {
    match state {
        DialogState::Idle => format!("  {} ", style("You >").green().bold()),
        DialogState::AwaitingGender => {
            format!("  {} ", style("Gender (male/female) >").yellow().bold())
        }
    }
}

fn thinking_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(template) = ProgressStyle::default_spinner().template("  {spinner:.cyan} {msg}") {
        spinner.set_style(template);
    }
    spinner.set_message("thinking...");
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

/// Run the interactive chat loop against `endpoint_override` or the
/// configured endpoint.
pub async fn run_chat_loop(config: &ChatConfig, endpoint_override: Option<&str>) -> anyhow::Result<()> {
    let endpoint = endpoint_override.unwrap_or(config.endpoint.as_str());
    let timeout = config.request_timeout_secs.map(Duration::from_secs);
    let transport = HttpAskTransport::new(endpoint, timeout)?;
    info!(url = transport.url(), "starting chat session");

    let mut conversation = Conversation::new(config.fallback_message.clone())
        .with_failure_policy(config.failure_policy);
    conversation.greet(&config.greeting);
    let mut dispatcher = QuestionDispatcher::new(transport, conversation);

    print_welcome_banner(endpoint);
    for message in dispatcher.conversation().messages() {
        renderer::print_message(message);
    }
    println!();

    let (mut chat_input, _writer) = ChatInput::new(prompt_for(DialogState::Idle))
        .map_err(|e| anyhow::anyhow!("Failed to initialize input: {e}"))?;

    loop {
        let text = match chat_input.read_line().await {
            InputEvent::Eof => {
                println!("\n  {}", style("Session ended.").dim());
                break;
            }
            InputEvent::Interrupted => {
                println!("\n  {}", style("Press Ctrl+D to exit, or keep chatting.").dim());
                continue;
            }
            InputEvent::Message(text) => text,
        };

        if let Some(cmd) = commands::parse(&text) {
            match cmd {
                ChatCommand::Help => commands::print_help(),
                ChatCommand::Clear => chat_input.clear(),
                ChatCommand::Exit => {
                    println!("\n  {}", style("Session ended.").dim());
                    break;
                }
                ChatCommand::History => {
                    renderer::print_transcript(dispatcher.conversation().messages());
                }
                ChatCommand::Reset => {
                    dispatcher.conversation_mut().reset();
                    chat_input.update_prompt(&prompt_for(DialogState::Idle));
                    println!("\n  {}\n", style("Pending question dropped.").dim());
                }
                ChatCommand::Unknown(name) => {
                    println!(
                        "\n  {} Unknown command: {}. Type /help for available commands.\n",
                        style("?").yellow().bold(),
                        style(name).dim()
                    );
                }
            }
            continue;
        }

        let before = dispatcher.conversation().messages().len();
        let spinner = thinking_spinner();
        let outcome = dispatcher.submit(&text).await;
        spinner.finish_and_clear();
        debug!(?outcome, "question dispatched");

        if outcome == SubmitOutcome::Ignored {
            continue;
        }

        println!();
        for message in &dispatcher.conversation().messages()[before..] {
            if message.sender == Sender::Bot {
                renderer::print_message(message);
            }
        }
        if outcome == SubmitOutcome::Failed {
            println!("  {}", style("Type a message to retry, /exit to quit.").dim());
        }
        println!();

        chat_input.update_prompt(&prompt_for(dispatcher.conversation().state()));
    }

    Ok(())
}
