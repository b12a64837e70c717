//! One-shot question against the answer service.

use std::time::Duration;

use console::style;

use werkstatt_core::chat::transport::AskTransport;
use werkstatt_infra::transport::HttpAskTransport;
use werkstatt_types::ask::AskRequest;
use werkstatt_types::config::ChatConfig;

/// Post one question (optionally with a gender answer) and print the reply.
pub async fn ask_once(
    config: &ChatConfig,
    question: &str,
    gender: Option<&str>,
    endpoint: Option<&str>,
    json: bool,
) -> anyhow::Result<()> {
    let question = question.trim();
    if question.is_empty() {
        anyhow::bail!("question must not be empty");
    }

    let endpoint = endpoint.unwrap_or(config.endpoint.as_str());
    let timeout = config.request_timeout_secs.map(Duration::from_secs);
    let transport = HttpAskTransport::new(endpoint, timeout)?;

    let request = match gender.map(str::trim).filter(|g| !g.is_empty()) {
        Some(gender) => AskRequest::with_gender(question, gender),
        None => AskRequest::question(question),
    };

    let reply = match transport.ask(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            tracing::debug!(error = %e, url = transport.url(), "ask request failed");
            anyhow::bail!("{} ({e})", config.fallback_message);
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&reply)?);
        return Ok(());
    }

    println!();
    println!("  {} {}", style("Bot >").cyan().bold(), reply.response);
    if reply.ask_gender {
        println!();
        println!(
            "  {}",
            style("The service needs a gender answer: rerun with --gender <male|female>").dim()
        );
    }
    println!();
    Ok(())
}
