//! Werkstatt site server and chat client entry point.
//!
//! Binary name: `werk`
//!
//! Parses CLI arguments, loads the configuration, then either starts the
//! site server or runs one of the client commands against `/ask`.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;
use werkstatt_infra::config::resolve_config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let otel = matches!(cli.command, Commands::Serve { otel: true, .. });
    werkstatt_observe::init_tracing(werkstatt_observe::verbosity_filter(cli.verbose, cli.quiet), otel)
        .map_err(|e| anyhow::anyhow!("failed to initialize tracing: {e}"))?;

    // Shell completions don't need configuration
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "werk", &mut std::io::stdout());
        return Ok(());
    }

    let mut config = resolve_config(cli.config.as_deref()).await?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            templates,
            static_dir,
            otel: _,
        } => {
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(templates) = templates {
                config.server.templates_dir = templates;
            }
            if let Some(static_dir) = static_dir {
                config.server.static_dir = static_dir;
            }

            let addr = format!("{}:{}", config.server.host, config.server.port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            if !cli.quiet {
                println!(
                    "  {} Werkstatt listening on {}",
                    console::style("*").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!(
                    "  {}",
                    console::style(format!("Templates: {}", config.server.templates_dir)).dim()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let router = http::router::build_router(AppState::new(config));

            axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Chat { endpoint } => {
            cli::chat::loop_runner::run_chat_loop(&config.chat, endpoint.as_deref()).await?;
        }

        Commands::Ask {
            question,
            gender,
            endpoint,
        } => {
            cli::ask::ask_once(
                &config.chat,
                &question,
                gender.as_deref(),
                endpoint.as_deref(),
                cli.json,
            )
            .await?;
        }

        Commands::Pages { kind } => {
            cli::pages::list_pages(kind.map(Into::into), cli.json)?;
        }

        Commands::Completions { .. } => unreachable!("handled above"),
    }

    werkstatt_observe::shutdown_tracing();
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("shutdown signal received");
}
