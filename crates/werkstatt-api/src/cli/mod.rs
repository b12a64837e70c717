//! CLI command definitions and dispatch for the `werk` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod chat;
pub mod pages;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

/// Workshop site server and chat client.
#[derive(Parser)]
#[command(name = "werk", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file to use instead of ~/.werkstatt/config.toml.
    #[arg(long, global = true, env = "WERKSTATT_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the site server.
    Serve {
        /// Port to listen on.
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to.
        #[arg(long)]
        host: Option<String>,

        /// Directory with the page templates.
        #[arg(long)]
        templates: Option<String>,

        /// Directory served under /static.
        #[arg(long = "static")]
        static_dir: Option<String>,

        /// Export spans to stdout via OpenTelemetry.
        #[arg(long)]
        otel: bool,
    },

    /// Chat with the answer service interactively.
    Chat {
        /// Base URL of the answer service.
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// Ask a single question and print the reply.
    Ask {
        /// The question.
        question: String,

        /// Gender answer for a follow-up round.
        #[arg(short, long)]
        gender: Option<String>,

        /// Base URL of the answer service.
        #[arg(short, long)]
        endpoint: Option<String>,
    },

    /// List the site pages.
    #[command(alias = "ls")]
    Pages {
        /// Only pages of this kind.
        #[arg(long, value_enum)]
        kind: Option<KindFilter>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum KindFilter {
    Home,
    Info,
    Projects,
}

impl From<KindFilter> for werkstatt_types::page::PageKind {
    fn from(kind: KindFilter) -> Self {
        match kind {
            KindFilter::Home => Self::Home,
            KindFilter::Info => Self::Info,
            KindFilter::Projects => Self::Projects,
        }
    }
}
