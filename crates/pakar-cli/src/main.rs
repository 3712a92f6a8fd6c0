#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod commands;

use std::process;

use anyhow::Context;
use clap::{Parser, Subcommand};
use pakar_client::{PortalClient, PortalConfig};
use pakar_core::{Direction, Metric, Model};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Tracing target for CLI startup
pub const TRACING_TARGET_STARTUP: &str = "pakar_cli::startup";

#[derive(Debug, Parser)]
#[command(name = "pakar", version, about = "Researcher discovery portal client")]
struct Cli {
    #[command(flatten)]
    portal: PortalConfig,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search researchers relevant to a free-text topic
    Search {
        /// Research topic to search for
        topic: String,

        /// Embedding model to query with
        #[arg(long, value_enum, default_value = "bert")]
        model: Model,

        /// Similarity or distance metric to rank with
        #[arg(long, value_enum, default_value = "cosine-similarity")]
        metric: Metric,
    },

    /// List all faculties
    Faculties,

    /// Show departments and researchers of one faculty
    Faculty {
        /// Faculty name as listed by `pakar faculties`
        name: String,
    },

    /// Translate text between Indonesian and English
    Translate {
        /// Text to translate
        text: String,

        /// Translation direction
        #[arg(long, value_enum, default_value = "id-to-en")]
        direction: Direction,

        /// Copy the translation to the system clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(error = %error, "command failed");
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing();
    tracing::debug!(
        target: TRACING_TARGET_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        portal_api_url = %cli.portal.portal_api_url,
        translator_api_url = %cli.portal.translator_api_url,
        "starting pakar"
    );

    let client = PortalClient::new(cli.portal).context("failed to create portal client")?;

    match cli.command {
        Command::Search {
            topic,
            model,
            metric,
        } => commands::search(client, topic, model, metric).await,
        Command::Faculties => commands::faculties(client).await,
        Command::Faculty { name } => commands::faculty(client, name).await,
        Command::Translate {
            text,
            direction,
            copy,
        } => commands::translate(client, text, direction, copy).await,
    }
}

/// Initializes tracing with environment-based filtering.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
