// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Intake triage - classify, score, and route free-text intake.
//!
//! This is the binary entry point: an MCP server over stdio plus a couple
//! of local commands for running the pipeline and inspecting configuration.

use clap::{Parser, Subcommand};

mod config_cmd;
mod serve;
mod triage;

/// Intake triage - classify, score, and route free-text intake.
#[derive(Parser, Debug)]
#[command(name = "intake-triage", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the MCP server on stdio.
    Serve,
    /// Triage one intake text locally and print the decision as JSON.
    Triage {
        /// The intake text to triage.
        text: String,
        /// On low confidence, ask the configured external decision-maker
        /// for a category instead of stopping at the deferred decision.
        #[arg(long)]
        escalate: bool,
    },
    /// Print the resolved configuration and active profile snapshot.
    Config,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load and validate configuration at startup.
    let config = match triage_config::load_and_validate() {
        Ok(config) => config,
        Err(errors) => {
            triage_config::render_errors(&errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.server.log_level);

    let result = match cli.command {
        Some(Commands::Serve) => serve::run_serve(config).await,
        Some(Commands::Triage { text, escalate }) => {
            triage::run_triage(config, &text, escalate).await
        }
        Some(Commands::Config) => config_cmd::run_config(&config),
        None => {
            println!("intake-triage: use --help for available commands");
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

/// Initializes the tracing subscriber with the given log level.
///
/// Logs go to stderr: stdout carries the MCP transport under `serve` and
/// the JSON decision under `triage`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "intake_triage={log_level},triage_config={log_level},triage_engine={log_level},\
             triage_escalation={log_level},triage_mcp_server={log_level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
