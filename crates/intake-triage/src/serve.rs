// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `intake-triage serve` command implementation.
//!
//! Runs the MCP server over stdio until the client disconnects.

use rmcp::ServiceExt;
use tokio::io::{stdin, stdout};
use tracing::info;
use triage_config::TriageConfig;
use triage_mcp_server::IntakeTriageServer;

pub async fn run_serve(config: TriageConfig) -> anyhow::Result<()> {
    let server = IntakeTriageServer::new(&config);
    info!(
        profile = server.store().locator().name(),
        dir = %server.store().locator().dir().display(),
        "starting MCP server on stdio"
    );

    let service = server.serve((stdin(), stdout())).await?;
    service.waiting().await?;

    info!("intake-triage serve shutdown complete");
    Ok(())
}
