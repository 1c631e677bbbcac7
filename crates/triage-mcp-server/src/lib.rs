// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! MCP surface for intake triage.
//!
//! Exposes the four pipeline operations as MCP tools and the three rule
//! documents (plus the active profile identity) as MCP resources, so an
//! external decision-maker can read the configuration it needs to pick a
//! category for deferred cases.

pub mod envelope;
pub mod server;

pub use server::IntakeTriageServer;
