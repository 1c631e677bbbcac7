// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! External decision-maker integration.
//!
//! When classification confidence falls below the threshold the pipeline
//! defers the category choice. This crate carries that deferred case to an
//! OpenAI-compatible chat completions endpoint, parses the strict JSON
//! decision it returns, and finishes severity scoring and routing with the
//! chosen category.
//!
//! The triage tools themselves never block on this path: escalation is a
//! separate second phase driven by the caller.

pub mod client;
pub mod error;

pub use client::{resolve_with_decision, EscalationClient};
pub use error::EscalationError;
