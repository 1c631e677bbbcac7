// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the intake triage engine.
//!
//! This crate provides the shared decision types, the error taxonomy, and
//! the text normalizer used by every stage of the triage pipeline. It holds
//! no business rules: classification, severity, and routing logic live in
//! `triage-engine`, configuration models in `triage-config`.

pub mod error;
pub mod text;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::TriageError;
pub use text::normalize;
pub use types::{
    ClassificationResult, LlmDecision, Priority, RouteStatus, RoutingResult, SeverityResult,
    TriageDecision,
};
