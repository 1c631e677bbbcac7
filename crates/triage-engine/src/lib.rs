// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decision pipeline for intake triage.
//!
//! This crate provides:
//! - [`Classifier`]: keyword taxonomy classification with a confidence score
//! - [`SeverityScorer`]: ordered severity rule matching
//! - [`Router`]: destination routing with override precedence
//! - [`TriagePipeline`]: the orchestrator with the escalation branch
//!
//! Every decision is a pure computation over request-scoped inputs plus a
//! read-only [`triage_config::ProfileSnapshot`]; invocations share no
//! mutable state and may run fully in parallel.

pub mod classifier;
pub mod pipeline;
pub mod router;
pub mod severity;

pub use classifier::{Classifier, CONFIDENCE_THRESHOLD};
pub use pipeline::{TriageOutcome, TriagePipeline};
pub use router::Router;
pub use severity::SeverityScorer;
