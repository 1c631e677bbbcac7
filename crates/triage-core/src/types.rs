// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Decision types shared across the pipeline and the tool boundary.
//!
//! Every type here is an immutable value: each triage decision is built
//! fresh from request-scoped inputs and never mutated afterwards.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Routing priority assigned to a case.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "UPPERCASE")]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    High,
    Normal,
    Low,
}

/// How a routing decision was reached.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RouteStatus {
    /// The global severity override preempted category routing.
    SeverityOverride,
    /// A category rule matched and the score met its threshold.
    Routed,
    /// A category rule matched but the score fell short of its threshold.
    BelowThreshold,
    /// No rule matched the category; the default destination was used.
    UnmatchedCategoryFallback,
}

/// Result of classifying intake text against the taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Winning category, or `None` when no keyword matched at all.
    pub category: Option<String>,
    /// Fraction of total keyword matches attributable to the winner,
    /// rounded to two decimal places. Always in `[0, 1]`.
    pub confidence: f64,
    /// Keywords (as configured, not normalized) that matched for the winner.
    pub matched_keywords: Vec<String>,
    /// True iff confidence is strictly below 0.5 -- the external
    /// decision-maker should pick the category.
    pub needs_external_decision: bool,
}

/// Result of scoring intake text against the severity rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeverityResult {
    pub score: i64,
    pub level: String,
    pub reason: String,
}

/// Result of routing a (category, score) pair to a destination queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResult {
    pub destination: String,
    pub priority: Priority,
    pub status: RouteStatus,
}

/// Category choice supplied by the external decision-maker during the
/// second phase of an escalated triage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmDecision {
    pub selected_category: String,
    pub reason: String,
}

/// Terminal output of the triage pipeline.
///
/// In the resolved shape `severity` and `routing` are populated and
/// `needs_external_decision` is false. In the deferred shape both are `None`
/// and the caller is expected to obtain a category externally, then invoke
/// severity scoring and routing directly. `llm_decision` is only populated
/// after that second phase completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageDecision {
    pub needs_external_decision: bool,
    pub category: Option<String>,
    pub classification: ClassificationResult,
    pub severity: Option<SeverityResult>,
    pub routing: Option<RoutingResult>,
    pub llm_decision: Option<LlmDecision>,
}
