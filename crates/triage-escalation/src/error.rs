// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use triage_core::TriageError;

/// Errors from the external decision-maker call and the second triage phase.
#[derive(Debug, thiserror::Error)]
pub enum EscalationError {
    #[error("escalation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("escalation endpoint returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("escalation endpoint returned no choices")]
    EmptyResponse,

    #[error("failed to serialize rule documents for the prompt: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("decision payload was not valid JSON: {message}")]
    MalformedDecision { message: String },

    #[error(transparent)]
    Triage(#[from] TriageError),
}
