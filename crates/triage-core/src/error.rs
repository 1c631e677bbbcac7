// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the intake triage engine.

use thiserror::Error;

/// The primary error type for triage operations.
///
/// Every variant is recoverable: invalid input is surfaced as a structured
/// error envelope at the tool boundary, and nothing here is ever fatal to
/// the process. Configuration problems have their own error type in
/// `triage-config` and are absorbed there -- they never reach the pipeline.
#[derive(Debug, Error)]
pub enum TriageError {
    /// A required request field was empty or of the wrong shape.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl TriageError {
    /// Shorthand for an `InvalidInput` error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        TriageError::InvalidInput {
            message: message.into(),
        }
    }

    /// Numeric error code used in the wire envelope.
    ///
    /// Validation failures map to 422; other codes are reserved for future
    /// validation kinds.
    pub fn code(&self) -> u16 {
        match self {
            TriageError::InvalidInput { .. } => 422,
            TriageError::Internal(_) => 500,
        }
    }
}
