// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic error types for the app configuration layer.
//!
//! These cover the fatal-at-startup path only. Rule profile documents use
//! the degrade-and-log policy in [`crate::store`] and never produce errors
//! past the ConfigStore boundary.

use miette::Diagnostic;
use thiserror::Error;

/// An app configuration error, rendered as a miette diagnostic at startup.
#[derive(Debug, Clone, Error, Diagnostic)]
pub enum ConfigError {
    /// The configuration sources could not be parsed or merged.
    #[error("could not load configuration: {message}")]
    #[diagnostic(
        code(intake_triage::config::parse),
        help("check intake-triage.toml and INTAKE_* environment variables against the documented schema")
    )]
    Parse { message: String },

    /// A semantic constraint failed after deserialization.
    #[error("invalid configuration: {message}")]
    #[diagnostic(code(intake_triage::config::validation))]
    Validation { message: String },
}

/// Render a list of configuration errors to stderr as miette reports.
pub fn render_errors(errors: &[ConfigError]) {
    for error in errors {
        eprintln!("{:?}", miette::Report::new(error.clone()));
    }
}
