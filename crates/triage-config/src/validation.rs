// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for app configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as known log levels and sane escalation parameters.

use crate::error::ConfigError;
use crate::model::TriageConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &TriageConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if !LOG_LEVELS.contains(&config.server.log_level.as_str()) {
        errors.push(ConfigError::Validation {
            message: format!(
                "server.log_level must be one of {}, got `{}`",
                LOG_LEVELS.join(", "),
                config.server.log_level
            ),
        });
    }

    if config.profile.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "profile.name must not be empty".to_string(),
        });
    }

    if config.profile.profiles_dir.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "profile.profiles_dir must not be empty".to_string(),
        });
    }

    let endpoint = config.escalation.endpoint.trim();
    if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
        errors.push(ConfigError::Validation {
            message: format!(
                "escalation.endpoint must be an http(s) URL, got `{endpoint}`"
            ),
        });
    }

    if config.escalation.max_tokens == 0 {
        errors.push(ConfigError::Validation {
            message: "escalation.max_tokens must be at least 1".to_string(),
        });
    }

    if !(0.0..=2.0).contains(&config.escalation.temperature) {
        errors.push(ConfigError::Validation {
            message: format!(
                "escalation.temperature must be within [0.0, 2.0], got {}",
                config.escalation.temperature
            ),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
