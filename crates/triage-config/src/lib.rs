// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration system for the intake triage engine.
//!
//! Two distinct configuration layers live here:
//!
//! - The **app config** (`intake-triage.toml`): TOML with strict validation
//!   (`deny_unknown_fields`), XDG file hierarchy lookup, and `INTAKE_`
//!   environment variable overrides. Errors here are fatal at startup and
//!   rendered as miette diagnostics.
//! - The **rule profiles** (`profiles/<name>/`): the three rule documents
//!   (`taxonomy.json`, `severity.yaml`, `routing.json`) that drive triage
//!   decisions. Errors here are never fatal: a missing or malformed document
//!   is logged and replaced by its documented default, so the pipeline
//!   degrades gracefully instead of crashing.

pub mod error;
pub mod loader;
pub mod model;
pub mod profile;
pub mod store;
pub mod validation;

pub use error::{render_errors, ConfigError};
pub use loader::{load_config, load_config_from_str};
pub use model::{EscalationConfig, ProfileSelection, ServerConfig, TriageConfig};
pub use profile::{
    ProfileSnapshot, RoutingConfig, RoutingRule, SeverityDoc, SeverityOverride, SeverityRule,
    SeverityRules, TaxonomyDoc, TaxonomyEntry,
};
pub use store::{ConfigStore, ProfileLocator};

/// Load the app configuration from the XDG hierarchy and validate it.
///
/// This is the high-level entry point that:
/// 1. Loads config from TOML files + env vars via Figment
/// 2. On success: runs post-deserialization validation
/// 3. On Figment error: converts to a diagnostic error list
pub fn load_and_validate() -> Result<TriageConfig, Vec<ConfigError>> {
    match loader::load_config() {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse {
            message: err.to_string(),
        }]),
    }
}

/// Load the app configuration from a TOML string and validate it.
///
/// Useful for testing and explicit configuration.
pub fn load_and_validate_str(toml_content: &str) -> Result<TriageConfig, Vec<ConfigError>> {
    match loader::load_config_from_str(toml_content) {
        Ok(config) => {
            validation::validate_config(&config)?;
            Ok(config)
        }
        Err(err) => Err(vec![ConfigError::Parse {
            message: err.to_string(),
        }]),
    }
}
