// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! App configuration model structs.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level app configuration.
///
/// Loaded from TOML files following the XDG hierarchy, with environment
/// variable overrides. All sections are optional and default to sensible
/// values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TriageConfig {
    /// Active rule profile selection.
    #[serde(default)]
    pub profile: ProfileSelection,

    /// Server identity and logging settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// External decision-maker settings for low-confidence escalation.
    #[serde(default)]
    pub escalation: EscalationConfig,
}

/// Selection of the active rule profile.
///
/// The active profile is an explicit configuration value: components never
/// read it ambiently from the process environment. Environment resolution
/// (`INTAKE_PROFILE_*`) happens only in the figment loading layer.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ProfileSelection {
    /// Named profile to load from `profiles_dir` (e.g. per industry).
    #[serde(default = "default_profile_name")]
    pub name: String,

    /// Directory containing one subdirectory per named profile.
    #[serde(default = "default_profiles_dir")]
    pub profiles_dir: String,

    /// Explicit directory holding the three rule documents. Overrides
    /// `name`/`profiles_dir` when set.
    #[serde(default)]
    pub config_path: Option<String>,
}

impl Default for ProfileSelection {
    fn default() -> Self {
        Self {
            name: default_profile_name(),
            profiles_dir: default_profiles_dir(),
            config_path: None,
        }
    }
}

fn default_profile_name() -> String {
    "default".to_string()
}

fn default_profiles_dir() -> String {
    "profiles".to_string()
}

/// Server identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Display name reported to MCP clients.
    #[serde(default = "default_server_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_server_name() -> String {
    "intake-triage".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// External decision-maker configuration.
///
/// The escalation client speaks the OpenAI-compatible chat completions
/// protocol; any endpoint implementing it can serve as the decision-maker.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct EscalationConfig {
    /// Chat completions endpoint URL.
    #[serde(default = "default_escalation_endpoint")]
    pub endpoint: String,

    /// Model identifier to request from the endpoint.
    #[serde(default = "default_escalation_model")]
    pub model: String,

    /// Bearer token for the endpoint. `None` sends no Authorization header.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Maximum tokens for the decision response.
    #[serde(default = "default_escalation_max_tokens")]
    pub max_tokens: u32,

    /// Sampling temperature. Low by default: the decision must be a strict
    /// JSON object, not prose.
    #[serde(default = "default_escalation_temperature")]
    pub temperature: f32,
}

impl Default for EscalationConfig {
    fn default() -> Self {
        Self {
            endpoint: default_escalation_endpoint(),
            model: default_escalation_model(),
            api_key: None,
            max_tokens: default_escalation_max_tokens(),
            temperature: default_escalation_temperature(),
        }
    }
}

fn default_escalation_endpoint() -> String {
    "http://127.0.0.1:8000/v1/chat/completions".to_string()
}

fn default_escalation_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_escalation_max_tokens() -> u32 {
    1024
}

fn default_escalation_temperature() -> f32 {
    0.2
}
