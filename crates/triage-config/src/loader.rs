// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! App configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./intake-triage.toml` >
//! `~/.config/intake-triage/intake-triage.toml` >
//! `/etc/intake-triage/intake-triage.toml` with environment variable
//! overrides via the `INTAKE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::TriageConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/intake-triage/intake-triage.toml` (system-wide)
/// 3. `~/.config/intake-triage/intake-triage.toml` (user XDG config)
/// 4. `./intake-triage.toml` (local directory)
/// 5. `INTAKE_*` environment variables
pub fn load_config() -> Result<TriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::file("/etc/intake-triage/intake-triage.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("intake-triage/intake-triage.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("intake-triage.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<TriageConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(TriageConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `INTAKE_PROFILE_PROFILES_DIR` must map
/// to `profile.profiles_dir`, not `profile.profiles.dir`.
fn env_provider() -> Env {
    Env::prefixed("INTAKE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: INTAKE_PROFILE_CONFIG_PATH -> "profile_config_path"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("profile_", "profile.", 1)
            .replacen("server_", "server.", 1)
            .replacen("escalation_", "escalation.", 1);
        mapped.into()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_sources_present() {
        let config = load_config_from_str("").expect("empty TOML should yield defaults");
        assert_eq!(config.profile.name, "default");
        assert_eq!(config.profile.profiles_dir, "profiles");
        assert_eq!(config.server.log_level, "info");
        assert!(config.escalation.api_key.is_none());
    }

    #[test]
    fn toml_overrides_defaults() {
        let config = load_config_from_str(
            r#"
[profile]
name = "healthcare"

[server]
log_level = "debug"
"#,
        )
        .expect("valid TOML");
        assert_eq!(config.profile.name, "healthcare");
        assert_eq!(config.server.log_level, "debug");
        // Untouched sections keep defaults.
        assert_eq!(config.escalation.max_tokens, 1024);
    }

    #[test]
    fn unknown_key_is_rejected() {
        let result = load_config_from_str(
            r#"
[profile]
nme = "typo"
"#,
        );
        assert!(result.is_err());
    }
}
