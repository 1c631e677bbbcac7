// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `intake-triage config` command implementation.
//!
//! Prints the resolved app configuration as TOML, then the rule snapshot
//! the active profile currently resolves to as JSON. Useful for checking
//! what a running server would actually see.

use triage_config::{ConfigStore, ProfileLocator, TriageConfig};

pub fn run_config(config: &TriageConfig) -> anyhow::Result<()> {
    println!("# resolved configuration");
    print!("{}", toml::to_string_pretty(config)?);

    let store = ConfigStore::new(ProfileLocator::from_selection(&config.profile));
    let snapshot = store.load();
    println!("\n# active profile snapshot ({})", snapshot.name);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
