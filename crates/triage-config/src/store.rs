// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Profile document loading with graceful degradation.
//!
//! Each of the three rule documents is loaded independently: a missing file
//! yields that rule set's documented default, a malformed file likewise.
//! Both cases are logged at `warn` and never abort the load, so an
//! operator's broken edit to one document leaves the other two rule sets
//! intact. Loading is idempotent and safe under concurrent reads; this
//! implementation reloads per request rather than caching (simplicity over
//! freshness).

use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::model::ProfileSelection;
use crate::profile::{ProfileSnapshot, RoutingConfig, SeverityDoc, TaxonomyDoc};

const TAXONOMY_FILE: &str = "taxonomy.json";
const SEVERITY_FILE: &str = "severity.yaml";
const ROUTING_FILE: &str = "routing.json";

/// Resolved location of a profile's rule documents.
///
/// Built once from explicit configuration and passed into [`ConfigStore`];
/// nothing below this layer reads the environment.
#[derive(Debug, Clone)]
pub struct ProfileLocator {
    name: String,
    dir: PathBuf,
}

impl ProfileLocator {
    /// Locate a named profile under a profiles directory.
    pub fn named(profiles_dir: impl AsRef<Path>, name: impl Into<String>) -> Self {
        let name = name.into();
        let dir = profiles_dir.as_ref().join(&name);
        Self { name, dir }
    }

    /// Locate a profile by an explicit directory, bypassing the name lookup.
    pub fn explicit(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "custom".to_string());
        Self { name, dir }
    }

    /// Resolve the locator from the app configuration. An explicit
    /// `config_path` wins over the named lookup.
    pub fn from_selection(selection: &ProfileSelection) -> Self {
        match selection.config_path.as_deref() {
            Some(path) if !path.trim().is_empty() => Self::explicit(path),
            _ => Self::named(&selection.profiles_dir, &selection.name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// Loads and holds the three rule sets for one profile.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    locator: ProfileLocator,
}

impl ConfigStore {
    pub fn new(locator: ProfileLocator) -> Self {
        Self { locator }
    }

    pub fn locator(&self) -> &ProfileLocator {
        &self.locator
    }

    /// Load a fresh snapshot of all three rule sets as one atomic unit.
    ///
    /// Infallible by design: every per-document failure degrades to that
    /// document's default and is logged, never returned.
    pub fn load(&self) -> ProfileSnapshot {
        let dir = self.locator.dir();
        debug!(profile = self.locator.name(), dir = %dir.display(), "loading profile snapshot");

        let taxonomy: TaxonomyDoc = self.load_document(TAXONOMY_FILE, parse_json);
        let severity: SeverityDoc = self.load_document(SEVERITY_FILE, parse_yaml);
        let routing: RoutingConfig = self.load_document(ROUTING_FILE, parse_json);

        let mut snapshot = ProfileSnapshot {
            name: self.locator.name().to_string(),
            taxonomy: taxonomy.taxonomy,
            severity_rules: severity.severity_rules,
            routing,
        };
        sanitize_scores(&mut snapshot);
        snapshot
    }

    /// Load one rule document, degrading to `T::default()` on any failure.
    fn load_document<T>(&self, file: &str, parse: fn(&str) -> Result<T, String>) -> T
    where
        T: DeserializeOwned + Default,
    {
        let path = self.locator.dir().join(file);
        let content = match std::fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                warn!(
                    path = %path.display(),
                    "profile document missing, using defaults"
                );
                return T::default();
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read profile document, using defaults"
                );
                return T::default();
            }
        };

        match parse(&content) {
            Ok(value) => value,
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "malformed profile document, using defaults"
                );
                T::default()
            }
        }
    }
}

fn parse_json<T: DeserializeOwned>(content: &str) -> Result<T, String> {
    serde_json::from_str(content).map_err(|e| e.to_string())
}

fn parse_yaml<T: DeserializeOwned>(content: &str) -> Result<T, String> {
    serde_yaml::from_str(content).map_err(|e| e.to_string())
}

/// Enforce the non-negative severity score invariant on loaded rules.
///
/// Negative declared scores are clamped to zero rather than rejected, in
/// keeping with the degrade-and-log policy.
fn sanitize_scores(snapshot: &mut ProfileSnapshot) {
    for (level, rule) in snapshot.severity_rules.iter_mut() {
        if rule.score < 0 {
            warn!(
                level = level.as_str(),
                score = rule.score,
                "negative severity score clamped to 0"
            );
            rule.score = 0;
        }
    }
}
