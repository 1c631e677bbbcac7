// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rule-set models for a triage profile.
//!
//! A profile is a named bundle of three documents: `taxonomy.json`,
//! `severity.yaml`, and `routing.json`. Iteration order matters in two
//! places -- severity levels beyond the fixed priority prefix match in
//! declaration order, and the first routing rule for a category wins -- so
//! severity rules are carried in an [`IndexMap`] and routes in a `Vec`,
//! never a hash map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use triage_core::Priority;

/// Ordered severity rules, keyed by level name.
pub type SeverityRules = IndexMap<String, SeverityRule>;

/// One taxonomy category and the keywords that indicate it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyEntry {
    /// Category key (e.g. `"emergency"`, `"billing"`).
    pub id: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Wire shape of `taxonomy.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyDoc {
    #[serde(default)]
    pub taxonomy: Vec<TaxonomyEntry>,
}

/// Score and keyword list for one severity level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeverityRule {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Wire shape of `severity.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeverityDoc {
    #[serde(default)]
    pub severity_rules: SeverityRules,
}

/// Category-to-destination routing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingRule {
    pub category: String,
    #[serde(default)]
    pub threshold: i64,
    pub destination: String,
}

/// Global score threshold that preempts category-specific routing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SeverityOverride {
    #[serde(default = "default_override_min_score")]
    pub min_score: i64,
    #[serde(default = "default_override_destination")]
    pub destination: String,
    #[serde(default = "default_override_priority")]
    pub priority: Priority,
}

impl Default for SeverityOverride {
    fn default() -> Self {
        Self {
            min_score: default_override_min_score(),
            destination: default_override_destination(),
            priority: default_override_priority(),
        }
    }
}

fn default_override_min_score() -> i64 {
    9
}

fn default_override_destination() -> String {
    "High_Priority_Queue".to_string()
}

fn default_override_priority() -> Priority {
    Priority::High
}

/// Wire shape of `routing.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RoutingConfig {
    #[serde(default = "default_destination")]
    pub default_destination: String,
    #[serde(default)]
    pub severity_override: SeverityOverride,
    #[serde(default)]
    pub routes: Vec<RoutingRule>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            default_destination: default_destination(),
            severity_override: SeverityOverride::default(),
            routes: Vec::new(),
        }
    }
}

fn default_destination() -> String {
    "General_Queue".to_string()
}

/// The three rule sets of one profile, loaded atomically as a unit.
///
/// A snapshot is read-only after construction; every triage decision works
/// against exactly one snapshot, so partially updated rule sets are never
/// observed mid-decision.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    /// Profile name the snapshot was loaded for.
    pub name: String,
    pub taxonomy: Vec<TaxonomyEntry>,
    pub severity_rules: SeverityRules,
    pub routing: RoutingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn taxonomy_doc_parses_original_wire_shape() {
        let doc: TaxonomyDoc = serde_json::from_str(
            r#"{"taxonomy": [{"id": "emergency", "keywords": ["chest pain", "stroke"]}]}"#,
        )
        .unwrap();
        assert_eq!(doc.taxonomy.len(), 1);
        assert_eq!(doc.taxonomy[0].id, "emergency");
        assert_eq!(doc.taxonomy[0].keywords, vec!["chest pain", "stroke"]);
    }

    #[test]
    fn severity_doc_preserves_declaration_order() {
        let yaml = "
severity_rules:
  zebra:
    score: 1
    keywords: [\"minor\"]
  alpha:
    score: 10
    keywords: [\"emergency\"]
";
        let doc: SeverityDoc = serde_yaml::from_str(yaml).unwrap();
        let levels: Vec<&str> = doc.severity_rules.keys().map(String::as_str).collect();
        // IndexMap keeps YAML order; a BTreeMap would sort alphabetically.
        assert_eq!(levels, vec!["zebra", "alpha"]);
    }

    #[test]
    fn routing_config_defaults_match_documented_fallbacks() {
        let routing = RoutingConfig::default();
        assert_eq!(routing.default_destination, "General_Queue");
        assert_eq!(routing.severity_override.min_score, 9);
        assert_eq!(routing.severity_override.destination, "High_Priority_Queue");
        assert_eq!(routing.severity_override.priority, Priority::High);
        assert!(routing.routes.is_empty());
    }

    #[test]
    fn routing_doc_fills_missing_sections() {
        let routing: RoutingConfig =
            serde_json::from_str(r#"{"default_destination": "Front_Desk"}"#).unwrap();
        assert_eq!(routing.default_destination, "Front_Desk");
        assert_eq!(routing.severity_override.min_score, 9);
    }

    #[test]
    fn unknown_fields_in_documents_are_rejected() {
        let result: Result<TaxonomyDoc, _> =
            serde_json::from_str(r#"{"taxonomy": [], "extra": true}"#);
        assert!(result.is_err());
    }
}
