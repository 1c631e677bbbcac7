// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Full triage orchestration: classify, then score, then route.
//!
//! The pipeline owns one [`ProfileSnapshot`] and nothing else. It either
//! resolves the case entirely or stops after classification and hands the
//! category decision outward; it never calls the network itself.

use tracing::{debug, info};
use triage_config::ProfileSnapshot;
use triage_core::{
    ClassificationResult, RoutingResult, SeverityResult, TriageDecision, TriageError,
};

use crate::classifier::Classifier;
use crate::router::Router;
use crate::severity::SeverityScorer;

/// What a triage run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum TriageOutcome {
    /// Classification was confident enough to finish locally.
    Resolved {
        category: String,
        classification: ClassificationResult,
        severity: SeverityResult,
        routing: RoutingResult,
    },
    /// Classification was too uncertain; the category decision is handed
    /// to the external decision-maker. Only the classification is carried.
    Deferred(ClassificationResult),
}

impl TriageOutcome {
    /// Flatten into the wire-facing decision record.
    pub fn into_decision(self) -> TriageDecision {
        match self {
            TriageOutcome::Resolved {
                category,
                classification,
                severity,
                routing,
            } => TriageDecision {
                needs_external_decision: false,
                category: Some(category),
                classification,
                severity: Some(severity),
                routing: Some(routing),
                llm_decision: None,
            },
            TriageOutcome::Deferred(classification) => TriageDecision {
                needs_external_decision: true,
                category: classification.category.clone(),
                classification,
                severity: None,
                routing: None,
                llm_decision: None,
            },
        }
    }
}

/// Runs the three decision stages against one profile snapshot.
pub struct TriagePipeline {
    snapshot: ProfileSnapshot,
}

impl TriagePipeline {
    pub fn new(snapshot: ProfileSnapshot) -> Self {
        Self { snapshot }
    }

    pub fn snapshot(&self) -> &ProfileSnapshot {
        &self.snapshot
    }

    /// Classification stage only.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult, TriageError> {
        Classifier::new(&self.snapshot.taxonomy).classify(text)
    }

    /// Severity stage only.
    pub fn score_severity(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> Result<SeverityResult, TriageError> {
        SeverityScorer::new(&self.snapshot.severity_rules).score(text, category)
    }

    /// Routing stage only. Infallible: routing is total.
    pub fn route(&self, category: Option<&str>, score: i64) -> RoutingResult {
        Router::new(&self.snapshot.routing).route(category, score)
    }

    /// Run the full pipeline on one intake text.
    ///
    /// A confident classification flows straight through severity and
    /// routing. An uncertain one stops here: severity and routing for a
    /// deferred case run later, once the external decision-maker has
    /// supplied a category.
    pub fn triage(&self, text: &str) -> Result<TriageOutcome, TriageError> {
        let classification = self.classify(text)?;
        debug!(
            category = classification.category.as_deref().unwrap_or("-"),
            confidence = classification.confidence,
            "classified intake"
        );

        let Some(category) = classification
            .category
            .clone()
            .filter(|_| !classification.needs_external_decision)
        else {
            info!(
                profile = %self.snapshot.name,
                confidence = classification.confidence,
                "deferring category decision"
            );
            return Ok(TriageOutcome::Deferred(classification));
        };

        let severity = self.score_severity(text, Some(&category))?;
        let routing = self.route(Some(&category), severity.score);
        info!(
            profile = %self.snapshot.name,
            category = %category,
            score = severity.score,
            destination = %routing.destination,
            "triage resolved"
        );

        Ok(TriageOutcome::Resolved {
            category,
            classification,
            severity,
            routing,
        })
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use triage_config::{RoutingConfig, RoutingRule, SeverityRule, TaxonomyEntry};
    use triage_core::{Priority, RouteStatus};

    use super::*;

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            name: "default".into(),
            taxonomy: vec![
                TaxonomyEntry {
                    id: "emergency".into(),
                    keywords: vec!["chest pain".into(), "unconscious".into()],
                },
                TaxonomyEntry {
                    id: "billing".into(),
                    keywords: vec!["invoice".into(), "overcharge".into()],
                },
            ],
            severity_rules: IndexMap::from([
                (
                    "critical".to_string(),
                    SeverityRule {
                        score: 10,
                        keywords: vec!["chest pain".into()],
                    },
                ),
                (
                    "medium".to_string(),
                    SeverityRule {
                        score: 5,
                        keywords: vec!["overcharge".into()],
                    },
                ),
            ]),
            routing: RoutingConfig {
                routes: vec![RoutingRule {
                    category: "billing".into(),
                    threshold: 4,
                    destination: "Billing_Queue".into(),
                }],
                ..RoutingConfig::default()
            },
        }
    }

    #[test]
    fn confident_intake_resolves_end_to_end() {
        let pipeline = TriagePipeline::new(snapshot());
        let outcome = pipeline.triage("patient has chest pain").unwrap();
        let TriageOutcome::Resolved {
            category,
            severity,
            routing,
            ..
        } = outcome
        else {
            panic!("expected a resolved outcome");
        };
        assert_eq!(category, "emergency");
        assert_eq!(severity.score, 10);
        // Score 10 trips the global override regardless of category rules.
        assert_eq!(routing.status, RouteStatus::SeverityOverride);
        assert_eq!(routing.destination, "High_Priority_Queue");
        assert_eq!(routing.priority, Priority::High);
    }

    #[test]
    fn billing_intake_routes_through_its_rule() {
        let pipeline = TriagePipeline::new(snapshot());
        let outcome = pipeline.triage("billing overcharge on my invoice").unwrap();
        let TriageOutcome::Resolved {
            category,
            severity,
            routing,
            ..
        } = outcome
        else {
            panic!("expected a resolved outcome");
        };
        assert_eq!(category, "billing");
        assert_eq!(severity.score, 5);
        assert_eq!(routing.destination, "Billing_Queue");
        assert_eq!(routing.priority, Priority::Normal);
        assert_eq!(routing.status, RouteStatus::Routed);
    }

    #[test]
    fn unmatched_intake_defers() {
        let pipeline = TriagePipeline::new(snapshot());
        let outcome = pipeline.triage("just saying hello").unwrap();
        let TriageOutcome::Deferred(classification) = outcome else {
            panic!("expected a deferred outcome");
        };
        assert_eq!(classification.category, None);
        assert!(classification.needs_external_decision);

        let decision = TriageOutcome::Deferred(classification).into_decision();
        assert!(decision.needs_external_decision);
        assert!(decision.severity.is_none());
        assert!(decision.routing.is_none());
    }

    #[test]
    fn empty_text_propagates_invalid_input() {
        let pipeline = TriagePipeline::new(snapshot());
        assert!(matches!(
            pipeline.triage("  "),
            Err(TriageError::InvalidInput { .. })
        ));
    }

    #[test]
    fn resolved_decision_carries_all_stages() {
        let pipeline = TriagePipeline::new(snapshot());
        let decision = pipeline
            .triage("patient has chest pain")
            .unwrap()
            .into_decision();
        assert!(!decision.needs_external_decision);
        assert_eq!(decision.category.as_deref(), Some("emergency"));
        assert!(decision.severity.is_some());
        assert!(decision.routing.is_some());
        assert!(decision.llm_decision.is_none());
    }
}
