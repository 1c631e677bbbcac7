// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-to-end pipeline runs against a profile parsed from the same wire
//! documents the config store reads from disk.

use triage_config::{ProfileSnapshot, RoutingConfig, SeverityDoc, TaxonomyDoc};
use triage_core::{Priority, RouteStatus, TriageError};
use triage_engine::{TriageOutcome, TriagePipeline};

const TAXONOMY_JSON: &str = r#"{
  "taxonomy": [
    {"id": "emergency", "keywords": ["chest pain", "difficulty breathing", "unconscious", "stroke"]},
    {"id": "billing", "keywords": ["invoice", "overcharge", "refund"]},
    {"id": "appointment", "keywords": ["reschedule", "booking", "appointment"]}
  ]
}"#;

const SEVERITY_YAML: &str = r#"
severity_rules:
  critical:
    score: 10
    keywords: ["chest pain", "unconscious", "not breathing"]
  high:
    score: 8
    keywords: ["difficulty breathing", "severe bleeding"]
  medium:
    score: 5
    keywords: ["overcharge", "persistent pain"]
  low:
    score: 2
    keywords: ["question", "reschedule"]
"#;

const ROUTING_JSON: &str = r#"{
  "default_destination": "General_Queue",
  "severity_override": {"min_score": 9, "destination": "High_Priority_Queue", "priority": "HIGH"},
  "routes": [
    {"category": "emergency", "threshold": 3, "destination": "ER_Queue"},
    {"category": "billing", "threshold": 5, "destination": "Billing_Queue"},
    {"category": "appointment", "threshold": 1, "destination": "Scheduling_Queue"}
  ]
}"#;

fn pipeline() -> TriagePipeline {
    let taxonomy: TaxonomyDoc = serde_json::from_str(TAXONOMY_JSON).unwrap();
    let severity: SeverityDoc = serde_yaml::from_str(SEVERITY_YAML).unwrap();
    let routing: RoutingConfig = serde_json::from_str(ROUTING_JSON).unwrap();
    TriagePipeline::new(ProfileSnapshot {
        name: "default".into(),
        taxonomy: taxonomy.taxonomy,
        severity_rules: severity.severity_rules,
        routing,
    })
}

#[test]
fn emergency_intake_escalates_to_the_override_queue() {
    let pipeline = pipeline();
    let outcome = pipeline
        .triage("Patient reports chest pain and difficulty breathing")
        .unwrap();
    let TriageOutcome::Resolved {
        category,
        classification,
        severity,
        routing,
    } = outcome
    else {
        panic!("expected a resolved outcome");
    };

    assert_eq!(category, "emergency");
    assert_eq!(classification.confidence, 1.0);
    assert!(!classification.needs_external_decision);
    // "critical" is scanned before "high"; "chest pain" wins.
    assert_eq!(severity.level, "critical");
    assert_eq!(severity.score, 10);
    assert_eq!(routing.destination, "High_Priority_Queue");
    assert_eq!(routing.priority, Priority::High);
    assert_eq!(routing.status, RouteStatus::SeverityOverride);
}

#[test]
fn billing_intake_stays_on_its_category_route() {
    let pipeline = pipeline();
    let decision = pipeline
        .triage("I want a refund, there is an overcharge on my invoice")
        .unwrap()
        .into_decision();

    assert_eq!(decision.category.as_deref(), Some("billing"));
    let severity = decision.severity.unwrap();
    assert_eq!(severity.level, "medium");
    assert_eq!(severity.score, 5);
    let routing = decision.routing.unwrap();
    assert_eq!(routing.destination, "Billing_Queue");
    assert_eq!(routing.priority, Priority::Normal);
    assert_eq!(routing.status, RouteStatus::Routed);
}

#[test]
fn low_severity_appointment_routes_at_normal_priority() {
    let pipeline = pipeline();
    let decision = pipeline
        .triage("please reschedule my appointment")
        .unwrap()
        .into_decision();

    assert_eq!(decision.category.as_deref(), Some("appointment"));
    let severity = decision.severity.unwrap();
    assert_eq!(severity.level, "low");
    assert_eq!(severity.score, 2);
    let routing = decision.routing.unwrap();
    assert_eq!(routing.destination, "Scheduling_Queue");
    assert_eq!(routing.priority, Priority::Normal);
}

#[test]
fn unrecognized_intake_is_deferred_with_no_downstream_stages() {
    let pipeline = pipeline();
    let decision = pipeline
        .triage("hello, I have a general comment about your website")
        .unwrap()
        .into_decision();

    assert!(decision.needs_external_decision);
    assert_eq!(decision.category, None);
    assert_eq!(decision.classification.confidence, 0.0);
    assert!(decision.severity.is_none());
    assert!(decision.routing.is_none());
}

#[test]
fn deferred_case_finishes_once_a_category_is_supplied() {
    let pipeline = pipeline();
    // Second phase of an escalated triage: the external decision-maker
    // picked "emergency"; severity and routing run with that category.
    let severity = pipeline
        .score_severity("hello, something feels wrong", Some("emergency"))
        .unwrap();
    assert_eq!(severity.level, "escalated");
    assert_eq!(severity.score, 9);

    let routing = pipeline.route(Some("emergency"), severity.score);
    assert_eq!(routing.destination, "High_Priority_Queue");
    assert_eq!(routing.status, RouteStatus::SeverityOverride);
}

#[test]
fn stage_entry_points_reject_empty_text() {
    let pipeline = pipeline();
    assert!(matches!(
        pipeline.classify(""),
        Err(TriageError::InvalidInput { .. })
    ));
    assert!(matches!(
        pipeline.score_severity("   ", None),
        Err(TriageError::InvalidInput { .. })
    ));
}
