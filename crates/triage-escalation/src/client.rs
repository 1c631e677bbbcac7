// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat-completions client for the category decision.
//!
//! Speaks the OpenAI-compatible `/v1/chat/completions` protocol. The model
//! is asked for a strict JSON object naming one taxonomy category; the reply
//! may arrive wrapped in a Markdown code fence and is unwrapped before
//! parsing.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use triage_config::{EscalationConfig, ProfileSnapshot};
use triage_core::{ClassificationResult, LlmDecision, TriageDecision};
use triage_engine::{Router, SeverityScorer};

use crate::error::EscalationError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct DecisionPayload {
    selected_category: String,
    reason: String,
}

/// Client for the external category decision-maker.
pub struct EscalationClient {
    config: EscalationConfig,
    http: reqwest::Client,
}

impl EscalationClient {
    pub fn new(config: EscalationConfig) -> Result<Self, EscalationError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, http })
    }

    /// Ask the decision-maker to pick a category for one intake text.
    ///
    /// The chosen category is taken at face value even when it names no
    /// taxonomy entry; routing then falls through to the default
    /// destination, which is the documented behavior for unknown
    /// categories.
    pub async fn decide_category(
        &self,
        snapshot: &ProfileSnapshot,
        text: &str,
    ) -> Result<LlmDecision, EscalationError> {
        let prompt = build_prompt(snapshot, text)?;

        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt,
                },
            ],
            max_tokens: self.config.max_tokens,
            temperature: self.config.temperature,
        };

        let mut builder = self.http.post(&self.config.endpoint).json(&request);
        if let Some(api_key) = &self.config.api_key {
            builder = builder.bearer_auth(api_key);
        }

        debug!(endpoint = %self.config.endpoint, model = %self.config.model, "escalating category decision");
        let response = builder.send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(EscalationError::Api { status, body });
        }

        let chat_response: ChatResponse = response.json().await?;
        let content = chat_response
            .choices
            .first()
            .and_then(|choice| choice.message.content.as_deref())
            .ok_or(EscalationError::EmptyResponse)?;

        let decision = parse_decision(content)?;
        if !snapshot
            .taxonomy
            .iter()
            .any(|entry| entry.id == decision.selected_category)
        {
            warn!(
                category = %decision.selected_category,
                "decision names a category outside the taxonomy"
            );
        }
        Ok(decision)
    }
}

const SYSTEM_PROMPT: &str = "You are an intake triage assistant. Given a \
taxonomy, severity rules, routing rules, and one intake text, pick the single \
best-fitting taxonomy category. Respond with a JSON object of exactly this \
shape and nothing else: {\"selected_category\": \"...\", \"reason\": \"...\"}";

fn build_prompt(snapshot: &ProfileSnapshot, text: &str) -> Result<String, serde_json::Error> {
    let taxonomy = serde_json::to_string_pretty(&snapshot.taxonomy)?;
    let severity = serde_json::to_string_pretty(&snapshot.severity_rules)?;
    let routing = serde_json::to_string_pretty(&snapshot.routing)?;
    Ok(format!(
        "Taxonomy:\n{taxonomy}\n\nSeverity rules:\n{severity}\n\n\
         Routing rules:\n{routing}\n\nIntake text:\n{text}"
    ))
}

/// Parse the decision JSON, unwrapping a surrounding Markdown code fence
/// (```json ... ```) when present.
fn parse_decision(content: &str) -> Result<LlmDecision, EscalationError> {
    let mut text = content.trim();
    if text.starts_with("```") {
        text = text
            .split_once('\n')
            .map(|(_, rest)| rest)
            .unwrap_or(text);
        text = text.rsplit_once("```").map(|(body, _)| body).unwrap_or(text);
        text = text.trim();
    }

    let payload: DecisionPayload =
        serde_json::from_str(text).map_err(|err| EscalationError::MalformedDecision {
            message: err.to_string(),
        })?;
    Ok(LlmDecision {
        selected_category: payload.selected_category,
        reason: payload.reason,
    })
}

/// Finish an escalated triage once the decision-maker has picked a category.
///
/// Runs severity scoring and routing with the selected category and folds
/// the decision into the final record. `needs_external_decision` stays true:
/// it records how the category was decided, not whether work remains.
pub fn resolve_with_decision(
    snapshot: &ProfileSnapshot,
    text: &str,
    classification: ClassificationResult,
    decision: LlmDecision,
) -> Result<TriageDecision, EscalationError> {
    let severity = SeverityScorer::new(&snapshot.severity_rules)
        .score(text, Some(&decision.selected_category))?;
    let routing = Router::new(&snapshot.routing).route(Some(&decision.selected_category), severity.score);
    Ok(TriageDecision {
        needs_external_decision: true,
        category: Some(decision.selected_category.clone()),
        classification,
        severity: Some(severity),
        routing: Some(routing),
        llm_decision: Some(decision),
    })
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use triage_config::{RoutingConfig, SeverityRule, TaxonomyEntry};
    use triage_core::RouteStatus;

    use super::*;

    #[test]
    fn parses_a_bare_json_decision() {
        let decision = parse_decision(
            r#"{"selected_category": "billing", "reason": "mentions a payment"}"#,
        )
        .unwrap();
        assert_eq!(decision.selected_category, "billing");
        assert_eq!(decision.reason, "mentions a payment");
    }

    #[test]
    fn unwraps_a_markdown_code_fence() {
        let content = "```json\n{\"selected_category\": \"emergency\", \"reason\": \"urgent\"}\n```";
        let decision = parse_decision(content).unwrap();
        assert_eq!(decision.selected_category, "emergency");

        // Fence without a language tag.
        let content = "```\n{\"selected_category\": \"emergency\", \"reason\": \"urgent\"}\n```";
        assert!(parse_decision(content).is_ok());
    }

    #[test]
    fn rejects_non_json_content() {
        let err = parse_decision("the category is probably billing").unwrap_err();
        assert!(matches!(err, EscalationError::MalformedDecision { .. }));
    }

    #[test]
    fn prompt_embeds_rules_and_intake_text() {
        let snapshot = snapshot();
        let prompt = build_prompt(&snapshot, "strange noise in the ward").unwrap();
        assert!(prompt.contains("\"emergency\""));
        assert!(prompt.contains("General_Queue"));
        assert!(prompt.contains("strange noise in the ward"));
    }

    #[test]
    fn resolution_runs_severity_and_routing_with_the_chosen_category() {
        let snapshot = snapshot();
        let classification = ClassificationResult {
            category: None,
            confidence: 0.0,
            matched_keywords: vec![],
            needs_external_decision: true,
        };
        let decision = LlmDecision {
            selected_category: "emergency".into(),
            reason: "sounds urgent".into(),
        };
        let resolved =
            resolve_with_decision(&snapshot, "something feels wrong", classification, decision)
                .unwrap();

        assert!(resolved.needs_external_decision);
        assert_eq!(resolved.category.as_deref(), Some("emergency"));
        let severity = resolved.severity.unwrap();
        // No rule matched; the emergency sentinel escalates.
        assert_eq!(severity.level, "escalated");
        assert_eq!(severity.score, 9);
        let routing = resolved.routing.unwrap();
        assert_eq!(routing.status, RouteStatus::SeverityOverride);
        let llm = resolved.llm_decision.unwrap();
        assert_eq!(llm.selected_category, "emergency");
    }

    #[test]
    fn resolution_with_an_unknown_category_falls_back() {
        let snapshot = snapshot();
        let classification = ClassificationResult {
            category: None,
            confidence: 0.0,
            matched_keywords: vec![],
            needs_external_decision: true,
        };
        let decision = LlmDecision {
            selected_category: "gardening".into(),
            reason: "best guess".into(),
        };
        let resolved =
            resolve_with_decision(&snapshot, "my hedge is on fire", classification, decision)
                .unwrap();
        let routing = resolved.routing.unwrap();
        assert_eq!(routing.destination, "General_Queue");
        assert_eq!(routing.status, RouteStatus::UnmatchedCategoryFallback);
    }

    fn snapshot() -> ProfileSnapshot {
        ProfileSnapshot {
            name: "default".into(),
            taxonomy: vec![TaxonomyEntry {
                id: "emergency".into(),
                keywords: vec!["chest pain".into()],
            }],
            severity_rules: IndexMap::from([(
                "critical".to_string(),
                SeverityRule {
                    score: 10,
                    keywords: vec!["cardiac arrest".into()],
                },
            )]),
            routing: RoutingConfig::default(),
        }
    }
}
