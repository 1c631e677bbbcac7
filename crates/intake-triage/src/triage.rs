// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `intake-triage triage` command implementation.
//!
//! Runs the pipeline locally and prints the decision as JSON. With
//! `--escalate`, a low-confidence case is carried through the second
//! phase: the configured decision-maker picks a category, then severity
//! and routing run with it.

use tracing::info;
use triage_config::{ConfigStore, ProfileLocator, TriageConfig};
use triage_engine::{TriageOutcome, TriagePipeline};
use triage_escalation::{resolve_with_decision, EscalationClient};

pub async fn run_triage(
    config: TriageConfig,
    text: &str,
    escalate: bool,
) -> anyhow::Result<()> {
    let store = ConfigStore::new(ProfileLocator::from_selection(&config.profile));
    let pipeline = TriagePipeline::new(store.load());

    let decision = match pipeline.triage(text)? {
        TriageOutcome::Deferred(classification) if escalate => {
            info!(
                confidence = classification.confidence,
                "low confidence, escalating to external decision-maker"
            );
            let client = EscalationClient::new(config.escalation.clone())?;
            let llm_decision = client.decide_category(pipeline.snapshot(), text).await?;
            resolve_with_decision(pipeline.snapshot(), text, classification, llm_decision)?
        }
        outcome => outcome.into_decision(),
    };

    println!("{}", serde_json::to_string_pretty(&decision)?);
    Ok(())
}
