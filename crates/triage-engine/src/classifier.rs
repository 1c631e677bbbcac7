// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword taxonomy classification.
//!
//! Maps normalized intake text to a category by counting configured keyword
//! substring matches. No LLM pre-call, no network, no latency: the external
//! decision-maker only enters the picture when the confidence signal
//! computed here falls below the threshold.

use triage_config::TaxonomyEntry;
use triage_core::text::normalize;
use triage_core::{ClassificationResult, TriageError};

/// Confidence below which the category decision is handed to the external
/// decision-maker. Exact and fixed: at 0.5 the decision stays local.
pub const CONFIDENCE_THRESHOLD: f64 = 0.5;

/// Classifies intake text against one profile's taxonomy.
pub struct Classifier<'a> {
    taxonomy: &'a [TaxonomyEntry],
}

impl<'a> Classifier<'a> {
    pub fn new(taxonomy: &'a [TaxonomyEntry]) -> Self {
        Self { taxonomy }
    }

    /// Classify intake text.
    ///
    /// Scores one point per configured keyword whose normalized form is a
    /// substring of the normalized text. The winner is the category with
    /// the strictly highest score; ties resolve to the first category
    /// reaching the maximum in taxonomy declaration order. Confidence is
    /// the winner's share of all matches, rounded to two decimals.
    pub fn classify(&self, text: &str) -> Result<ClassificationResult, TriageError> {
        if text.trim().is_empty() {
            return Err(TriageError::invalid_input(
                "'text' must be a non-empty string",
            ));
        }

        let normalized = normalize(text);

        // Per-entry match counts and the keywords (as configured) that hit.
        let mut scores: Vec<usize> = vec![0; self.taxonomy.len()];
        let mut matched: Vec<Vec<String>> = vec![Vec::new(); self.taxonomy.len()];

        for (idx, entry) in self.taxonomy.iter().enumerate() {
            for keyword in &entry.keywords {
                let keyword_norm = normalize(keyword);
                if !keyword_norm.is_empty() && normalized.contains(&keyword_norm) {
                    scores[idx] += 1;
                    matched[idx].push(keyword.clone());
                }
            }
        }

        let total: usize = scores.iter().sum();
        if total == 0 {
            return Ok(ClassificationResult {
                category: None,
                confidence: 0.0,
                matched_keywords: Vec::new(),
                needs_external_decision: true,
            });
        }

        // Stable max: strictly-greater comparison keeps the first category
        // reaching the maximum in declaration order.
        let mut winner = 0;
        for (idx, score) in scores.iter().enumerate() {
            if *score > scores[winner] {
                winner = idx;
            }
        }

        let confidence = round2(scores[winner] as f64 / total as f64);
        Ok(ClassificationResult {
            category: Some(self.taxonomy[winner].id.clone()),
            confidence,
            matched_keywords: std::mem::take(&mut matched[winner]),
            needs_external_decision: confidence < CONFIDENCE_THRESHOLD,
        })
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
