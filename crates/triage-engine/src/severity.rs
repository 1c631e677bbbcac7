// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordered severity rule matching.
//!
//! Levels are scanned in a fixed priority order -- `critical`, `high`,
//! `medium`, `low` (those present in the rule set), then any remaining
//! declared levels in declaration order. The first level with a matching
//! keyword wins, not the highest declared score: clinical/operational
//! severity vocabulary is prioritized over numeric magnitude, so a
//! `critical` rule with a low declared score still outranks an unmatched
//! high-score rule.

use triage_config::SeverityRules;
use triage_core::text::normalize;
use triage_core::{SeverityResult, TriageError};

/// Fixed level scan order applied before any remaining declared levels.
const PRIORITY_ORDER: [&str; 4] = ["critical", "high", "medium", "low"];

/// Category sentinel that escalates unmatched text.
const EMERGENCY_CATEGORY: &str = "emergency";

/// Score/level returned when no rule matched but the category is the
/// emergency sentinel.
const ESCALATED_SCORE: i64 = 9;

/// Score/level returned when nothing matched at all.
const DEFAULT_SCORE: i64 = 2;

/// Scores intake text against one profile's severity rules.
pub struct SeverityScorer<'a> {
    rules: &'a SeverityRules,
}

impl<'a> SeverityScorer<'a> {
    pub fn new(rules: &'a SeverityRules) -> Self {
        Self { rules }
    }

    /// Score intake text, optionally in the context of a classified category.
    ///
    /// Scanning order is the tie-break: the first matching level wins. When
    /// no rule matches, the `"emergency"` category escalates to a fixed
    /// score of 9; everything else defaults to score 2, level `"low"`.
    pub fn score(
        &self,
        text: &str,
        category: Option<&str>,
    ) -> Result<SeverityResult, TriageError> {
        if text.trim().is_empty() {
            return Err(TriageError::invalid_input(
                "'text' must be a non-empty string",
            ));
        }

        let normalized = normalize(text);

        for level in self.ordered_levels() {
            let rule = &self.rules[level];
            for keyword in &rule.keywords {
                let keyword_norm = normalize(keyword);
                if !keyword_norm.is_empty() && normalized.contains(&keyword_norm) {
                    return Ok(SeverityResult {
                        score: rule.score,
                        level: level.to_string(),
                        reason: format!("Matched keyword: '{keyword}'"),
                    });
                }
            }
        }

        if category == Some(EMERGENCY_CATEGORY) {
            return Ok(SeverityResult {
                score: ESCALATED_SCORE,
                level: "escalated".to_string(),
                reason: "Emergency category escalation".to_string(),
            });
        }

        Ok(SeverityResult {
            score: DEFAULT_SCORE,
            level: "low".to_string(),
            reason: "No severity indicators found".to_string(),
        })
    }

    /// Levels in scan order: the priority prefix (those present), then the
    /// remaining declared levels in declaration order.
    fn ordered_levels(&self) -> Vec<&str> {
        let mut levels: Vec<&str> = PRIORITY_ORDER
            .iter()
            .copied()
            .filter(|level| self.rules.contains_key(*level))
            .collect();
        levels.extend(
            self.rules
                .keys()
                .map(String::as_str)
                .filter(|level| !PRIORITY_ORDER.contains(level)),
        );
        levels
    }
}
