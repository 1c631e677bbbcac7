// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Destination routing with override precedence.
//!
//! Precedence, highest first: global severity override, then the first
//! declared rule matching the category, then the default destination.
//! Routing is total: every (category, score) pair resolves to exactly one
//! result, including absent and unrecognized categories.

use tracing::debug;
use triage_config::RoutingConfig;
use triage_core::{Priority, RouteStatus, RoutingResult};

/// Score at or above which a threshold-met route is marked high priority.
const HIGH_PRIORITY_SCORE: i64 = 7;

/// Routes (category, score) pairs against one profile's routing config.
pub struct Router<'a> {
    config: &'a RoutingConfig,
}

impl<'a> Router<'a> {
    pub fn new(config: &'a RoutingConfig) -> Self {
        Self { config }
    }

    /// Route a case to a destination queue.
    ///
    /// Rules are not deduplicated by category: the first declared rule for
    /// a category wins, later duplicates are never consulted.
    pub fn route(&self, category: Option<&str>, score: i64) -> RoutingResult {
        let override_rule = &self.config.severity_override;
        if score >= override_rule.min_score {
            debug!(score, min_score = override_rule.min_score, "severity override engaged");
            return RoutingResult {
                destination: override_rule.destination.clone(),
                priority: override_rule.priority,
                status: RouteStatus::SeverityOverride,
            };
        }

        if let Some(category) = category {
            for rule in &self.config.routes {
                if rule.category == category {
                    let met_threshold = score >= rule.threshold;
                    let (priority, status) = if met_threshold {
                        let priority = if score >= HIGH_PRIORITY_SCORE {
                            Priority::High
                        } else {
                            Priority::Normal
                        };
                        (priority, RouteStatus::Routed)
                    } else {
                        (Priority::Low, RouteStatus::BelowThreshold)
                    };
                    return RoutingResult {
                        destination: rule.destination.clone(),
                        priority,
                        status,
                    };
                }
            }
        }

        RoutingResult {
            destination: self.config.default_destination.clone(),
            priority: Priority::Low,
            status: RouteStatus::UnmatchedCategoryFallback,
        }
    }
}
