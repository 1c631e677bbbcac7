// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Text normalization for keyword matching.
//!
//! Both the classifier and the severity scorer match configured keywords as
//! substrings of normalized text, so the same canonical form must be applied
//! to requests and keywords alike.

/// Canonicalize free text for keyword matching.
///
/// Lower-cases the input, replaces every character outside
/// `{a-z, 0-9, whitespace}` with a single space, and trims leading and
/// trailing whitespace. Total over all inputs: empty in, empty out.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let replaced: String = lowered
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    replaced.trim().to_string()
}
