// SPDX-FileCopyrightText: 2026 Intake Triage Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! JSON result envelopes for the tool boundary.
//!
//! Success flattens the payload's fields alongside `"ok": true`. Failure is
//! `{"ok": false, "error": {"code", "message", "details"}}`; code 422 marks
//! invalid input, other codes are reserved. Errors never raise past the
//! tool boundary, they are always serialized into the envelope.

use serde::Serialize;
use serde_json::{json, Value};
use triage_core::TriageError;

pub fn from_result<T: Serialize>(result: Result<T, TriageError>) -> String {
    match result {
        Ok(payload) => success(&payload),
        Err(err) => failure(&err),
    }
}

pub fn success<T: Serialize>(payload: &T) -> String {
    match serde_json::to_value(payload) {
        Ok(Value::Object(mut fields)) => {
            fields.insert("ok".to_string(), Value::Bool(true));
            Value::Object(fields).to_string()
        }
        // Non-object payloads are nested instead of flattened.
        Ok(other) => json!({ "ok": true, "result": other }).to_string(),
        Err(err) => failure(&TriageError::Internal(err.to_string())),
    }
}

pub fn failure(err: &TriageError) -> String {
    json!({
        "ok": false,
        "error": {
            "code": err.code(),
            "message": err.to_string(),
            "details": Value::Null,
        }
    })
    .to_string()
}
