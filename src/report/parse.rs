//! Decoding reports from model output
//!
//! Two sources: free text that should be a JSON document (possibly wrapped in
//! a markdown code fence) and the input of a forced tool call.

use serde_json::Value;

use super::{PaymentAttempt, PaymentInvestigationReport};
use crate::error::{PaytraceError, Result};

/// Remove one surrounding markdown code fence, with or without a language tag.
/// Text that is not fenced is returned trimmed.
pub fn strip_code_fence(text: &str) -> &str {
    let trimmed = text.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(body) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop the info string ("json", "JSON5", ...) whether or not a newline follows it
    let tag_end = body
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(body.len());
    match body.chars().next() {
        Some(c) if c.is_ascii_alphabetic() => body[tag_end..].trim(),
        _ => body.trim(),
    }
}

/// Parse a report from model text. Anything that is not exactly one JSON
/// document matching the report shape is `MalformedReport`.
pub fn parse_report_text(text: &str) -> Result<PaymentInvestigationReport> {
    let body = strip_code_fence(text);
    if body.is_empty() {
        return Err(PaytraceError::MalformedReport("model returned no text".to_string()));
    }
    serde_json::from_str(body).map_err(|e| PaytraceError::MalformedReport(e.to_string()))
}

/// Decode a report from a tool call's input
pub fn parse_report_value(input: &Value) -> Result<PaymentInvestigationReport> {
    serde_json::from_value(input.clone()).map_err(|e| PaytraceError::MalformedReport(e.to_string()))
}

/// Decode and validate payment attempts from either a single object or an
/// array of them. The first bad attempt fails the whole batch.
pub fn parse_payment_attempts(input: &Value) -> Result<Vec<PaymentAttempt>> {
    let items = match input {
        Value::Array(items) => items.as_slice(),
        other => std::slice::from_ref(other),
    };

    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let attempt: PaymentAttempt = serde_json::from_value(item.clone())
                .map_err(|e| PaytraceError::ValidationFailed(format!("attempt {}: {}", i, e)))?;
            attempt
                .validate()
                .map_err(|e| PaytraceError::ValidationFailed(format!("attempt {}: {}", i, e)))?;
            Ok(attempt)
        })
        .collect()
}
