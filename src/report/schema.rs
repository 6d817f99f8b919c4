//! JSON schemas for the report types
//!
//! Kept in step with `types.rs` by hand; the tests decode a document built
//! from each schema's required fields.

use serde_json::{Value, json};

fn string_enum(values: &[&str], description: &str) -> Value {
    json!({ "type": "string", "enum": values, "description": description })
}

/// Input schema for the `submit_investigation_report` tool
pub fn report_schema() -> Value {
    json!({
        "type": "object",
        "title": "PaymentInvestigationReport",
        "description": "Complete structured investigation report",
        "properties": {
            "payment_id": { "type": "string" },
            "investigation_summary": {
                "type": "string",
                "description": "2-3 sentence summary of findings"
            },
            "root_cause": {
                "type": "object",
                "description": "Root cause analysis of a payment failure",
                "properties": {
                    "primary_cause": {
                        "type": "string",
                        "description": "The main reason the payment failed"
                    },
                    "error_category": string_enum(
                        &["customer_error", "technical_error", "fraud", "insufficient_funds", "card_issue", "gateway_issue"],
                        "Failure category"
                    ),
                    "confidence": string_enum(&["high", "medium", "low"], "How confident we are in this analysis"),
                    "contributing_factors": {
                        "type": "array",
                        "items": { "type": "string" },
                        "description": "Other factors that may have contributed"
                    }
                },
                "required": ["primary_cause", "error_category", "confidence"]
            },
            "customer_impact": {
                "type": "object",
                "description": "Impact assessment on the customer",
                "properties": {
                    "severity": string_enum(&["low", "medium", "high", "critical"], "Impact severity"),
                    "requires_immediate_action": { "type": "boolean" },
                    "customer_notification_needed": { "type": "boolean" },
                    "estimated_resolution_time": {
                        "type": "string",
                        "description": "e.g., '5 minutes', '24 hours', '3-5 days'"
                    }
                },
                "required": [
                    "severity",
                    "requires_immediate_action",
                    "customer_notification_needed",
                    "estimated_resolution_time"
                ]
            },
            "recommended_actions": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "action": { "type": "string" },
                        "priority": string_enum(&["immediate", "high", "medium", "low"], "Action priority"),
                        "owner": string_enum(
                            &["customer_support", "engineering", "fraud_team", "automated_system"],
                            "Team responsible"
                        ),
                        "estimated_time": { "type": "string" }
                    },
                    "required": ["action", "priority", "owner", "estimated_time"]
                }
            },
            "similar_incidents_count": {
                "type": "integer",
                "minimum": 0,
                "description": "Estimated number of similar failures in last 30 days"
            },
            "should_escalate": { "type": "boolean" },
            "additional_notes": { "type": ["string", "null"] }
        },
        "required": [
            "payment_id",
            "investigation_summary",
            "root_cause",
            "customer_impact",
            "recommended_actions",
            "similar_incidents_count",
            "should_escalate"
        ]
    })
}

/// Schema for a single gateway attempt
pub fn payment_attempt_schema() -> Value {
    json!({
        "type": "object",
        "title": "PaymentAttempt",
        "description": "A single payment attempt with full details",
        "properties": {
            "attempt_number": {
                "type": "integer",
                "minimum": 1,
                "description": "Which attempt this was (1, 2, 3...)"
            },
            "timestamp": { "type": "string", "format": "date-time" },
            "amount": {
                "type": "number",
                "exclusiveMinimum": 0,
                "description": "Payment amount in dollars"
            },
            "currency": {
                "type": "string",
                "minLength": 3,
                "maxLength": 3,
                "description": "ISO currency code"
            },
            "gateway": {
                "type": "string",
                "description": "Payment gateway used (stripe, adyen, etc)"
            },
            "payment_method": {
                "type": "string",
                "description": "Last 4 digits or method ID"
            },
            "status": string_enum(&["pending", "succeeded", "failed", "cancelled"], "Attempt outcome"),
            "error_code": { "type": ["string", "null"] },
            "error_message": { "type": ["string", "null"] },
            "error_category": {
                "type": ["string", "null"],
                "enum": ["network", "card", "fraud", "limits", "other", null]
            },
            "response_time_ms": {
                "type": "integer",
                "minimum": 0,
                "description": "Time taken for gateway response"
            },
            "customer_ip": { "type": ["string", "null"] },
            "user_agent": { "type": ["string", "null"] }
        },
        "required": [
            "attempt_number",
            "timestamp",
            "amount",
            "currency",
            "gateway",
            "payment_method",
            "status",
            "response_time_ms"
        ],
        "examples": [{
            "attempt_number": 1,
            "timestamp": "2024-02-14T10:20:12Z",
            "amount": 150.00,
            "currency": "USD",
            "gateway": "stripe",
            "payment_method": "card_4242",
            "status": "failed",
            "error_code": "card_declined",
            "error_message": "Insufficient funds",
            "error_category": "card",
            "response_time_ms": 1247
        }]
    })
}
