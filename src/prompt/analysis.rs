//! Prompts for report extraction

/// Free-form report request
pub fn unstructured(log: &str) -> String {
    format!(
        "Analyze this payment failure and provide a detailed investigation report:\n\n{}",
        log
    )
}

/// Ask for the report as a bare JSON document
pub fn json_report(log: &str) -> String {
    format!(
        "Analyze this payment failure and provide a structured investigation report.

Payment Log:
{}

Return your analysis as a structured JSON object following this exact schema:
- payment_id: string
- investigation_summary: string (2-3 sentences)
- root_cause: object with primary_cause, error_category, confidence, contributing_factors
- customer_impact: object with severity, requires_immediate_action, customer_notification_needed, estimated_resolution_time
- recommended_actions: array of objects with action, priority, owner, estimated_time
- similar_incidents_count: integer estimate
- should_escalate: boolean
- additional_notes: string or null

Error category must be one of: customer_error, technical_error, fraud, insufficient_funds, card_issue, gateway_issue
Confidence must be: high, medium, or low
Severity must be: low, medium, high, or critical
Priority must be: immediate, high, medium, or low
Owner must be: customer_support, engineering, fraud_team, or automated_system

Respond ONLY with the JSON object, no other text.",
        log
    )
}

/// Ask the model to submit the report through the given tool
pub fn tool_report(log: &str, tool_name: &str) -> String {
    format!(
        "Analyze this payment failure and submit a complete investigation report using the {} tool.

Be thorough in your analysis:
- Identify the root cause and contributing factors
- Assess customer impact and urgency
- Provide specific, actionable recommendations
- Estimate similar incident frequency

Payment Log:
{}",
        tool_name, log
    )
}
