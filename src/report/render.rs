//! Human-readable terminal rendering of a report

use std::fmt;

use colored::*;

use super::{PaymentInvestigationReport, Priority};

fn priority_label(priority: Priority) -> ColoredString {
    match priority {
        Priority::Immediate => "IMMEDIATE".red().bold(),
        Priority::High => "HIGH".yellow(),
        Priority::Medium => "MEDIUM".normal(),
        Priority::Low => "LOW".dimmed(),
    }
}

fn label<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

/// Terminal view of a report
pub struct ReportView<'a>(pub &'a PaymentInvestigationReport);

impl fmt::Display for ReportView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        let rule = "=".repeat(80);

        writeln!(f, "{}", rule)?;
        writeln!(f, "{} {}", "PAYMENT INVESTIGATION REPORT:".bold(), report.payment_id)?;
        writeln!(f, "{}\n", rule)?;

        writeln!(f, "{} {}\n", "Summary:".bold(), report.investigation_summary)?;

        let rc = &report.root_cause;
        writeln!(f, "{}", "Root Cause Analysis".cyan().bold())?;
        writeln!(f, "  Primary Cause: {}", rc.primary_cause)?;
        writeln!(f, "  Category: {}", label(&rc.error_category))?;
        writeln!(f, "  Confidence: {}", label(&rc.confidence))?;
        if !rc.contributing_factors.is_empty() {
            writeln!(f, "  Contributing Factors:")?;
            for factor in &rc.contributing_factors {
                writeln!(f, "    - {}", factor)?;
            }
        }
        writeln!(f)?;

        let impact = &report.customer_impact;
        writeln!(f, "{}", "Customer Impact".cyan().bold())?;
        writeln!(f, "  Severity: {}", label(&impact.severity))?;
        writeln!(f, "  Immediate Action Required: {}", impact.requires_immediate_action)?;
        writeln!(f, "  Notify Customer: {}", impact.customer_notification_needed)?;
        writeln!(f, "  Est. Resolution: {}\n", impact.estimated_resolution_time)?;

        writeln!(
            f,
            "{} ({})",
            "Recommended Actions".cyan().bold(),
            report.recommended_actions.len()
        )?;
        for (i, action) in report.recommended_actions.iter().enumerate() {
            writeln!(f, "  {}. [{}] {}", i + 1, priority_label(action.priority), action.action)?;
            writeln!(f, "     Owner: {} | Time: {}", label(&action.owner), action.estimated_time)?;
        }
        writeln!(f)?;

        writeln!(f, "{}", "Additional Context".cyan().bold())?;
        writeln!(f, "  Similar Incidents (30d): ~{}", report.similar_incidents_count)?;
        let escalate = if report.should_escalate { "YES".red().bold() } else { "NO".green() };
        writeln!(f, "  Escalate: {}", escalate)?;
        if let Some(notes) = &report.additional_notes {
            writeln!(f, "  Notes: {}", notes)?;
        }
        writeln!(f, "\n{}", rule)
    }
}

pub fn render_report(report: &PaymentInvestigationReport) -> String {
    ReportView(report).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report_json;

    #[test]
    fn test_render_contains_key_fields() {
        let mut report: PaymentInvestigationReport = serde_json::from_value(sample_report_json()).unwrap();
        report.root_cause.contributing_factors = vec!["Two prior transient failures".to_string()];
        report.additional_notes = Some("Customer has long good history".to_string());

        let text = render_report(&report);

        assert!(text.contains("TXN_12345"));
        assert!(text.contains("Category: insufficient_funds"));
        assert!(text.contains("Confidence: high"));
        assert!(text.contains("    - Two prior transient failures"));
        assert!(text.contains("Owner: customer_support | Time: 1 hour"));
        assert!(text.contains("Similar Incidents (30d): ~4"));
        assert!(text.contains("Notes: Customer has long good history"));
    }

    #[test]
    fn test_render_sections_in_order() {
        colored::control::set_override(false);
        let report: PaymentInvestigationReport = serde_json::from_value(sample_report_json()).unwrap();
        let text = render_report(&report);

        let positions: Vec<usize> = [
            "PAYMENT INVESTIGATION REPORT: TXN_12345",
            "Summary:",
            "Root Cause Analysis",
            "Customer Impact",
            "Recommended Actions (1)",
            "  1. [HIGH] Email customer to update payment method",
            "Additional Context",
            "Escalate: NO",
        ]
        .iter()
        .map(|needle| text.find(needle).unwrap_or_else(|| panic!("missing {:?}", needle)))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(text.starts_with(&"=".repeat(80)));
        assert!(text.trim_end().ends_with(&"=".repeat(80)));
        assert_eq!(text, format!("{}", ReportView(&report)));
    }

    #[test]
    fn test_render_omits_empty_sections() {
        let report: PaymentInvestigationReport = serde_json::from_value(sample_report_json()).unwrap();
        let text = render_report(&report);
        assert!(!text.contains("Contributing Factors"));
        assert!(!text.contains("Notes:"));
    }
}
