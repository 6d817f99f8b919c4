//! submit_investigation_report tool - structured output sink
//!
//! The model is forced to call this tool so its answer arrives as JSON
//! matching the report schema instead of prose.

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolContext, ToolOutput};
use crate::report::{PaymentInvestigationReport, parse_report_value, report_schema};

pub const SUBMIT_REPORT_TOOL: &str = "submit_investigation_report";

pub struct SubmitReportTool;

impl SubmitReportTool {
    /// Decode the tool input into a report
    pub fn decode(&self, input: &Value) -> crate::error::Result<PaymentInvestigationReport> {
        parse_report_value(input)
    }
}

#[async_trait]
impl Tool for SubmitReportTool {
    fn name(&self) -> &'static str {
        SUBMIT_REPORT_TOOL
    }

    fn description(&self) -> &'static str {
        "Submit a structured payment investigation report with root cause analysis and recommended actions"
    }

    fn input_schema(&self) -> Value {
        report_schema()
    }

    async fn execute(&self, input: Value, _ctx: &ToolContext<'_>) -> Result<ToolOutput, eyre::Error> {
        let report = self.decode(&input)?;
        Ok(ToolOutput::success(format!(
            "Report received for {} ({} recommended action(s))",
            report.payment_id,
            report.recommended_actions.len()
        )))
    }
}
