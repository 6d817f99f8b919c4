//! Report extraction strategies
//!
//! Three ways of getting an analysis out of the model, from least to most
//! reliable: free text, JSON requested in the prompt, and a forced tool call.

use log::{info, warn};

use super::{PaymentInvestigationReport, parse_report_text};
use crate::error::{PaytraceError, Result};
use crate::llm::{CompletionRequest, LlmClient, ToolChoice};
use crate::prompt::{PromptVersion, analysis};
use crate::tools::{SUBMIT_REPORT_TOOL, SubmitReportTool, Tool};

const UNSTRUCTURED_MAX_TOKENS: u32 = 2048;
const STRUCTURED_MAX_TOKENS: u32 = 4096;

pub struct Analyzer<'a, L: LlmClient> {
    llm: &'a L,
}

impl<'a, L: LlmClient> Analyzer<'a, L> {
    pub fn new(llm: &'a L) -> Self {
        Self { llm }
    }

    /// Free-form analysis; `None` when the model produced no text block
    pub async fn analyze_unstructured(&self, log: &str) -> Result<Option<String>> {
        let request = CompletionRequest::default()
            .with_user_message(analysis::unstructured(log))
            .with_max_tokens(UNSTRUCTURED_MAX_TOKENS);

        let response = self.llm.complete(request).await?;
        Ok(response.first_text().map(str::to_string))
    }

    /// Run one graded prompt variant; `None` when the model produced no text
    pub async fn run_prompt(&self, version: PromptVersion, log: &str) -> Result<Option<String>> {
        info!("Running prompt {}", version);
        let response = self.llm.complete(version.build(log).into_request()).await?;
        Ok(response.first_text().map(str::to_string))
    }

    /// Ask for bare JSON and decode it. Malformed output fails this call only.
    pub async fn analyze_with_prompt_json(&self, log: &str) -> Result<PaymentInvestigationReport> {
        let request = CompletionRequest::default()
            .with_user_message(analysis::json_report(log))
            .with_max_tokens(STRUCTURED_MAX_TOKENS);

        let response = self.llm.complete(request).await?;
        let text = response
            .first_text()
            .ok_or_else(|| PaytraceError::MalformedReport("model returned no text".to_string()))?;

        parse_report_text(text).inspect_err(|e| warn!("Could not decode JSON report: {}", e))
    }

    /// Force a `submit_investigation_report` call and decode its input
    pub async fn analyze_with_tool(&self, log: &str) -> Result<PaymentInvestigationReport> {
        let tool = SubmitReportTool;
        let request = CompletionRequest::default()
            .with_user_message(analysis::tool_report(log, SUBMIT_REPORT_TOOL))
            .with_tools(vec![tool.definition()])
            .with_tool_choice(ToolChoice::tool(SUBMIT_REPORT_TOOL))
            .with_max_tokens(STRUCTURED_MAX_TOKENS);

        let response = self.llm.complete(request).await?;
        let call = response
            .tool_calls()
            .into_iter()
            .find(|c| c.name == SUBMIT_REPORT_TOOL)
            .ok_or_else(|| {
                PaytraceError::MalformedReport(format!("model did not call {}", SUBMIT_REPORT_TOOL))
            })?;

        info!("Decoding report from tool call {}", call.id);
        tool.decode(&call.input)
    }
}
