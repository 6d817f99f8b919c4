//! Tool system for payment investigations
//!
//! Tools give the model read access to the record store. Each investigation
//! hands the executor a `ToolContext` borrowing the store it runs against.

mod customer_info;
mod executor;
mod payment_status;
mod submit_report;

pub use customer_info::CustomerInfoTool;
pub use executor::{ToolExecutor, validate_tool_input};
pub use payment_status::PaymentStatusTool;
pub use submit_report::{SUBMIT_REPORT_TOOL, SubmitReportTool};

use async_trait::async_trait;
use serde_json::Value;

use crate::llm::ToolDefinition;
use crate::store::{Lookup, RecordStore};

/// A tool that can be called by the LLM
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (matches LLM tool_use name)
    fn name(&self) -> &'static str;

    /// Human-readable description
    fn description(&self) -> &'static str;

    /// JSON Schema for input parameters
    fn input_schema(&self) -> Value;

    /// Declaration sent to the model
    fn definition(&self) -> ToolDefinition {
        ToolDefinition::new(self.name(), self.description(), self.input_schema())
    }

    /// Execute the tool
    async fn execute(&self, input: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput, eyre::Error>;
}

/// Data a tool runs against
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub store: &'a RecordStore,
}

impl<'a> ToolContext<'a> {
    pub fn new(store: &'a RecordStore) -> Self {
        Self { store }
    }
}

/// Output of a tool execution, before it is tagged with a correlation id
#[derive(Debug, Clone, PartialEq)]
pub struct ToolOutput {
    pub content: String,
    pub is_error: bool,
}

impl ToolOutput {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }

    /// Serialize a lookup; a missing record becomes an error output
    pub fn from_lookup<T: serde::Serialize>(lookup: &Lookup<T>) -> Self {
        Self {
            content: lookup.to_value().to_string(),
            is_error: !lookup.is_found(),
        }
    }
}

/// Pull a required string argument out of a tool input
pub(crate) fn required_str<'v>(input: &'v Value, field: &str) -> Result<&'v str, eyre::Error> {
    input[field]
        .as_str()
        .ok_or_else(|| eyre::eyre!("{} is required and must be a string", field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_tool_output_success() {
        let output = ToolOutput::success("Operation completed");
        assert_eq!(output.content, "Operation completed");
        assert!(!output.is_error);
    }

    #[test]
    fn test_tool_output_error() {
        let output = ToolOutput::error("Something went wrong");
        assert!(output.is_error);
    }

    #[test]
    fn test_tool_output_from_lookup() {
        let store = RecordStore::sample();

        let found = ToolOutput::from_lookup(&store.payment_status("TXN_67890"));
        assert!(!found.is_error);
        let value: Value = serde_json::from_str(&found.content).unwrap();
        assert_eq!(value["data"]["status"], "succeeded");

        let missing = ToolOutput::from_lookup(&store.payment_status("TXN_00000"));
        assert!(missing.is_error);
        assert!(missing.content.contains("Payment TXN_00000 not found"));
    }

    #[test]
    fn test_required_str() {
        let input = json!({"payment_id": "TXN_1", "n": 3});
        assert_eq!(required_str(&input, "payment_id").unwrap(), "TXN_1");
        assert!(required_str(&input, "n").is_err());
        assert!(required_str(&input, "missing").is_err());
    }

    #[test]
    fn test_default_definition() {
        let def = PaymentStatusTool.definition();
        assert_eq!(def.name, "get_payment_status");
        assert_eq!(def.input_schema["required"][0], "payment_id");
    }
}
