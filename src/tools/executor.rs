//! Tool executor - manages tool registration and execution

use log::{debug, warn};
use serde_json::json;

use super::{CustomerInfoTool, PaymentStatusTool, Tool, ToolContext};
use crate::error::{PaytraceError, Result};
use crate::llm::{ToolCall, ToolDefinition, ToolResult};

/// Fixed catalog of tools offered to the model, in declaration order
pub struct ToolExecutor {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolExecutor {
    /// Executor with the record lookup tools
    pub fn standard() -> Self {
        let mut executor = Self::new();
        executor.add_tool(Box::new(PaymentStatusTool));
        executor.add_tool(Box::new(CustomerInfoTool));
        executor
    }

    /// Create an empty executor (for custom tool sets)
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Add a tool, replacing any tool already registered under the same name
    pub fn add_tool(&mut self, tool: Box<dyn Tool>) {
        match self.tools.iter().position(|t| t.name() == tool.name()) {
            Some(idx) => self.tools[idx] = tool,
            None => self.tools.push(tool),
        }
    }

    fn find(&self, name: &str) -> Option<&dyn Tool> {
        self.tools.iter().find(|t| t.name() == name).map(|t| t.as_ref())
    }

    /// Get tool definitions for LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition()).collect()
    }

    /// Execute a tool call. Never fails: every problem becomes an error result
    /// carrying the call's id.
    pub async fn execute(&self, call: &ToolCall, ctx: &ToolContext<'_>) -> ToolResult {
        debug!("Executing {} ({}) with input {}", call.name, call.id, call.input);

        let Some(tool) = self.find(&call.name) else {
            warn!("Model requested unknown tool: {}", call.name);
            return error_result(&call.id, format!("Unknown tool: {}", call.name));
        };

        if let Err(e) = validate_tool_input(call, &tool.definition()) {
            return error_result(&call.id, e.to_string());
        }

        match tool.execute(call.input.clone(), ctx).await {
            Ok(output) => ToolResult {
                tool_use_id: call.id.clone(),
                content: output.content,
                is_error: output.is_error,
            },
            Err(e) => error_result(&call.id, format!("Tool error: {}", e)),
        }
    }

    /// Execute tool calls sequentially, one result per call in the same order
    pub async fn execute_all(&self, tool_calls: &[ToolCall], ctx: &ToolContext<'_>) -> Vec<ToolResult> {
        let mut results = Vec::with_capacity(tool_calls.len());

        for call in tool_calls {
            results.push(self.execute(call, ctx).await);
        }

        results
    }
}

impl Default for ToolExecutor {
    fn default() -> Self {
        Self::standard()
    }
}

fn error_result(tool_use_id: &str, error: String) -> ToolResult {
    ToolResult::error(tool_use_id, json!({ "success": false, "error": error }).to_string())
}

/// Check that all fields the schema marks as required are present
pub fn validate_tool_input(call: &ToolCall, definition: &ToolDefinition) -> Result<()> {
    if let Some(required) = definition.input_schema.get("required").and_then(|r| r.as_array()) {
        for req in required {
            if let Some(field_name) = req.as_str()
                && call.input.get(field_name).is_none()
            {
                return Err(PaytraceError::Tool(format!(
                    "Tool '{}' missing required field: {}",
                    call.name, field_name
                )));
            }
        }
    }

    Ok(())
}
