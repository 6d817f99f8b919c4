//! Append-only conversation history
//!
//! Every tool-result turn must answer exactly the tool requests of the
//! assistant turn before it, in the same order.

use crate::error::{PaytraceError, Result};
use crate::llm::{ContentBlock, Message, Role, ToolResult};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    /// Start a conversation with the user's query
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            messages: vec![Message::user(query)],
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn into_messages(self) -> Vec<Message> {
        self.messages
    }

    /// Append the model's turn verbatim
    pub fn push_assistant(&mut self, blocks: Vec<ContentBlock>) {
        self.messages.push(Message::assistant_blocks(blocks));
    }

    /// Append a tool-result turn, checking it against the outstanding requests
    pub fn push_tool_results(&mut self, results: Vec<ToolResult>) -> Result<()> {
        let last = self
            .messages
            .last()
            .filter(|m| m.role == Role::Assistant)
            .ok_or_else(|| PaytraceError::Correlation("no assistant turn to answer".to_string()))?;

        let requested: Vec<String> = last.tool_calls().into_iter().map(|c| c.id).collect();
        let answered: Vec<&str> = results.iter().map(|r| r.tool_use_id.as_str()).collect();

        if requested.is_empty() {
            return Err(PaytraceError::Correlation(
                "assistant turn requested no tools".to_string(),
            ));
        }
        if requested != answered {
            return Err(PaytraceError::Correlation(format!(
                "expected results for [{}], got [{}]",
                requested.join(", "),
                answered.join(", ")
            )));
        }

        self.messages.push(Message::tool_results(results));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm::ToolCall;
    use serde_json::json;

    fn tool_use(id: &str) -> ContentBlock {
        ContentBlock::ToolUse {
            id: id.to_string(),
            name: "get_payment_status".to_string(),
            input: json!({"payment_id": "TXN_12345"}),
        }
    }

    #[test]
    fn test_new_starts_with_user_turn() {
        let conv = Conversation::new("Why did it fail?");
        assert_eq!(conv.len(), 1);
        assert_eq!(conv.messages()[0], Message::user("Why did it fail?"));
    }

    #[test]
    fn test_matching_results_appended() {
        let mut conv = Conversation::new("q");
        conv.push_assistant(vec![ContentBlock::text("Looking"), tool_use("a"), tool_use("b")]);

        conv.push_tool_results(vec![ToolResult::success("a", "{}"), ToolResult::error("b", "{}")])
            .unwrap();

        assert_eq!(conv.len(), 3);
        assert_eq!(conv.messages()[2].tool_result_ids(), vec!["a", "b"]);
    }

    #[test]
    fn test_missing_result_rejected() {
        let mut conv = Conversation::new("q");
        conv.push_assistant(vec![tool_use("a"), tool_use("b")]);

        let err = conv.push_tool_results(vec![ToolResult::success("a", "{}")]).unwrap_err();
        assert!(matches!(err, PaytraceError::Correlation(_)));
        assert_eq!(conv.len(), 2);
    }

    #[test]
    fn test_reordered_results_rejected() {
        let mut conv = Conversation::new("q");
        conv.push_assistant(vec![tool_use("a"), tool_use("b")]);

        let result = conv.push_tool_results(vec![ToolResult::success("b", "{}"), ToolResult::success("a", "{}")]);
        assert!(result.is_err());
    }

    #[test]
    fn test_results_without_assistant_turn_rejected() {
        let mut conv = Conversation::new("q");
        let err = conv.push_tool_results(vec![ToolResult::success("a", "{}")]).unwrap_err();
        assert!(err.to_string().contains("no assistant turn"));
    }

    #[test]
    fn test_results_for_text_only_turn_rejected() {
        let mut conv = Conversation::new("q");
        conv.push_assistant(vec![ContentBlock::text("done")]);
        assert!(conv.push_tool_results(vec![]).is_err());
    }

    #[test]
    fn test_calls_survive_in_history() {
        let mut conv = Conversation::new("q");
        conv.push_assistant(vec![tool_use("x")]);
        let calls = conv.messages()[1].tool_calls();
        assert_eq!(calls, vec![ToolCall::new("x", "get_payment_status", json!({"payment_id": "TXN_12345"}))]);
    }
}
