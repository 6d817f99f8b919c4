//! Investigator - the tool-invocation loop
//!
//! Sends the conversation with the tool catalog, runs every requested tool
//! against the record store, feeds the results back, and repeats until the
//! model stops asking for tools.

use std::sync::Arc;

use log::{debug, info, warn};

use super::Conversation;
use crate::error::{PaytraceError, Result};
use crate::llm::{CompletionRequest, CompletionResponse, LlmClient, Message, ToolDefinition, Usage};
use crate::store::RecordStore;
use crate::tools::{ToolContext, ToolExecutor};

pub const DEFAULT_MAX_TOOL_ROUNDS: u32 = 25;
pub const DEFAULT_MAX_TOKENS: u32 = 4096;

/// Configuration for the Investigator.
#[derive(Debug, Clone)]
pub struct InvestigatorConfig {
    /// Maximum tokens for each model response
    pub max_tokens: u32,
    /// Tool rounds allowed before giving up on a final answer
    pub max_tool_rounds: u32,
}

impl Default for InvestigatorConfig {
    fn default() -> Self {
        Self {
            max_tokens: DEFAULT_MAX_TOKENS,
            max_tool_rounds: DEFAULT_MAX_TOOL_ROUNDS,
        }
    }
}

/// Outcome of one investigation
#[derive(Debug, Clone)]
pub struct Investigation {
    /// First text block of the final response, if any
    pub answer: Option<String>,
    /// Full history, including the final assistant turn
    pub history: Vec<Message>,
    pub model_calls: u32,
    pub tool_rounds: u32,
    pub usage: Usage,
}

pub struct Investigator<'a, L: LlmClient> {
    llm: Arc<L>,
    store: &'a RecordStore,
    executor: ToolExecutor,
    config: InvestigatorConfig,
}

impl<'a, L: LlmClient> Investigator<'a, L> {
    /// Investigator with the standard lookup tools
    pub fn new(llm: Arc<L>, store: &'a RecordStore) -> Self {
        Self::with_config(llm, store, ToolExecutor::standard(), InvestigatorConfig::default())
    }

    pub fn with_config(llm: Arc<L>, store: &'a RecordStore, executor: ToolExecutor, config: InvestigatorConfig) -> Self {
        Self {
            llm,
            store,
            executor,
            config,
        }
    }

    /// Run the loop for one query
    pub async fn run(&self, query: &str) -> Result<Investigation> {
        info!("Starting investigation: {}", query);

        let tools = self.executor.definitions();
        let ctx = ToolContext::new(self.store);
        let mut conversation = Conversation::new(query);
        let mut usage = Usage::default();
        let mut model_calls = 0u32;
        let mut tool_rounds = 0u32;

        let mut response = self.send(&conversation, &tools).await?;
        model_calls += 1;
        usage.add(&response.usage);

        while response.stop_reason.needs_continuation() {
            let calls = response.tool_calls();
            if calls.is_empty() {
                warn!("Model stopped for tool_use without requesting any tool");
                break;
            }
            if tool_rounds >= self.config.max_tool_rounds {
                warn!("Giving up after {} tool rounds", tool_rounds);
                return Err(PaytraceError::ToolRoundsExceeded {
                    limit: self.config.max_tool_rounds,
                });
            }
            tool_rounds += 1;

            conversation.push_assistant(response.content);
            let results = self.executor.execute_all(&calls, &ctx).await;
            for result in results.iter().filter(|r| r.is_error) {
                debug!("Tool {} returned error: {}", result.tool_use_id, result.content);
            }
            conversation.push_tool_results(results)?;

            response = self.send(&conversation, &tools).await?;
            model_calls += 1;
            usage.add(&response.usage);
        }

        let answer = response.first_text().map(str::to_string);
        if !response.content.is_empty() {
            conversation.push_assistant(response.content);
        }

        info!(
            "Investigation finished: {} model call(s), {} tool round(s), {} tokens",
            model_calls,
            tool_rounds,
            usage.total()
        );

        Ok(Investigation {
            answer,
            history: conversation.into_messages(),
            model_calls,
            tool_rounds,
            usage,
        })
    }

    async fn send(&self, conversation: &Conversation, tools: &[ToolDefinition]) -> Result<CompletionResponse> {
        let request = CompletionRequest::new(conversation.messages().to_vec())
            .with_tools(tools.to_vec())
            .with_max_tokens(self.config.max_tokens);

        debug!("Sending {} message(s) to {}", conversation.len(), self.llm.model());
        Ok(self.llm.complete(request).await?)
    }
}
