//! Investigation runner - the tool-invocation loop.
//!
//! This module provides:
//! - Conversation, the append-only message history
//! - Investigator, which drives the model and the tools until a final answer

mod conversation;
mod investigator;

pub use conversation::Conversation;
pub use investigator::{DEFAULT_MAX_TOOL_ROUNDS, Investigation, Investigator, InvestigatorConfig};
