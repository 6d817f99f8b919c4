//! Paytrace - payment failure investigation with a tool-using model
//!
//! A question goes to the model together with a catalog of lookup tools; the
//! model asks for payment and customer records, the runner answers from a
//! local record store, and the loop ends when the model gives a final answer.

pub mod error;
pub mod llm;
pub mod prompt;
pub mod report;
pub mod runner;
pub mod store;
pub mod tools;

pub use error::{PaytraceError, Result};
