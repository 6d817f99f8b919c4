//! Error types for paytrace
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

use crate::llm::LlmError;

/// All error types that can occur in paytrace
#[derive(Debug, Error)]
pub enum PaytraceError {
    /// Remote model call failed
    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    /// Tool execution error
    #[error("Tool error: {0}")]
    Tool(String),

    /// A tool-result turn did not line up with the outstanding tool requests
    #[error("Correlation mismatch: {0}")]
    Correlation(String),

    /// The model kept requesting tools past the configured limit
    #[error("Exceeded {limit} tool rounds without a final answer")]
    ToolRoundsExceeded { limit: u32 },

    /// The model's structured output could not be decoded into a report
    #[error("Malformed report: {0}")]
    MalformedReport(String),

    /// Record failed a schema constraint
    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for paytrace operations
pub type Result<T> = std::result::Result<T, PaytraceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error() {
        let err = PaytraceError::Tool("timeout".to_string());
        assert_eq!(err.to_string(), "Tool error: timeout");
    }

    #[test]
    fn test_tool_rounds_exceeded() {
        let err = PaytraceError::ToolRoundsExceeded { limit: 3 };
        assert_eq!(err.to_string(), "Exceeded 3 tool rounds without a final answer");
    }

    #[test]
    fn test_malformed_report_error() {
        let err = PaytraceError::MalformedReport("expected value at line 1".to_string());
        assert_eq!(err.to_string(), "Malformed report: expected value at line 1");
    }

    #[test]
    fn test_llm_error_conversion() {
        let err: PaytraceError = LlmError::InvalidResponse("no content".to_string()).into();
        assert!(matches!(err, PaytraceError::Llm(_)));
        assert!(err.to_string().contains("no content"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PaytraceError = io_err.into();
        assert!(matches!(err, PaytraceError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("invalid").unwrap_err();
        let err: PaytraceError = json_err.into();
        assert!(matches!(err, PaytraceError::Json(_)));
    }
}
