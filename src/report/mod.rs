//! Structured investigation reports
//!
//! Typed report model, its JSON schema, decoding from model output, the
//! extraction strategies and terminal rendering.

mod analyzer;
mod parse;
mod render;
mod schema;
mod types;

pub use analyzer::Analyzer;
pub use parse::{parse_payment_attempts, parse_report_text, parse_report_value, strip_code_fence};
pub use render::render_report;
pub use schema::{payment_attempt_schema, report_schema};
pub use types::{
    AttemptErrorCategory, Confidence, CustomerImpact, ErrorCategory, Owner, PaymentAttempt, PaymentInvestigationReport,
    Priority, RecommendedAction, RootCause, Severity,
};
