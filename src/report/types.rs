//! Investigation report types
//!
//! Closed sets (categories, severities, owners) are enums so a report that
//! decodes is already well-formed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PaytraceError, Result};
use crate::store::PaymentStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    CustomerError,
    TechnicalError,
    Fraud,
    InsufficientFunds,
    CardIssue,
    GatewayIssue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Immediate,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Owner {
    CustomerSupport,
    Engineering,
    FraudTeam,
    AutomatedSystem,
}

/// Root cause analysis of a payment failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RootCause {
    pub primary_cause: String,
    pub error_category: ErrorCategory,
    pub confidence: Confidence,
    #[serde(default)]
    pub contributing_factors: Vec<String>,
}

/// Impact assessment on the customer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerImpact {
    pub severity: Severity,
    pub requires_immediate_action: bool,
    pub customer_notification_needed: bool,
    /// Free-form duration, e.g. "24 hours"
    pub estimated_resolution_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedAction {
    pub action: String,
    pub priority: Priority,
    pub owner: Owner,
    pub estimated_time: String,
}

/// Complete structured investigation report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInvestigationReport {
    pub payment_id: String,
    /// 2-3 sentence summary of findings
    pub investigation_summary: String,
    pub root_cause: RootCause,
    pub customer_impact: CustomerImpact,
    pub recommended_actions: Vec<RecommendedAction>,
    /// Estimated similar failures in the last 30 days
    pub similar_incidents_count: u32,
    pub should_escalate: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptErrorCategory {
    Network,
    Card,
    Fraud,
    Limits,
    Other,
}

/// One gateway attempt for a payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentAttempt {
    /// 1-based
    pub attempt_number: u32,
    pub timestamp: DateTime<Utc>,
    pub amount: f64,
    pub currency: String,
    pub gateway: String,
    pub payment_method: String,
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_category: Option<AttemptErrorCategory>,
    pub response_time_ms: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_ip: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl PaymentAttempt {
    /// Check the constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.attempt_number < 1 {
            return Err(PaytraceError::ValidationFailed("attempt_number must be >= 1".to_string()));
        }
        if self.amount.is_nan() || self.amount <= 0.0 {
            return Err(PaytraceError::ValidationFailed(format!(
                "amount must be > 0, got {}",
                self.amount
            )));
        }
        if self.currency.chars().count() != 3 {
            return Err(PaytraceError::ValidationFailed(format!(
                "currency must be a 3-letter ISO code, got '{}'",
                self.currency
            )));
        }
        Ok(())
    }
}
