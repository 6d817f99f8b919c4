//! Payment and customer record types.
//!
//! Records are immutable once a `RecordStore` is built. A payment's
//! `customer_id` points at a customer record but nothing enforces it.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle state of a payment as reported by the gateway.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Succeeded,
    Failed,
    Cancelled,
}

/// A single payment transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    /// Transaction ID, e.g. "TXN_12345"
    pub id: String,

    pub status: PaymentStatus,

    /// Amount in major currency units
    pub amount: f64,

    /// ISO 4217 code
    pub currency: String,

    pub customer_id: String,

    /// Payment method reference, e.g. "card_4242"
    pub payment_method: String,

    /// Gateway that processed the payment (stripe, adyen, ...)
    pub gateway: String,

    /// Gateway error code for failed payments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,

    /// Number of attempts made so far
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attempts: Option<u32>,

    pub created_at: DateTime<Utc>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempt: Option<DateTime<Utc>>,
}

/// A customer account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerRecord {
    /// Customer ID, e.g. "CUST_789"
    pub id: String,
    pub name: String,
    pub email: String,
    pub account_status: String,
    pub payment_methods: Vec<String>,
    pub total_failed_payments: u32,
    pub total_successful_payments: u32,
}

fn utc(year: i32, month: u32, day: u32, hour: u32, min: u32, sec: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, sec)
        .single()
        .unwrap_or_default()
}

/// Demo payments: one failed for insufficient funds, one succeeded.
pub fn sample_payments() -> Vec<PaymentRecord> {
    vec![
        PaymentRecord {
            id: "TXN_12345".to_string(),
            status: PaymentStatus::Failed,
            amount: 150.00,
            currency: "USD".to_string(),
            customer_id: "CUST_789".to_string(),
            payment_method: "card_4242".to_string(),
            gateway: "stripe".to_string(),
            error_code: Some("insufficient_funds".to_string()),
            attempts: Some(3),
            created_at: utc(2024, 2, 14, 10, 20, 0),
            last_attempt: Some(utc(2024, 2, 14, 10, 23, 45)),
        },
        PaymentRecord {
            id: "TXN_67890".to_string(),
            status: PaymentStatus::Succeeded,
            amount: 299.99,
            currency: "USD".to_string(),
            customer_id: "CUST_456".to_string(),
            payment_method: "card_5555".to_string(),
            gateway: "stripe".to_string(),
            error_code: None,
            attempts: None,
            created_at: utc(2024, 2, 14, 9, 15, 0),
            last_attempt: None,
        },
    ]
}

/// Demo customers matching `sample_payments`.
pub fn sample_customers() -> Vec<CustomerRecord> {
    vec![
        CustomerRecord {
            id: "CUST_789".to_string(),
            name: "Jane Doe".to_string(),
            email: "jane@example.com".to_string(),
            account_status: "active".to_string(),
            payment_methods: vec!["card_4242".to_string()],
            total_failed_payments: 5,
            total_successful_payments: 127,
        },
        CustomerRecord {
            id: "CUST_456".to_string(),
            name: "John Smith".to_string(),
            email: "john@example.com".to_string(),
            account_status: "active".to_string(),
            payment_methods: vec!["card_5555".to_string()],
            total_failed_payments: 0,
            total_successful_payments: 89,
        },
    ]
}
