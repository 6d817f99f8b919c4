//! In-memory record tables for payments and customers.
//!
//! A `RecordStore` is built once at startup and then only read. Lookups are
//! total: any string is a valid key, absent keys produce `Lookup::NotFound`.

mod records;

use std::collections::HashMap;

use log::info;
use serde::Serialize;
use serde_json::{Value, json};

pub use records::{CustomerRecord, PaymentRecord, PaymentStatus, sample_customers, sample_payments};

/// Outcome of a table lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<T> {
    Found(T),
    NotFound(String),
}

impl<T> Lookup<T> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }
}

impl<T: Serialize> Lookup<T> {
    /// Wire form handed to the model: `{"success": true, "data": ..}` or
    /// `{"success": false, "error": ..}`
    pub fn to_value(&self) -> Value {
        match self {
            Lookup::Found(record) => json!({ "success": true, "data": record }),
            Lookup::NotFound(error) => json!({ "success": false, "error": error }),
        }
    }
}

/// Payment and customer tables keyed by record ID.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    payments: HashMap<String, PaymentRecord>,
    customers: HashMap<String, CustomerRecord>,
}

impl RecordStore {
    /// Build a store from record lists. Later duplicates replace earlier ones.
    pub fn new(payments: Vec<PaymentRecord>, customers: Vec<CustomerRecord>) -> Self {
        Self {
            payments: payments.into_iter().map(|p| (p.id.clone(), p)).collect(),
            customers: customers.into_iter().map(|c| (c.id.clone(), c)).collect(),
        }
    }

    /// Store preloaded with the demo dataset
    pub fn sample() -> Self {
        Self::new(sample_payments(), sample_customers())
    }

    pub fn payment_status(&self, payment_id: &str) -> Lookup<PaymentRecord> {
        info!("[TOOL CALLED] get_payment_status({})", payment_id);
        match self.payments.get(payment_id) {
            Some(record) => Lookup::Found(record.clone()),
            None => Lookup::NotFound(format!("Payment {} not found", payment_id)),
        }
    }

    pub fn customer_info(&self, customer_id: &str) -> Lookup<CustomerRecord> {
        info!("[TOOL CALLED] get_customer_info({})", customer_id);
        match self.customers.get(customer_id) {
            Some(record) => Lookup::Found(record.clone()),
            None => Lookup::NotFound(format!("Customer {} not found", customer_id)),
        }
    }
}
