//! Prompt System - graded analysis prompts and report extraction prompts
//!
//! Prompts are plain Rust strings built with `format!`; nothing is loaded
//! from disk.

pub mod analysis;
mod variants;

pub use variants::{PromptSpec, PromptVersion};

/// Gateway log for a payment that failed on its third attempt
pub const SAMPLE_LOG: &str = "
2024-02-14 10:23:45 [ERROR] Payment ID: TXN_12345
Status: FAILED
Amount: $150.00
Currency: USD
Payment Method: Credit Card ending in 4242
Gateway Response: INSUFFICIENT_FUNDS
Customer ID: CUST_789
Attempt: 3/3
Previous attempts:
  - 10:20:12: CARD_DECLINED (issuer_unavailable)
  - 10:21:34: TIMEOUT (network_error)
";

/// `SAMPLE_LOG` plus the customer's history, used for report extraction
pub const DETAILED_SAMPLE_LOG: &str = "
2024-02-14 10:23:45 [ERROR] Payment ID: TXN_12345
Status: FAILED
Amount: $150.00
Currency: USD
Payment Method: Credit Card ending in 4242
Gateway Response: INSUFFICIENT_FUNDS
Customer ID: CUST_789
Customer Email: jane@example.com
Attempt: 3/3
Previous attempts:
  - 10:20:12: CARD_DECLINED (issuer_unavailable)
  - 10:21:34: TIMEOUT (network_error)
  - 10:23:45: INSUFFICIENT_FUNDS (final attempt)

Customer History:
- Total successful payments: 127
- Total failed payments: 5
- Account status: Active
- Last successful payment: 2024-02-10 (3 days ago)
";

/// Opening question of the first tool-use demo
pub const DEMO_PAYMENT_QUERY: &str = "Why did payment TXN_12345 fail? Is this a pattern for this customer?";

/// Opening question of the second tool-use demo
pub const DEMO_CUSTOMER_QUERY: &str = "Tell me about customer CUST_789's payment history and whether I should be concerned about their recent failures.";
