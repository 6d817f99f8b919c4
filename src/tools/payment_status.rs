//! get_payment_status tool - look up a payment transaction by ID

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolContext, ToolOutput, required_str};

pub struct PaymentStatusTool;

#[async_trait]
impl Tool for PaymentStatusTool {
    fn name(&self) -> &'static str {
        "get_payment_status"
    }

    fn description(&self) -> &'static str {
        "Retrieves detailed information about a specific payment transaction including status, amount, customer, and error details if failed."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "payment_id": {
                    "type": "string",
                    "description": "The unique payment transaction ID (e.g., TXN_12345)"
                }
            },
            "required": ["payment_id"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput, eyre::Error> {
        let payment_id = required_str(&input, "payment_id")?;
        Ok(ToolOutput::from_lookup(&ctx.store.payment_status(payment_id)))
    }
}
