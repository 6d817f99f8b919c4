//! get_customer_info tool - look up a customer account by ID

use async_trait::async_trait;
use serde_json::Value;

use super::{Tool, ToolContext, ToolOutput, required_str};

pub struct CustomerInfoTool;

#[async_trait]
impl Tool for CustomerInfoTool {
    fn name(&self) -> &'static str {
        "get_customer_info"
    }

    fn description(&self) -> &'static str {
        "Retrieves customer information including account status, payment history, and contact details."
    }

    fn input_schema(&self) -> Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "customer_id": {
                    "type": "string",
                    "description": "The unique customer ID (e.g., CUST_789)"
                }
            },
            "required": ["customer_id"]
        })
    }

    async fn execute(&self, input: Value, ctx: &ToolContext<'_>) -> Result<ToolOutput, eyre::Error> {
        let customer_id = required_str(&input, "customer_id")?;
        Ok(ToolOutput::from_lookup(&ctx.store.customer_info(customer_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::RecordStore;

    #[tokio::test]
    async fn test_customer_found() {
        let store = RecordStore::sample();
        let ctx = ToolContext::new(&store);

        let output = CustomerInfoTool
            .execute(serde_json::json!({"customer_id": "CUST_789"}), &ctx)
            .await
            .unwrap();

        assert!(!output.is_error);
        let value: Value = serde_json::from_str(&output.content).unwrap();
        assert_eq!(value["data"]["name"], "Jane Doe");
        assert_eq!(value["data"]["total_failed_payments"], 5);
        assert_eq!(value["data"]["payment_methods"][0], "card_4242");
    }

    #[tokio::test]
    async fn test_customer_not_found() {
        let store = RecordStore::sample();
        let ctx = ToolContext::new(&store);

        let output = CustomerInfoTool
            .execute(serde_json::json!({"customer_id": "CUST_000"}), &ctx)
            .await
            .unwrap();

        assert!(output.is_error);
        assert!(output.content.contains("Customer CUST_000 not found"));
    }
}
