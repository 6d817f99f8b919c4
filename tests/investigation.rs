//! Investigation integration tests
//!
//! Drives the tool loop end to end with a scripted mock LLM client and the
//! demo record store.

use std::sync::Arc;

use paytrace::error::{PaytraceError, Result};
use paytrace::llm::{
    CompletionResponse, ContentBlock, LlmClient, Message, MessageContent, MockLlmClient, Role, StopReason, ToolCall,
};
use paytrace::report::{Analyzer, ErrorCategory};
use paytrace::runner::{Investigator, InvestigatorConfig};
use paytrace::store::{Lookup, RecordStore};
use paytrace::tools::{SUBMIT_REPORT_TOOL, ToolExecutor};
use serde_json::{Value, json};

fn results_of(message: &Message) -> Vec<(String, Value, bool)> {
    let MessageContent::Blocks(blocks) = &message.content else {
        return Vec::new();
    };
    blocks
        .iter()
        .filter_map(|b| match b {
            ContentBlock::ToolResult {
                tool_use_id,
                content,
                is_error,
            } => Some((
                tool_use_id.clone(),
                serde_json::from_str(content).unwrap_or(Value::Null),
                *is_error,
            )),
            _ => None,
        })
        .collect()
}

/// Every tool-result turn answers exactly the calls of the turn before it
fn assert_correlated(history: &[Message]) {
    for pair in history.windows(2) {
        let calls: Vec<String> = pair[0].tool_calls().into_iter().map(|c| c.id).collect();
        if calls.is_empty() {
            continue;
        }
        assert_eq!(pair[0].role, Role::Assistant);
        assert_eq!(pair[1].role, Role::User);
        assert_eq!(pair[1].tool_result_ids(), calls);
    }
}

#[tokio::test]
async fn test_payment_failure_scenario() -> Result<()> {
    let store = RecordStore::sample();
    let mock = Arc::new(MockLlmClient::new(vec![
        CompletionResponse::tool_use(vec![ToolCall::new(
            "toolu_01",
            "get_payment_status",
            json!({"payment_id": "TXN_12345"}),
        )]),
        CompletionResponse::end_turn("Payment TXN_12345 failed because of insufficient_funds on the third attempt."),
    ]));

    let outcome = Investigator::new(mock.clone(), &store)
        .run("Why did payment TXN_12345 fail?")
        .await?;

    assert_eq!(mock.call_count(), 2);
    assert_eq!(outcome.model_calls, 2);
    assert!(outcome.answer.as_deref().unwrap_or_default().contains("insufficient_funds"));
    assert_correlated(&outcome.history);

    let results = results_of(&outcome.history[2]);
    assert_eq!(results.len(), 1);
    let (id, payload, is_error) = &results[0];
    assert_eq!(id, "toolu_01");
    assert!(!is_error);
    assert_eq!(payload["data"]["status"], "failed");
    assert_eq!(payload["data"]["error_code"], "insufficient_funds");
    assert_eq!(payload["data"]["attempts"], 3);

    // The second request replays the full history
    let second = &mock.requests()[1];
    assert_eq!(second.messages, outcome.history[..3].to_vec());
    Ok(())
}

#[tokio::test]
async fn test_unknown_payment_scenario() -> Result<()> {
    let store = RecordStore::sample();
    let mock = Arc::new(MockLlmClient::new(vec![
        CompletionResponse::tool_use(vec![ToolCall::new(
            "toolu_01",
            "get_payment_status",
            json!({"payment_id": "TXN_00000"}),
        )]),
        CompletionResponse::end_turn("I could not find payment TXN_00000."),
    ]));

    let outcome = Investigator::new(mock, &store).run("What happened to TXN_00000?").await?;

    let (_, payload, is_error) = &results_of(&outcome.history[2])[0];
    assert!(is_error);
    assert_eq!(payload["success"], false);
    assert_eq!(payload["error"], "Payment TXN_00000 not found");
    assert_eq!(outcome.answer.as_deref(), Some("I could not find payment TXN_00000."));
    Ok(())
}

#[tokio::test]
async fn test_customer_history_scenario() -> Result<()> {
    let store = RecordStore::sample();
    let mock = Arc::new(MockLlmClient::new(vec![
        CompletionResponse::tool_use(vec![ToolCall::new(
            "toolu_01",
            "get_customer_info",
            json!({"customer_id": "CUST_789"}),
        )]),
        CompletionResponse::tool_use(vec![ToolCall::new(
            "toolu_02",
            "get_payment_status",
            json!({"payment_id": "TXN_12345"}),
        )]),
        CompletionResponse::end_turn("Jane has 5 failures against 127 successes; not a concern yet."),
    ]));

    let outcome = Investigator::new(mock.clone(), &store)
        .run("Tell me about customer CUST_789")
        .await?;

    assert_eq!(outcome.model_calls, 3);
    assert_eq!(outcome.tool_rounds, 2);
    assert_eq!(outcome.history.len(), 6);
    assert_correlated(&outcome.history);

    let (_, customer, _) = &results_of(&outcome.history[2])[0];
    assert_eq!(customer["data"]["total_failed_payments"], 5);
    assert_eq!(customer["data"]["email"], "jane@example.com");
    Ok(())
}

#[tokio::test]
async fn test_mixed_batch_with_unknown_tool() -> Result<()> {
    let store = RecordStore::sample();
    let mock = Arc::new(MockLlmClient::new(vec![
        CompletionResponse::tool_use(vec![
            ToolCall::new("a", "get_payment_status", json!({"payment_id": "TXN_67890"})),
            ToolCall::new("b", "cancel_subscription", json!({"customer_id": "CUST_456"})),
            ToolCall::new("c", "get_customer_info", json!({})),
        ]),
        CompletionResponse::end_turn("Done."),
    ]));

    let outcome = Investigator::new(mock, &store).run("q").await?;
    assert_correlated(&outcome.history);

    let results = results_of(&outcome.history[2]);
    assert_eq!(results.len(), 3);
    assert!(!results[0].2);
    assert_eq!(results[0].1["data"]["status"], "succeeded");
    assert!(results[1].2);
    assert_eq!(results[1].1["error"], "Unknown tool: cancel_subscription");
    assert!(results[2].2);
    Ok(())
}

#[tokio::test]
async fn test_runaway_model_is_stopped() {
    let store = RecordStore::sample();
    let script = (0..5)
        .map(|i| {
            CompletionResponse::tool_use(vec![ToolCall::new(
                format!("toolu_{}", i),
                "get_payment_status",
                json!({"payment_id": "TXN_12345"}),
            )])
        })
        .collect();
    let mock = Arc::new(MockLlmClient::new(script));
    let config = InvestigatorConfig {
        max_tool_rounds: 4,
        ..Default::default()
    };

    let result = Investigator::with_config(mock, &store, ToolExecutor::standard(), config)
        .run("loop forever")
        .await;

    assert!(matches!(result, Err(PaytraceError::ToolRoundsExceeded { limit: 4 })));
}

#[tokio::test]
async fn test_max_tokens_stop_ends_loop() -> Result<()> {
    let store = RecordStore::sample();
    let mut truncated = CompletionResponse::end_turn("Partial answer");
    truncated.stop_reason = StopReason::MaxTokens;
    let mock = Arc::new(MockLlmClient::new(vec![truncated]));

    let outcome = Investigator::new(mock, &store).run("q").await?;
    assert_eq!(outcome.answer.as_deref(), Some("Partial answer"));
    assert_eq!(outcome.tool_rounds, 0);
    Ok(())
}

#[test]
fn test_lookups_are_total() {
    let store = RecordStore::sample();
    for id in ["", "TXN_", "txn_12345", "TXN_12345 ", "CUST_789"] {
        assert!(!store.payment_status(id).is_found(), "{:?}", id);
    }
    match store.payment_status("TXN_12345") {
        Lookup::Found(payment) => assert_eq!(payment.customer_id, "CUST_789"),
        Lookup::NotFound(e) => panic!("unexpected: {}", e),
    }
}

#[tokio::test]
async fn test_forced_tool_report() -> Result<()> {
    let input = json!({
        "payment_id": "TXN_12345",
        "investigation_summary": "Card declined for insufficient funds after transient errors.",
        "root_cause": {
            "primary_cause": "Insufficient funds",
            "error_category": "insufficient_funds",
            "confidence": "high",
            "contributing_factors": ["issuer_unavailable", "network_error"]
        },
        "customer_impact": {
            "severity": "medium",
            "requires_immediate_action": false,
            "customer_notification_needed": true,
            "estimated_resolution_time": "24 hours"
        },
        "recommended_actions": [],
        "similar_incidents_count": 0,
        "should_escalate": false,
        "additional_notes": null
    });
    let mock = MockLlmClient::new(vec![CompletionResponse::tool_use(vec![ToolCall::new(
        "toolu_r",
        SUBMIT_REPORT_TOOL,
        input,
    )])]);

    let report = Analyzer::new(&mock).analyze_with_tool("log").await?;

    assert_eq!(report.root_cause.error_category, ErrorCategory::InsufficientFunds);
    assert_eq!(report.root_cause.contributing_factors.len(), 2);
    assert_eq!(report.additional_notes, None);
    assert_eq!(mock.model(), "mock-model");
    Ok(())
}
