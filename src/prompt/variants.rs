//! Graded prompt variants for analysing a raw payment failure log
//!
//! Each version adds one technique on top of the previous one: structure,
//! explicit criteria, a system persona with a worked example, and finally
//! few-shot examples.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::llm::CompletionRequest;

/// A rendered prompt ready to send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub system: Option<String>,
    pub user: String,
    pub max_tokens: u32,
}

impl PromptSpec {
    pub fn into_request(self) -> CompletionRequest {
        let request = CompletionRequest::default()
            .with_user_message(self.user)
            .with_max_tokens(self.max_tokens);
        match self.system {
            Some(system) => request.with_system(system),
            None => request,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PromptVersion {
    Basic,
    Structured,
    Detailed,
    WithContext,
    FewShot,
}

impl PromptVersion {
    pub const ALL: [PromptVersion; 5] = [
        PromptVersion::Basic,
        PromptVersion::Structured,
        PromptVersion::Detailed,
        PromptVersion::WithContext,
        PromptVersion::FewShot,
    ];

    /// Short label used in demo output, e.g. "v4: With Context"
    pub fn label(&self) -> &'static str {
        match self {
            PromptVersion::Basic => "v1: Basic",
            PromptVersion::Structured => "v2: Structured",
            PromptVersion::Detailed => "v3: Detailed",
            PromptVersion::WithContext => "v4: With Context",
            PromptVersion::FewShot => "v5: Few-Shot",
        }
    }

    pub fn build(&self, log: &str) -> PromptSpec {
        match self {
            PromptVersion::Basic => PromptSpec {
                system: None,
                user: format!("Analyze this payment failure:\n\n{}", log),
                max_tokens: 1024,
            },
            PromptVersion::Structured => PromptSpec {
                system: None,
                user: format!(
                    "Analyze this payment failure log and provide:\n\
                     1. What happened\n\
                     2. Why it failed\n\
                     3. What to do next\n\n\
                     Log:\n{}",
                    log
                ),
                max_tokens: 1024,
            },
            PromptVersion::Detailed => PromptSpec {
                system: None,
                user: format!("{}{}\n\nProvide your analysis:", DETAILED_PREAMBLE, log),
                max_tokens: 1024,
            },
            PromptVersion::WithContext => PromptSpec {
                system: Some(INVESTIGATOR_PERSONA.to_string()),
                user: format!("{}{}", WITH_CONTEXT_PREAMBLE, log),
                max_tokens: 1500,
            },
            PromptVersion::FewShot => PromptSpec {
                system: Some(
                    "You are a payment systems expert. Analyze payment failures and provide structured investigation reports."
                        .to_string(),
                ),
                user: format!("{}{}\n\nProvide your analysis in the same format:", FEW_SHOT_PREAMBLE, log),
                max_tokens: 1500,
            },
        }
    }
}

impl fmt::Display for PromptVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PromptVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1" | "v1" | "basic" => Ok(Self::Basic),
            "2" | "v2" | "structured" => Ok(Self::Structured),
            "3" | "v3" | "detailed" => Ok(Self::Detailed),
            "4" | "v4" | "with-context" | "context" => Ok(Self::WithContext),
            "5" | "v5" | "few-shot" | "fewshot" => Ok(Self::FewShot),
            other => Err(format!("unknown prompt version '{}' (expected v1..v5)", other)),
        }
    }
}

const DETAILED_PREAMBLE: &str = "You are a payment systems expert analyzing transaction failures.

Analyze the following payment failure log and provide a structured investigation report.

Your analysis should include:
1. **Root Cause**: What was the primary reason for failure?
2. **Contributing Factors**: What else may have played a role?
3. **Customer Impact**: How does this affect the customer?
4. **Recommended Actions**: Specific next steps, prioritized
5. **Prevention**: How to prevent similar failures

Guidelines:
- Be concise but thorough
- Cite specific evidence from the logs
- If something is unclear, state what additional information you'd need
- Consider both technical and business perspectives

Payment Failure Log:
";

const INVESTIGATOR_PERSONA: &str = "You are an expert payment systems investigator with 10+ years of experience.

Your expertise includes:
- Payment gateway integrations (Stripe, Adyen, Braintree)
- Common failure patterns and their root causes
- Customer communication best practices
- Fraud detection and prevention

When analyzing payment failures:
1. Look for patterns across multiple attempts
2. Consider both technical and business factors
3. Prioritize customer experience in your recommendations
4. Be specific about next steps";

const WITH_CONTEXT_PREAMBLE: &str = "Analyze this payment failure and provide a detailed investigation report.

Here's an example of the format I expect:

Example Input:
2024-02-10 14:30:00 [ERROR] Payment TXN_999
Status: FAILED
Gateway Response: CARD_EXPIRED

Example Output:
**Root Cause**: Card expiration
**Contributing Factors**: No automated retry with updated card details
**Customer Impact**: HIGH - Failed purchase, likely frustration
**Recommended Actions**:
1. Send automated email requesting card update
2. Retry payment in 24h if card updated
3. Flag account for follow-up if no response in 3 days
**Prevention**: Implement pre-expiration reminders 30 days before card expiry

Now analyze this actual failure:

";

const FEW_SHOT_PREAMBLE: &str = "I'll show you examples of how to analyze payment failures, then you'll analyze a new one.

Example 1:
Input Log:
2024-01-15 09:00:00 [ERROR] Payment TXN_111
Gateway Response: INVALID_CVV
Attempts: 1/3

Analysis:
**Root Cause**: Incorrect CVV code entered by customer
**Severity**: LOW - User error, easily recoverable
**Next Steps**: Prompt customer to re-enter CVV, no further investigation needed
**Pattern**: Isolated incident, not a systemic issue

Example 2:
Input Log:
2024-01-20 15:45:00 [ERROR] Payment TXN_222
Gateway Response: GATEWAY_TIMEOUT
Attempts: 3/3 (all timeouts)
Duration: Each attempt took >30s

Analysis:
**Root Cause**: Payment gateway experiencing latency issues
**Severity**: HIGH - Affects multiple customers likely
**Next Steps**:
1. Check gateway status page
2. Contact gateway support
3. Consider failover to backup gateway
4. Monitor error rates across all transactions
**Pattern**: Multiple consecutive timeouts suggest infrastructure issue

Now analyze this payment failure:

";
