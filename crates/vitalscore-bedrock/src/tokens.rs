use vitalscore_core::models::usage::{ModelPricing, TokenCount, TokenUsage};

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens.max(0) as u64,
        output: usage.output_tokens.max(0) as u64,
    }
}

/// Calculate the cost for a token count, or zero when pricing is unknown.
pub fn calculate_cost(tokens: TokenCount, pricing: Option<&ModelPricing>) -> TokenUsage {
    TokenUsage {
        tokens,
        cost_usd: pricing.map_or(0.0, |p| p.estimate_cost(tokens)),
    }
}

/// Known model pricing (per million tokens).
/// These are approximate and should be updated as pricing changes.
pub fn get_pricing(model_id: &str) -> Option<ModelPricing> {
    match model_id {
        id if id.contains("claude-opus-4") => Some(ModelPricing {
            input_per_million: 15.0,
            output_per_million: 75.0,
        }),
        id if id.contains("claude-sonnet-4") => Some(ModelPricing {
            input_per_million: 3.0,
            output_per_million: 15.0,
        }),
        id if id.contains("claude-haiku") => Some(ModelPricing {
            input_per_million: 0.80,
            output_per_million: 4.0,
        }),
        id if id.contains("nova-lite") => Some(ModelPricing {
            input_per_million: 0.06,
            output_per_million: 0.24,
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pricing_matches_inference_profiles() {
        let sonnet = get_pricing("us.anthropic.claude-sonnet-4-20250514-v1:0").unwrap();
        assert_eq!(sonnet.input_per_million, 3.0);
        assert!(get_pricing("meta.llama3-70b-instruct-v1:0").is_none());
    }

    #[test]
    fn unknown_pricing_costs_nothing() {
        let tokens = TokenCount {
            input: 1200,
            output: 300,
        };
        let usage = calculate_cost(tokens, None);
        assert_eq!(usage.tokens.total(), 1500);
        assert_eq!(usage.cost_usd, 0.0);
    }

    #[test]
    fn sdk_counts_are_converted() {
        let usage = aws_sdk_bedrockruntime::types::TokenUsage::builder()
            .input_tokens(1000)
            .output_tokens(250)
            .total_tokens(1250)
            .build()
            .unwrap();
        let tokens = extract_token_usage(&usage);
        assert_eq!(tokens, TokenCount { input: 1000, output: 250 });
        let cost = calculate_cost(tokens, get_pricing("claude-haiku").as_ref());
        assert!((cost.cost_usd - 0.0018).abs() < 1e-9);
    }
}
