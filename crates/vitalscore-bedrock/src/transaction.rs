use serde_json::Value;
use tracing::info;
use uuid::Uuid;

use vitalscore_core::models::usage::TokenUsage;

use crate::converse::CompletionService;
use crate::error::BedrockError;
use crate::reply;

/// The result of one model call, before its output is validated.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionResult<T> {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenUsage,
    pub output: T,
}

/// Ask the model for a JSON object and parse it out of the reply.
///
/// The object is returned untyped; checking its shape is the caller's job.
pub async fn request_json<S: CompletionService>(
    service: &S,
    system_prompt: &str,
    user_message: &str,
) -> Result<TransactionResult<Value>, BedrockError> {
    let transaction_id = Uuid::new_v4();
    let model_id = service.model_id().to_string();
    info!(transaction_id = %transaction_id, model = %model_id, "requesting model prediction");

    let completion = service.complete(system_prompt, user_message).await?;
    let output = reply::extract_json_object(&completion.text)?;

    info!(
        transaction_id = %transaction_id,
        cost_usd = completion.usage.cost_usd,
        "model prediction received"
    );

    Ok(TransactionResult {
        id: transaction_id,
        model_id,
        usage: completion.usage,
        output,
    })
}
