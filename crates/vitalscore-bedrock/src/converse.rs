//! Single-turn completions over the Bedrock Converse API.
//!
//! [`CompletionService`] is the seam between the assessment pipeline and the
//! model. [`ConverseService`] is the Bedrock implementation; tests supply
//! their own.

use std::future::Future;

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::debug;

use vitalscore_core::models::usage::TokenUsage;

use crate::error::BedrockError;
use crate::tokens;

/// A model reply and what it cost.
#[derive(Debug, Clone, PartialEq)]
pub struct Completion {
    pub text: String,
    pub usage: TokenUsage,
}

/// Something that can answer a system prompt plus one user message.
pub trait CompletionService: Send + Sync {
    /// Model identifier recorded with every prediction this service makes.
    fn model_id(&self) -> &str;

    fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> impl Future<Output = Result<Completion, BedrockError>> + Send;
}

/// Sampling parameters sent with every request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InferenceSettings {
    pub max_tokens: i32,
    pub temperature: f32,
}

impl Default for InferenceSettings {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.3,
        }
    }
}

/// [`CompletionService`] backed by a Bedrock runtime client.
#[derive(Debug, Clone)]
pub struct ConverseService {
    client: Client,
    model_id: String,
    settings: InferenceSettings,
}

impl ConverseService {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self::from_client(Client::new(config), model_id)
    }

    pub fn from_client(client: Client, model_id: impl Into<String>) -> Self {
        Self {
            client,
            model_id: model_id.into(),
            settings: InferenceSettings::default(),
        }
    }

    pub fn with_settings(mut self, settings: InferenceSettings) -> Self {
        self.settings = settings;
        self
    }
}

impl CompletionService for ConverseService {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn complete(
        &self,
        system_prompt: &str,
        user_message: &str,
    ) -> Result<Completion, BedrockError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(user_message.to_string()))
            .build()
            .map_err(|e| BedrockError::Invocation(e.to_string()))?;

        let inference = InferenceConfiguration::builder()
            .max_tokens(self.settings.max_tokens)
            .temperature(self.settings.temperature)
            .build();

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(message)
            .inference_config(inference)
            .send()
            .await
            .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

        let text = text_content(output_message.content());

        let token_count = response
            .usage()
            .map(tokens::extract_token_usage)
            .unwrap_or_default();
        let usage = tokens::calculate_cost(token_count, tokens::get_pricing(&self.model_id).as_ref());

        debug!(
            model_id = %self.model_id,
            input_tokens = usage.tokens.input,
            output_tokens = usage.tokens.output,
            "converse complete"
        );

        Ok(Completion { text, usage })
    }
}

/// Concatenate the text blocks of a reply, skipping any other block kinds.
pub fn text_content(blocks: &[ContentBlock]) -> String {
    blocks
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("")
}
