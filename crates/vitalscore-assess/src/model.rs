use tracing::info;

use vitalscore_bedrock::converse::CompletionService;
use vitalscore_bedrock::transaction;
use vitalscore_core::models::prediction::PredictionSource;
use vitalscore_scoring::validate;

use crate::classifier::{Classification, ClassificationRequest, RiskClassifier};
use crate::error::ClassifyError;
use crate::prompt;

/// Delegates classification to a language model.
///
/// The reply must pass [`validate::validate_candidate`]; anything else is an
/// error for the caller to recover from.
#[derive(Debug, Clone)]
pub struct ModelClassifier<S> {
    service: S,
}

impl<S: CompletionService> ModelClassifier<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }
}

impl<S: CompletionService> RiskClassifier for ModelClassifier<S> {
    async fn classify(
        &self,
        request: &ClassificationRequest<'_>,
    ) -> Result<Classification, ClassifyError> {
        let user_message = prompt::user_prompt(request.answers, request.scores);
        let result =
            transaction::request_json(&self.service, prompt::SYSTEM_PROMPT, &user_message).await?;
        let prediction = validate::validate_candidate(&result.output)?;

        info!(
            transaction_id = %result.id,
            risk_level = %prediction.risk_level,
            risk_percentage = prediction.risk_percentage,
            "model classification accepted"
        );

        Ok(Classification {
            prediction,
            source: PredictionSource::Model {
                model_id: result.model_id,
                transaction_id: result.id,
                usage: result.usage,
            },
            fallback_reason: None,
        })
    }
}
