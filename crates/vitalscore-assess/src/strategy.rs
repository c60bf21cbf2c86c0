use vitalscore_bedrock::converse::CompletionService;

use crate::classifier::{
    Classification, ClassificationRequest, HeuristicClassifier, RiskClassifier,
    SafeDefaultClassifier,
};
use crate::config::{AssessConfig, FallbackPolicy};
use crate::error::ClassifyError;
use crate::fallback::WithFallback;
use crate::model::ModelClassifier;

/// The classifier a deployment runs, chosen once from configuration.
#[derive(Debug, Clone)]
pub enum Strategy<S> {
    /// No model configured.
    Heuristic(HeuristicClassifier),
    ModelOrSafeDefault(WithFallback<ModelClassifier<S>, SafeDefaultClassifier>),
    ModelOrHeuristic(WithFallback<ModelClassifier<S>, HeuristicClassifier>),
}

impl<S: CompletionService> Strategy<S> {
    /// `service` is `None` when no model is configured.
    pub fn from_config(config: &AssessConfig, service: Option<S>) -> Self {
        let Some(service) = service else {
            return Strategy::Heuristic(HeuristicClassifier);
        };
        let model = ModelClassifier::new(service);
        match config.fallback {
            FallbackPolicy::SafeDefault => Strategy::ModelOrSafeDefault(WithFallback::new(
                model,
                SafeDefaultClassifier,
                config.model_timeout,
            )),
            FallbackPolicy::Heuristic => Strategy::ModelOrHeuristic(WithFallback::new(
                model,
                HeuristicClassifier,
                config.model_timeout,
            )),
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Strategy::Heuristic(_) => "heuristic",
            Strategy::ModelOrSafeDefault(_) => "model, safe default fallback",
            Strategy::ModelOrHeuristic(_) => "model, heuristic fallback",
        }
    }
}

impl<S: CompletionService> RiskClassifier for Strategy<S> {
    async fn classify(
        &self,
        request: &ClassificationRequest<'_>,
    ) -> Result<Classification, ClassifyError> {
        match self {
            Strategy::Heuristic(c) => c.classify(request).await,
            Strategy::ModelOrSafeDefault(c) => c.classify(request).await,
            Strategy::ModelOrHeuristic(c) => c.classify(request).await,
        }
    }
}
