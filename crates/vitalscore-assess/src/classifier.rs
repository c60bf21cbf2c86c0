//! The risk classifier seam and the two local strategies.

use std::future::Future;

use vitalscore_core::models::prediction::{AiPrediction, PredictionSource};
use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::scores::DerivedScores;
use vitalscore_scoring::{heuristic, validate};

use crate::error::ClassifyError;

/// Everything a classifier may look at.
#[derive(Debug, Clone, Copy)]
pub struct ClassificationRequest<'a> {
    pub answers: &'a QuestionnaireAnswers,
    pub scores: &'a DerivedScores,
}

/// A prediction together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Classification {
    pub prediction: AiPrediction,
    pub source: PredictionSource,
    /// Set when a preferred strategy failed and this one stood in for it.
    pub fallback_reason: Option<String>,
}

/// A strategy for turning scored answers into a risk prediction.
pub trait RiskClassifier: Send + Sync {
    fn classify(
        &self,
        request: &ClassificationRequest<'_>,
    ) -> impl Future<Output = Result<Classification, ClassifyError>> + Send;
}

/// The local 0–12 lifestyle heuristic. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicClassifier;

impl HeuristicClassifier {
    pub fn classification(scores: &DerivedScores) -> Classification {
        Classification {
            prediction: heuristic::predict(scores),
            source: PredictionSource::Heuristic {
                total_score: scores.risk_subscores.total(),
            },
            fallback_reason: None,
        }
    }
}

impl RiskClassifier for HeuristicClassifier {
    async fn classify(
        &self,
        request: &ClassificationRequest<'_>,
    ) -> Result<Classification, ClassifyError> {
        Ok(Self::classification(request.scores))
    }
}

/// The fixed Medium/50 prediction. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct SafeDefaultClassifier;

impl SafeDefaultClassifier {
    pub fn classification() -> Classification {
        Classification {
            prediction: validate::fallback_prediction(),
            source: PredictionSource::SafeDefault,
            fallback_reason: None,
        }
    }
}

impl RiskClassifier for SafeDefaultClassifier {
    async fn classify(
        &self,
        _request: &ClassificationRequest<'_>,
    ) -> Result<Classification, ClassifyError> {
        Ok(Self::classification())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalscore_core::models::prediction::RiskLevel;
    use vitalscore_scoring::score_answers;

    #[tokio::test]
    async fn heuristic_reports_its_total() {
        let answers = QuestionnaireAnswers::default();
        let scores = score_answers(&answers);
        let request = ClassificationRequest {
            answers: &answers,
            scores: &scores,
        };
        let classification = HeuristicClassifier.classify(&request).await.unwrap();
        assert_eq!(
            classification.source,
            PredictionSource::Heuristic {
                total_score: scores.risk_subscores.total()
            }
        );
        assert!(classification.fallback_reason.is_none());
    }

    #[tokio::test]
    async fn safe_default_is_medium_fifty() {
        let answers = QuestionnaireAnswers::default();
        let scores = score_answers(&answers);
        let request = ClassificationRequest {
            answers: &answers,
            scores: &scores,
        };
        let classification = SafeDefaultClassifier.classify(&request).await.unwrap();
        assert_eq!(classification.prediction.risk_level, RiskLevel::Medium);
        assert_eq!(classification.prediction.risk_percentage, 50);
        assert_eq!(classification.source, PredictionSource::SafeDefault);
    }
}
