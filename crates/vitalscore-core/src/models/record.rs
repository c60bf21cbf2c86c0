use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::prediction::{AiPrediction, PredictionSource};
use super::questionnaire::QuestionnaireAnswers;
use super::scores::DerivedScores;

/// The persisted unit of output: raw answers, derived scores and prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AssessmentRecord {
    pub id: Uuid,
    pub answers: QuestionnaireAnswers,
    pub scores: DerivedScores,
    pub prediction: AiPrediction,
    pub prediction_source: PredictionSource,
    /// Why the preferred strategy was not used, when it was not.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<String>,
    pub completed_at: jiff::Timestamp,
}
