use axum::Json;
use axum::extract::State;

use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::scores::DerivedScores;

use crate::error::ApiError;
use crate::state::AppState;

/// Score a questionnaire for preview. Nothing is classified or stored.
pub async fn preview_scores(
    State(state): State<AppState>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Result<Json<DerivedScores>, ApiError> {
    let scores = state.assessor.score_only(&answers)?;
    Ok(Json(scores))
}
