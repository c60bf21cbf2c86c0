use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::record::AssessmentRecord;
use vitalscore_scoring::validate;
use vitalscore_storage::records;

use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_assessments(
    State(state): State<AppState>,
) -> Result<Json<Vec<AssessmentRecord>>, ApiError> {
    let records = records::list_records(&state.s3, &state.bucket).await?;
    Ok(Json(records))
}

pub async fn get_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    let record = records::load_record(&state.s3, &state.bucket, id).await?;
    Ok(Json(record))
}

/// Run a full assessment and store the resulting record.
pub async fn create_assessment(
    State(state): State<AppState>,
    Json(answers): Json<QuestionnaireAnswers>,
) -> Result<(StatusCode, Json<AssessmentRecord>), ApiError> {
    let record = state.assessor.assess(answers).await?;
    records::save_record(&state.s3, &state.bucket, &record).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// Replace a stored record wholesale. The id in the path wins, and the
/// edited prediction must pass the same checks as a model reply.
pub async fn update_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(mut record): Json<AssessmentRecord>,
) -> Result<Json<AssessmentRecord>, ApiError> {
    validate::check(&record.prediction)?;
    if !records::record_exists(&state.s3, &state.bucket, id).await? {
        return Err(ApiError::NotFound(format!("assessment not found: {id}")));
    }
    record.id = id;
    records::save_record(&state.s3, &state.bucket, &record).await?;
    Ok(Json(record))
}

pub async fn delete_assessment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    records::delete_record(&state.s3, &state.bucket, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
