use axum::Json;
use serde::Serialize;

use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_scoring::all_categories;

#[derive(Serialize)]
pub struct CategorySummary {
    id: String,
    name: String,
    scored: bool,
}

/// Questionnaire sections in form order.
pub async fn list_categories() -> Json<Vec<CategorySummary>> {
    let empty = QuestionnaireAnswers::default();
    let categories = all_categories()
        .iter()
        .map(|c| CategorySummary {
            id: c.id().to_string(),
            name: c.name().to_string(),
            scored: c.score(&empty).is_some(),
        })
        .collect();
    Json(categories)
}
