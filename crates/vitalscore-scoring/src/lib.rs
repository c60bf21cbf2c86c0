//! vitalscore-scoring
//!
//! Questionnaire scoring. Pure computation with no AWS dependency.
//! Converts raw answers into BMI, the 0–10 category display scores, the
//! coarse 0–2 risk sub-scores, and validates risk predictions.

pub mod bmi;
pub mod categories;
pub mod heuristic;
pub mod units;
pub mod validate;

use tracing::debug;
use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::scores::DerivedScores;

/// Trait implemented by each questionnaire section scorer.
pub trait Category: Send + Sync {
    /// Unique identifier for this category (e.g., "eating_habits").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "Eating Habits").
    fn name(&self) -> &str;

    /// Display score on the 0–10 scale, or `None` for sections that are
    /// not scored numerically.
    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64>;

    /// Item-by-item answer lines for this section, without a heading.
    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String>;

    /// Format this section's answers as structured text for a model prompt.
    fn to_structured_input(&self, answers: &QuestionnaireAnswers) -> String {
        let mut output = format!("### {}\n", self.name());
        for line in self.answer_lines(answers) {
            output.push_str(&format!("- {line}\n"));
        }
        if let Some(score) = self.score(answers) {
            output.push_str(&format!("- Section score (0-10, higher is healthier): {score:.1}\n"));
        }
        output.push('\n');
        output
    }
}

/// Return all questionnaire categories in form order.
pub fn all_categories() -> Vec<Box<dyn Category>> {
    vec![
        Box::new(categories::eating::EatingHabitsCategory),
        Box::new(categories::activity::PhysicalActivityCategory),
        Box::new(categories::sedentary::SedentaryBehaviorCategory),
        Box::new(categories::mental::MentalHealthCategory),
        Box::new(categories::sleep::SleepQualityCategory),
        Box::new(categories::family::FamilyHistoryCategory),
    ]
}

/// Compute every derived score for a questionnaire.
///
/// Does not check that the answers are complete or that the BMI is
/// plausible; callers that persist results validate first.
pub fn score_answers(answers: &QuestionnaireAnswers) -> DerivedScores {
    let demographics = &answers.demographics;
    let bmi = bmi::compute_bmi(demographics.height, demographics.weight);

    let scores = DerivedScores {
        bmi,
        bmi_category: bmi::classify_bmi(bmi),
        eating_habits_score: categories::eating::score(&answers.eating_habits),
        physical_activity_score: categories::activity::score(&answers.physical_activity),
        sedentary_score: categories::sedentary::score(&answers.sedentary_behavior),
        mental_health_score: categories::mental::score(&answers.mental_health),
        sleep_score: categories::sleep::score(&answers.sleep_quality),
        family_history: categories::family::flags(&demographics.family_history),
        risk_subscores: heuristic::risk_subscores(answers, bmi),
    };

    debug!(
        bmi = scores.bmi,
        eating = scores.eating_habits_score,
        activity = scores.physical_activity_score,
        sedentary = scores.sedentary_score,
        mental = scores.mental_health_score,
        sleep = scores.sleep_score,
        risk_total = scores.risk_subscores.total(),
        "derived scores computed"
    );

    scores
}

/// Round to one decimal place.
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Clamp to the 0–10 display scale and round to one decimal place.
pub(crate) fn display_score(raw: f64) -> f64 {
    if raw.is_nan() {
        return 0.0;
    }
    round1(raw.clamp(0.0, 10.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_ids_are_unique() {
        let categories = all_categories();
        let mut ids: Vec<_> = categories.iter().map(|c| c.id().to_string()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), categories.len());
    }

    #[test]
    fn only_family_history_is_unscored() {
        let answers = QuestionnaireAnswers::default();
        let unscored: Vec<_> = all_categories()
            .into_iter()
            .filter(|c| c.score(&answers).is_none())
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(unscored, vec!["family_history".to_string()]);
    }

    #[test]
    fn structured_input_has_heading_and_score() {
        let answers = QuestionnaireAnswers::default();
        let text = categories::eating::EatingHabitsCategory.to_structured_input(&answers);
        assert!(text.starts_with("### Eating Habits\n"));
        assert!(text.contains("- Vegetables: Never (0)"));
        assert!(text.contains("Section score (0-10, higher is healthier): 5.0"));
    }

    #[test]
    fn display_score_clamps_and_rounds() {
        assert_eq!(display_score(-3.0), 0.0);
        assert_eq!(display_score(12.5), 10.0);
        assert_eq!(display_score(4.26), 4.3);
        assert_eq!(display_score(f64::NAN), 0.0);
    }
}
