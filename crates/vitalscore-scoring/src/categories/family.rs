use vitalscore_core::models::questionnaire::{FamilyHistory, HistoryAnswer, QuestionnaireAnswers};
use vitalscore_core::models::scores::FamilyHistoryFlags;

use crate::Category;

/// Family history is not scored; each "yes" becomes a risk flag.
pub fn flags(history: &FamilyHistory) -> FamilyHistoryFlags {
    FamilyHistoryFlags {
        obesity: history.obesity.is_yes(),
        diabetes: history.diabetes.is_yes(),
        hypertension: history.hypertension.is_yes(),
        thyroid: history.thyroid.is_yes(),
    }
}

pub struct FamilyHistoryCategory;

impl Category for FamilyHistoryCategory {
    fn id(&self) -> &str {
        "family_history"
    }

    fn name(&self) -> &str {
        "Family History"
    }

    fn score(&self, _answers: &QuestionnaireAnswers) -> Option<f64> {
        None
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let h = &answers.demographics.family_history;
        [
            ("Obesity", h.obesity),
            ("Diabetes", h.diabetes),
            ("Hypertension", h.hypertension),
            ("Thyroid disorders", h.thyroid),
        ]
        .into_iter()
        .map(|(name, answer)| {
            let answer = match answer {
                HistoryAnswer::Yes => "yes",
                HistoryAnswer::No => "no",
                HistoryAnswer::Unknown => "unknown",
            };
            format!("{name}: {answer}")
        })
        .collect()
    }
}
