use vitalscore_core::models::questionnaire::{EatingHabits, QuestionnaireAnswers};

use super::{item_line, FREQUENCY};
use crate::{display_score, Category};

/// Eating-habits score, 0–10. Healthy food groups add, snacks, sugary
/// beverages and sweets subtract, around a neutral 5.
pub fn score(eating: &EatingHabits) -> f64 {
    let healthy = 1.2 * eating.cereals
        + 1.5 * eating.pulses
        + 2.0 * eating.vegetables
        + 1.8 * eating.fruits
        + 1.3 * eating.milk
        + 1.0 * eating.non_veg;
    let unhealthy = 1.5 * eating.snacks + 2.0 * eating.beverages + 1.8 * eating.sweets;
    display_score((healthy - unhealthy + 20.0) / 4.0)
}

pub struct EatingHabitsCategory;

impl Category for EatingHabitsCategory {
    fn id(&self) -> &str {
        "eating_habits"
    }

    fn name(&self) -> &str {
        "Eating Habits"
    }

    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64> {
        Some(score(&answers.eating_habits))
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let e = &answers.eating_habits;
        [
            ("Cereals", e.cereals),
            ("Pulses", e.pulses),
            ("Vegetables", e.vegetables),
            ("Fruits", e.fruits),
            ("Milk and milk products", e.milk),
            ("Non-vegetarian food", e.non_veg),
            ("Snacks and fried food", e.snacks),
            ("Sugary beverages", e.beverages),
            ("Sweets", e.sweets),
        ]
        .into_iter()
        .map(|(name, value)| item_line(name, value, &FREQUENCY))
        .collect()
    }
}
