use vitalscore_core::models::questionnaire::{MentalHealth, QuestionnaireAnswers, WeightGoal};

use super::{item_line, FREQUENCY};
use crate::{display_score, Category};

/// Mental-health score, 0–10. Weighted difficulty items, distance of body
/// perception from "about right", and bullying all lower the score.
pub fn score(mh: &MentalHealth) -> f64 {
    let body_penalty = (mh.body_perception - 3.0).abs() * 0.5;
    let bullying_penalty = if mh.bullied { 2.0 } else { 0.0 };
    let issues = 1.2 * mh.difficulty_walking
        + 1.0 * mh.difficulty_running
        + 1.0 * mh.difficulty_sports
        + 1.5 * mh.difficulty_attention
        + 1.0 * mh.forget_things
        + 1.3 * mh.trouble_keeping_up
        + 2.0 * mh.feel_lonely
        + 1.5 * mh.want_eat_less
        + body_penalty
        + bullying_penalty;
    display_score(10.0 - issues * 0.3)
}

pub struct MentalHealthCategory;

impl Category for MentalHealthCategory {
    fn id(&self) -> &str {
        "mental_health"
    }

    fn name(&self) -> &str {
        "Mental Health"
    }

    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64> {
        Some(score(&answers.mental_health))
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let mh = &answers.mental_health;
        let goal = match mh.weight_goal {
            Some(WeightGoal::Lose) => "lose weight",
            Some(WeightGoal::Gain) => "gain weight",
            Some(WeightGoal::Maintain) => "maintain weight",
            None => "not stated",
        };
        let mut lines = vec![
            format!(
                "Body perception (1 very thin, 3 about right, 5 very fat): {}",
                mh.body_perception
            ),
            format!("Bullied about weight or appearance: {}", if mh.bullied { "yes" } else { "no" }),
            format!("Weight goal: {goal}"),
            format!(
                "Body image rating (1-9): current {}, desired {}",
                mh.current_body_image, mh.desired_body_image
            ),
        ];
        lines.extend(
            [
                ("Difficulty walking", mh.difficulty_walking),
                ("Difficulty running", mh.difficulty_running),
                ("Difficulty playing sports", mh.difficulty_sports),
                ("Difficulty paying attention", mh.difficulty_attention),
                ("Forgetting things", mh.forget_things),
                ("Trouble keeping up with schoolwork", mh.trouble_keeping_up),
                ("Feeling lonely", mh.feel_lonely),
                ("Wanting to eat less", mh.want_eat_less),
            ]
            .into_iter()
            .map(|(name, value)| item_line(name, value, &FREQUENCY)),
        );
        lines
    }
}
