use vitalscore_core::models::questionnaire::{QuestionnaireAnswers, SedentaryBehavior};

use super::{item_line, DAILY_TIME};
use crate::{display_score, Category};

/// Sedentary-behaviour score, 0–10. Screen time weighs more than reading,
/// indoor games or tuition; outdoor games are not sedentary.
pub fn score(sb: &SedentaryBehavior) -> f64 {
    let screen_time = 1.5 * sb.tv + 2.0 * sb.mobile;
    let other = sb.school_reading + sb.non_school_reading + sb.indoor_games + sb.tuition;
    display_score(10.0 - (1.2 * screen_time + 0.8 * other))
}

pub struct SedentaryBehaviorCategory;

impl Category for SedentaryBehaviorCategory {
    fn id(&self) -> &str {
        "sedentary_behavior"
    }

    fn name(&self) -> &str {
        "Sedentary Behavior"
    }

    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64> {
        Some(score(&answers.sedentary_behavior))
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let sb = &answers.sedentary_behavior;
        [
            ("Watching TV", sb.tv),
            ("Using a mobile phone", sb.mobile),
            ("Reading for school", sb.school_reading),
            ("Reading outside school", sb.non_school_reading),
            ("Indoor games", sb.indoor_games),
            ("Outdoor games", sb.outdoor_games),
            ("Tuition", sb.tuition),
        ]
        .into_iter()
        .map(|(name, value)| item_line(name, value, &DAILY_TIME))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sedentary_time_is_perfect() {
        assert_eq!(score(&SedentaryBehavior::default()), 10.0);
    }

    #[test]
    fn outdoor_games_do_not_count() {
        let sb = SedentaryBehavior {
            outdoor_games: 4.0,
            ..Default::default()
        };
        assert_eq!(score(&sb), 10.0);
    }

    #[test]
    fn screen_time_dominates() {
        let sb = SedentaryBehavior {
            tv: 1.0,
            mobile: 1.0,
            school_reading: 2.0,
            ..Default::default()
        };
        // screen = 3.5 -> 4.2; other = 2 -> 1.6; 10 - 5.8 = 4.2
        assert_eq!(score(&sb), 4.2);
    }

    #[test]
    fn heavy_use_bottoms_out() {
        let sb = SedentaryBehavior {
            tv: 4.0,
            mobile: 4.0,
            ..Default::default()
        };
        assert_eq!(score(&sb), 0.0);
    }
}
