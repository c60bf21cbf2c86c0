use vitalscore_core::models::questionnaire::{QuestionnaireAnswers, SleepQuality};

use super::{item_line, FREQUENCY};
use crate::units::sleep_hours;
use crate::{display_score, round1, Category};

/// Hours of sleep implied by the bedtime and wake time answers.
pub fn duration_hours(sq: &SleepQuality) -> f64 {
    sleep_hours(&sq.bedtime, &sq.wake_time)
}

/// Bonus for sleep duration: 2 for 8–10 hours, 1 for 7–11 hours.
pub fn duration_bonus(hours: f64) -> f64 {
    if (8.0..=10.0).contains(&hours) {
        2.0
    } else if (7.0..=11.0).contains(&hours) {
        1.0
    } else {
        0.0
    }
}

/// Sleep-quality score, 0–10.
pub fn score(sq: &SleepQuality) -> f64 {
    let issues = 1.2 * sq.difficulty_falling_asleep
        + 1.0 * sq.wake_up_during_sleep
        + 0.8 * sq.wake_up_from_noise
        + 1.0 * sq.difficulty_getting_back_to_sleep
        + 1.5 * sq.sleepiness_in_classes
        + 1.3 * sq.headache
        + 1.2 * sq.irritation
        + 1.4 * sq.loss_of_interest
        + 1.1 * sq.forgetfulness;
    display_score(10.0 - issues * 0.25 + duration_bonus(duration_hours(sq)))
}

pub struct SleepQualityCategory;

impl Category for SleepQualityCategory {
    fn id(&self) -> &str {
        "sleep_quality"
    }

    fn name(&self) -> &str {
        "Sleep Quality"
    }

    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64> {
        Some(score(&answers.sleep_quality))
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let sq = &answers.sleep_quality;
        let or_unknown = |s: &str| if s.trim().is_empty() { "not given".to_string() } else { s.to_string() };
        let mut lines = vec![
            format!("Bedtime: {}", or_unknown(&sq.bedtime)),
            format!("Wake time: {}", or_unknown(&sq.wake_time)),
            format!("Sleep duration: {} hours", round1(duration_hours(sq))),
        ];
        lines.extend(
            [
                ("Difficulty falling asleep", sq.difficulty_falling_asleep),
                ("Waking up during sleep", sq.wake_up_during_sleep),
                ("Waking up from noise", sq.wake_up_from_noise),
                ("Difficulty getting back to sleep", sq.difficulty_getting_back_to_sleep),
                ("Sleepiness in classes", sq.sleepiness_in_classes),
                ("Headache", sq.headache),
                ("Irritation", sq.irritation),
                ("Loss of interest", sq.loss_of_interest),
                ("Forgetfulness", sq.forgetfulness),
            ]
            .into_iter()
            .map(|(name, value)| item_line(name, value, &FREQUENCY)),
        );
        lines
    }
}
