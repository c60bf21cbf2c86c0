use vitalscore_core::models::questionnaire::{ActivityAmount, PhysicalActivity, QuestionnaireAnswers};

use crate::units::activity_minutes;
use crate::{display_score, Category};

/// The seven named activities with their display names.
pub fn activities(pa: &PhysicalActivity) -> [(&'static str, &ActivityAmount); 7] {
    [
        ("Yoga", &pa.yoga),
        ("Exercise", &pa.exercise),
        ("Indoor games", &pa.indoor_games),
        ("Outdoor games", &pa.outdoor_games),
        ("Play after school", &pa.play_after_school),
        ("Cycling", &pa.cycling),
        ("Walking", &pa.walking),
    ]
}

/// Physical-activity score, 0–10, from PT classes and weekly activity minutes.
pub fn score(pa: &PhysicalActivity) -> f64 {
    let pt = if pa.participates_in_pt {
        pa.pt_frequency * pa.pt_duration / 10.0
    } else {
        0.0
    };
    let activity: f64 = activities(pa)
        .iter()
        .map(|(_, amount)| activity_minutes(amount) / 100.0)
        .sum();
    display_score((pt + activity) / 5.0)
}

pub struct PhysicalActivityCategory;

impl Category for PhysicalActivityCategory {
    fn id(&self) -> &str {
        "physical_activity"
    }

    fn name(&self) -> &str {
        "Physical Activity"
    }

    fn score(&self, answers: &QuestionnaireAnswers) -> Option<f64> {
        Some(score(&answers.physical_activity))
    }

    fn answer_lines(&self, answers: &QuestionnaireAnswers) -> Vec<String> {
        let pa = &answers.physical_activity;
        let mut lines = vec![if pa.participates_in_pt {
            format!(
                "Physical training at school: {} days/week, {} minutes per class",
                pa.pt_frequency, pa.pt_duration
            )
        } else {
            "Physical training at school: does not participate".to_string()
        }];
        for (name, amount) in activities(pa) {
            let line = match *amount {
                ActivityAmount::Session { days, minutes } => format!(
                    "{name}: {days} days/week, {minutes} min/day ({} min/week)",
                    days * minutes
                ),
                ActivityAmount::Plain(_) => {
                    format!("{name}: {} min/week", activity_minutes(amount))
                }
                ActivityAmount::Missing => format!("{name}: none"),
            };
            lines.push(line);
        }
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_student_scores_zero() {
        assert_eq!(score(&PhysicalActivity::default()), 0.0);
    }

    #[test]
    fn pt_counts_only_with_participation() {
        let mut pa = PhysicalActivity {
            pt_frequency: 3.0,
            pt_duration: 40.0,
            ..Default::default()
        };
        assert_eq!(score(&pa), 0.0);
        pa.participates_in_pt = true;
        // 3 * 40 / 10 = 12 -> 12 / 5 = 2.4
        assert_eq!(score(&pa), 2.4);
    }

    #[test]
    fn mixes_plain_and_session_amounts() {
        let pa = PhysicalActivity {
            yoga: ActivityAmount::Plain(100.0),
            cycling: ActivityAmount::Session {
                days: 5.0,
                minutes: 60.0,
            },
            ..Default::default()
        };
        // (1 + 3) / 5 = 0.8
        assert_eq!(score(&pa), 0.8);
    }

    #[test]
    fn heavy_activity_saturates() {
        let session = ActivityAmount::Session {
            days: 7.0,
            minutes: 120.0,
        };
        let pa = PhysicalActivity {
            pt_frequency: 7.0,
            pt_duration: 60.0,
            participates_in_pt: true,
            yoga: session,
            exercise: session,
            outdoor_games: session,
            ..Default::default()
        };
        assert_eq!(score(&pa), 10.0);
    }
}
