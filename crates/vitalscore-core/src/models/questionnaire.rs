use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use crate::lenient;

/// One submitted student health questionnaire. Immutable once received.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct QuestionnaireAnswers {
    pub demographics: Demographics,
    pub eating_habits: EatingHabits,
    pub physical_activity: PhysicalActivity,
    pub sedentary_behavior: SedentaryBehavior,
    pub mental_health: MentalHealth,
    pub sleep_quality: SleepQuality,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct Demographics {
    #[serde(deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(deserialize_with = "lenient::whole_number")]
    pub age: u32,
    #[serde(deserialize_with = "lenient::choice")]
    pub gender: Option<Gender>,
    /// Height in centimetres.
    #[serde(deserialize_with = "lenient::number")]
    pub height: f64,
    /// Weight in kilograms.
    #[serde(deserialize_with = "lenient::number")]
    pub weight: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub school: String,
    #[serde(rename = "class", deserialize_with = "lenient::text")]
    pub class_name: String,
    #[serde(deserialize_with = "lenient::text")]
    pub section: String,
    pub family_history: FamilyHistory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum HistoryAnswer {
    Yes,
    No,
    #[default]
    Unknown,
}

impl HistoryAnswer {
    pub fn is_yes(self) -> bool {
        self == HistoryAnswer::Yes
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FamilyHistory {
    #[serde(deserialize_with = "lenient::choice_or_default")]
    pub obesity: HistoryAnswer,
    #[serde(deserialize_with = "lenient::choice_or_default")]
    pub diabetes: HistoryAnswer,
    #[serde(deserialize_with = "lenient::choice_or_default")]
    pub hypertension: HistoryAnswer,
    #[serde(deserialize_with = "lenient::choice_or_default")]
    pub thyroid: HistoryAnswer,
}

/// Intake frequencies, 0 = Never through 4 = Almost always.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct EatingHabits {
    #[serde(deserialize_with = "lenient::number")]
    pub cereals: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub pulses: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub vegetables: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub fruits: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub milk: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub non_veg: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub snacks: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub beverages: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub sweets: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct PhysicalActivity {
    /// PT classes per week, 0–7.
    #[serde(deserialize_with = "lenient::number")]
    pub pt_frequency: f64,
    /// Minutes per PT class.
    #[serde(deserialize_with = "lenient::number")]
    pub pt_duration: f64,
    #[serde(rename = "participatesInPT", deserialize_with = "lenient::flag")]
    pub participates_in_pt: bool,
    pub yoga: ActivityAmount,
    pub exercise: ActivityAmount,
    pub indoor_games: ActivityAmount,
    pub outdoor_games: ActivityAmount,
    pub play_after_school: ActivityAmount,
    pub cycling: ActivityAmount,
    pub walking: ActivityAmount,
}

/// How much of an activity a student does in a week.
///
/// The form collects either a single number or a days-per-week and
/// minutes-per-day pair. Any other shape is kept as `Missing` rather than
/// rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum ActivityAmount {
    Plain(f64),
    Session { days: f64, minutes: f64 },
    #[default]
    Missing,
}

impl<'de> Deserialize<'de> for ActivityAmount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(ActivityAmount::from_value(&value))
    }
}

impl ActivityAmount {
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(_) => ActivityAmount::Plain(lenient::number_from_value(value)),
            Value::Object(map) if map.contains_key("days") || map.contains_key("minutes") => {
                let field = |k: &str| map.get(k).map(lenient::number_from_value).unwrap_or(0.0);
                ActivityAmount::Session {
                    days: field("days"),
                    minutes: field("minutes"),
                }
            }
            _ => ActivityAmount::Missing,
        }
    }
}

/// Daily time spent, 0 = Never through 4 = more than 3 hours a day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SedentaryBehavior {
    #[serde(deserialize_with = "lenient::number")]
    pub tv: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub mobile: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub school_reading: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub non_school_reading: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub indoor_games: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub outdoor_games: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub tuition: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MentalHealth {
    /// 1 = very thin through 5 = very fat; 3 is "about right".
    #[serde(deserialize_with = "lenient::number")]
    pub body_perception: f64,
    #[serde(deserialize_with = "lenient::flag")]
    pub bullied: bool,
    #[serde(deserialize_with = "lenient::choice")]
    pub weight_goal: Option<WeightGoal>,
    /// Figure-rating scale, 1–9.
    #[serde(deserialize_with = "lenient::number")]
    pub current_body_image: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub desired_body_image: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_walking: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_running: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_sports: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_attention: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub forget_things: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub trouble_keeping_up: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub feel_lonely: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub want_eat_less: f64,
}

impl MentalHealth {
    /// The eight frequency items, each 0–4.
    pub fn frequency_items(&self) -> [f64; 8] {
        [
            self.difficulty_walking,
            self.difficulty_running,
            self.difficulty_sports,
            self.difficulty_attention,
            self.forget_things,
            self.trouble_keeping_up,
            self.feel_lonely,
            self.want_eat_less,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum WeightGoal {
    Lose,
    Gain,
    Maintain,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct SleepQuality {
    /// `HH:MM`, 24-hour clock.
    #[serde(deserialize_with = "lenient::text")]
    pub bedtime: String,
    #[serde(deserialize_with = "lenient::text")]
    pub wake_time: String,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_falling_asleep: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub wake_up_during_sleep: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub wake_up_from_noise: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub difficulty_getting_back_to_sleep: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub sleepiness_in_classes: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub headache: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub irritation: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub loss_of_interest: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub forgetfulness: f64,
}

impl SleepQuality {
    /// The nine frequency items, each 0–4.
    pub fn frequency_items(&self) -> [f64; 9] {
        [
            self.difficulty_falling_asleep,
            self.wake_up_during_sleep,
            self.wake_up_from_noise,
            self.difficulty_getting_back_to_sleep,
            self.sleepiness_in_classes,
            self.headache,
            self.irritation,
            self.loss_of_interest,
            self.forgetfulness,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_defaults_every_section() {
        let answers: QuestionnaireAnswers = serde_json::from_str("{}").unwrap();
        assert_eq!(answers, QuestionnaireAnswers::default());
        assert_eq!(answers.demographics.family_history.obesity, HistoryAnswer::Unknown);
        assert_eq!(answers.physical_activity.yoga, ActivityAmount::Missing);
    }

    #[test]
    fn activity_accepts_number_pair_and_junk() {
        let json = r#"{
            "yoga": 90,
            "cycling": {"days": 3, "minutes": 40},
            "walking": {"days": "5"},
            "exercise": "lots",
            "outdoorGames": null
        }"#;
        let pa: PhysicalActivity = serde_json::from_str(json).unwrap();
        assert_eq!(pa.yoga, ActivityAmount::Plain(90.0));
        assert_eq!(pa.cycling, ActivityAmount::Session { days: 3.0, minutes: 40.0 });
        assert_eq!(pa.walking, ActivityAmount::Session { days: 5.0, minutes: 0.0 });
        assert_eq!(pa.exercise, ActivityAmount::Missing);
        assert_eq!(pa.outdoor_games, ActivityAmount::Missing);
    }

    #[test]
    fn demographics_use_form_field_names() {
        let json = r#"{
            "name": "Asha",
            "age": "11",
            "gender": "Female",
            "height": 142,
            "weight": "35.5",
            "class": "6",
            "familyHistory": {"diabetes": "yes", "thyroid": "maybe"}
        }"#;
        let d: Demographics = serde_json::from_str(json).unwrap();
        assert_eq!(d.age, 11);
        assert_eq!(d.gender, Some(Gender::Female));
        assert_eq!(d.weight, 35.5);
        assert_eq!(d.class_name, "6");
        assert!(d.family_history.diabetes.is_yes());
        assert_eq!(d.family_history.thyroid, HistoryAnswer::Unknown);
    }

    #[test]
    fn pt_participation_reads_yes_strings() {
        let pa: PhysicalActivity =
            serde_json::from_str(r#"{"participatesInPT": "yes", "ptFrequency": 3}"#).unwrap();
        assert!(pa.participates_in_pt);
        assert_eq!(pa.pt_frequency, 3.0);
    }

    #[test]
    fn activity_amount_serializes_back_to_its_wire_shape() {
        assert_eq!(serde_json::to_value(ActivityAmount::Plain(30.0)).unwrap(), serde_json::json!(30.0));
        assert_eq!(
            serde_json::to_value(ActivityAmount::Session { days: 2.0, minutes: 45.0 }).unwrap(),
            serde_json::json!({"days": 2.0, "minutes": 45.0})
        );
        assert_eq!(serde_json::to_value(ActivityAmount::Missing).unwrap(), Value::Null);
    }
}
