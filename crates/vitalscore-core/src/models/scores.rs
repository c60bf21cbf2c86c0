use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// WHO-style adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

/// Family-history conditions answered "yes".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FamilyHistoryFlags {
    pub obesity: bool,
    pub diabetes: bool,
    pub hypertension: bool,
    pub thyroid: bool,
}

impl FamilyHistoryFlags {
    /// Names of the flagged conditions, in questionnaire order.
    pub fn conditions(&self) -> Vec<&'static str> {
        [
            (self.obesity, "obesity"),
            (self.diabetes, "diabetes"),
            (self.hypertension, "hypertension"),
            (self.thyroid, "thyroid disorders"),
        ]
        .into_iter()
        .filter_map(|(flagged, name)| flagged.then_some(name))
        .collect()
    }
}

/// The coarse 0–2 sub-scores that drive the local risk classification.
/// Higher is healthier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskSubscores {
    pub bmi: f64,
    pub diet: f64,
    pub activity: f64,
    pub screen: f64,
    pub sleep: f64,
    pub mental: f64,
}

impl RiskSubscores {
    /// Sum of the six sub-scores, 0–12.
    pub fn total(&self) -> f64 {
        self.bmi + self.diet + self.activity + self.screen + self.sleep + self.mental
    }
}

/// Everything computed from a questionnaire before risk classification.
///
/// The five category scores are on a 0–10 display scale and are shown side
/// by side; they are never summed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DerivedScores {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub eating_habits_score: f64,
    pub physical_activity_score: f64,
    pub sedentary_score: f64,
    pub mental_health_score: f64,
    pub sleep_score: f64,
    pub family_history: FamilyHistoryFlags,
    pub risk_subscores: RiskSubscores,
}
