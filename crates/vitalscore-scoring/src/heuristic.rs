//! Local risk classification.
//!
//! A coarse 0–2 sub-score per area (BMI, diet, activity, screen time, sleep,
//! mental health) is summed to a 0–12 total and mapped to a risk tier. This
//! scale is deliberately separate from the 0–10 display scores in
//! [`crate::categories`]; the two are never reconciled.

use vitalscore_core::models::prediction::{AiPrediction, RiskLevel};
use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::scores::{DerivedScores, RiskSubscores};

use crate::categories::{flagged_items, sleep};
use crate::units::activity_minutes;

/// Lowest total (inclusive) classified as Low risk.
pub const LOW_RISK_MIN_TOTAL: f64 = 9.0;
/// Lowest total (inclusive) classified as Medium risk.
pub const MEDIUM_RISK_MIN_TOTAL: f64 = 5.0;

/// A sub-score below this marks its area as a key risk factor.
const FACTOR_THRESHOLD: f64 = 1.0;

pub fn bmi_subscore(bmi: f64) -> f64 {
    if (18.5..25.0).contains(&bmi) {
        2.0
    } else if (17.0..30.0).contains(&bmi) {
        1.0
    } else {
        0.0
    }
}

/// Diet balance from the average of four healthy groups (vegetables, fruits,
/// pulses, milk) and three unhealthy ones (snacks, beverages, sweets).
/// Every point the unhealthy average exceeds the healthy one costs a point.
pub fn diet_subscore(answers: &QuestionnaireAnswers) -> f64 {
    let e = &answers.eating_habits;
    let healthy_avg = (e.vegetables + e.fruits + e.pulses + e.milk) / 4.0;
    let unhealthy_avg = (e.snacks + e.beverages + e.sweets) / 3.0;
    let excess = (unhealthy_avg - healthy_avg).max(0.0);
    (2.0 - excess).clamp(0.0, 2.0)
}

/// Weekly minutes of yoga, exercise and outdoor games: 2 for 420+, 1 for 180+.
pub fn activity_subscore(answers: &QuestionnaireAnswers) -> f64 {
    let pa = &answers.physical_activity;
    let weekly = activity_minutes(&pa.yoga)
        + activity_minutes(&pa.exercise)
        + activity_minutes(&pa.outdoor_games);
    if weekly >= 420.0 {
        2.0
    } else if weekly >= 180.0 {
        1.0
    } else {
        0.0
    }
}

pub fn screen_subscore(answers: &QuestionnaireAnswers) -> f64 {
    let sb = &answers.sedentary_behavior;
    let screen = sb.tv + sb.mobile;
    if screen <= 1.0 {
        2.0
    } else if screen <= 2.0 {
        1.0
    } else {
        0.0
    }
}

pub fn sleep_subscore(answers: &QuestionnaireAnswers) -> f64 {
    let sq = &answers.sleep_quality;
    let hours = sleep::duration_hours(sq);
    let flagged = flagged_items(&sq.frequency_items());
    if hours >= 8.0 && flagged <= 1 {
        2.0
    } else if hours >= 6.0 && flagged <= 2 {
        1.0
    } else {
        0.0
    }
}

pub fn mental_subscore(answers: &QuestionnaireAnswers) -> f64 {
    let flagged = flagged_items(&answers.mental_health.frequency_items());
    if flagged <= 1 {
        2.0
    } else if flagged <= 3 {
        1.0
    } else {
        0.0
    }
}

pub fn risk_subscores(answers: &QuestionnaireAnswers, bmi: f64) -> RiskSubscores {
    RiskSubscores {
        bmi: bmi_subscore(bmi),
        diet: diet_subscore(answers),
        activity: activity_subscore(answers),
        screen: screen_subscore(answers),
        sleep: sleep_subscore(answers),
        mental: mental_subscore(answers),
    }
}

/// Map a 0–12 total to a tier and risk percentage.
///
/// Low: 9 and up, 15% at 9. Medium: 5 up to 9, 35% at 5. High: below 5,
/// 75% at 0.
pub fn classify_total(total: f64) -> (RiskLevel, u8) {
    let (level, percentage) = if total >= LOW_RISK_MIN_TOTAL {
        (RiskLevel::Low, 15.0 + (total - LOW_RISK_MIN_TOTAL) * 5.0)
    } else if total >= MEDIUM_RISK_MIN_TOTAL {
        (RiskLevel::Medium, 35.0 + (total - MEDIUM_RISK_MIN_TOTAL) * 10.0)
    } else {
        (RiskLevel::High, 75.0 + total * 5.0)
    };
    (level, percentage.round().clamp(0.0, 100.0) as u8)
}

struct Concern {
    factor: &'static str,
    recommendation: &'static str,
}

fn concerns(subscores: &RiskSubscores) -> Vec<Concern> {
    [
        (
            subscores.bmi,
            Concern {
                factor: "Body weight outside the healthy range for height",
                recommendation: "Check growth and weight with a doctor or school nurse and agree on a healthy weight plan",
            },
        ),
        (
            subscores.diet,
            Concern {
                factor: "Unbalanced diet with frequent snacks, sugary drinks or sweets",
                recommendation: "Eat more vegetables, fruits and pulses and cut down on snacks, sugary drinks and sweets",
            },
        ),
        (
            subscores.activity,
            Concern {
                factor: "Low physical activity",
                recommendation: "Aim for at least 60 minutes of active play, sport or exercise every day",
            },
        ),
        (
            subscores.screen,
            Concern {
                factor: "High recreational screen time",
                recommendation: "Keep TV and mobile phone use under 2 hours a day",
            },
        ),
        (
            subscores.sleep,
            Concern {
                factor: "Short or disturbed sleep",
                recommendation: "Keep a regular bedtime that allows 8 to 10 hours of sleep",
            },
        ),
        (
            subscores.mental,
            Concern {
                factor: "Signs of emotional or concentration difficulties",
                recommendation: "Talk with a parent, teacher or school counsellor about how you are feeling",
            },
        ),
    ]
    .into_iter()
    .filter(|(score, _)| *score < FACTOR_THRESHOLD)
    .map(|(_, concern)| concern)
    .collect()
}

/// Build a complete prediction from derived scores.
///
/// `confidenceScore` is left empty; only model predictions carry one.
pub fn predict(scores: &DerivedScores) -> AiPrediction {
    let total = scores.risk_subscores.total();
    let (risk_level, risk_percentage) = classify_total(total);

    let mut key_risk_factors = Vec::new();
    let mut recommendations = Vec::new();
    for concern in concerns(&scores.risk_subscores) {
        key_risk_factors.push(concern.factor.to_string());
        recommendations.push(concern.recommendation.to_string());
    }

    let family = scores.family_history.conditions();
    for condition in &family {
        key_risk_factors.push(format!("Family history of {condition}"));
    }
    if !family.is_empty() {
        recommendations
            .push("Share the family health history with a doctor at regular check-ups".to_string());
    }

    let explanation = if key_risk_factors.is_empty() {
        format!(
            "Overall risk is {risk_level} ({risk_percentage}%) based on a lifestyle score of \
             {total:.1}/12. No major areas of concern were identified."
        )
    } else {
        format!(
            "Overall risk is {risk_level} ({risk_percentage}%) based on a lifestyle score of \
             {total:.1}/12. Areas of concern: {}.",
            key_risk_factors.join("; ")
        )
    };

    if key_risk_factors.is_empty() {
        key_risk_factors.push("No major lifestyle risk factors identified".to_string());
    }
    if recommendations.is_empty() {
        recommendations
            .push("Keep up the current healthy eating, activity and sleep habits".to_string());
    }

    AiPrediction {
        risk_level,
        risk_percentage,
        confidence_score: None,
        explanation,
        key_risk_factors,
        recommendations,
    }
}
