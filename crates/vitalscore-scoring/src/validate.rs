//! The single gate every risk prediction passes before it is trusted.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;
use ts_rs::TS;

use vitalscore_core::models::prediction::{AiPrediction, RiskLevel};

/// Why a candidate prediction was refused. Every problem found is listed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("prediction rejected: {}", issues.join("; "))]
pub struct PredictionRejection {
    pub issues: Vec<String>,
}

/// The prediction used whenever no trustworthy one is available.
pub fn fallback_prediction() -> AiPrediction {
    AiPrediction {
        risk_level: RiskLevel::Medium,
        risk_percentage: 50,
        confidence_score: Some(50),
        explanation: "A detailed analysis could not be completed, so this is a general \
                      estimate with reduced confidence. Review the individual section \
                      scores and discuss any concerns with a healthcare provider."
            .to_string(),
        key_risk_factors: vec![
            "Detailed analysis unavailable".to_string(),
            "Lifestyle factors could not be fully evaluated".to_string(),
        ],
        recommendations: vec![
            "Eat a balanced diet with plenty of vegetables, fruits and pulses".to_string(),
            "Get at least 60 minutes of physical activity every day".to_string(),
            "Keep recreational screen time under 2 hours a day".to_string(),
            "Sleep 8 to 10 hours every night on a regular schedule".to_string(),
            "Consult a healthcare provider for a personalised assessment".to_string(),
        ],
    }
}

/// Validate an untyped candidate (for example a model's JSON reply).
pub fn validate_candidate(candidate: &Value) -> Result<AiPrediction, PredictionRejection> {
    let Some(object) = candidate.as_object() else {
        return Err(PredictionRejection {
            issues: vec!["prediction is not a JSON object".to_string()],
        });
    };

    let mut issues = Vec::new();

    let risk_level = match object.get("riskLevel").and_then(Value::as_str) {
        Some(s) => match s.parse::<RiskLevel>() {
            Ok(level) => Some(level),
            Err(_) => {
                issues.push(format!("riskLevel '{s}' is not one of Low, Medium, High"));
                None
            }
        },
        None => {
            issues.push("riskLevel is missing or not a string".to_string());
            None
        }
    };

    let risk_percentage = percentage(object.get("riskPercentage"), "riskPercentage", &mut issues);

    let confidence_score = match object.get("confidenceScore") {
        None | Some(Value::Null) => None,
        value => percentage(value, "confidenceScore", &mut issues),
    };

    let explanation = match object.get("explanation").and_then(Value::as_str) {
        Some(s) if !s.trim().is_empty() => Some(s.to_string()),
        _ => {
            issues.push("explanation must be a non-empty string".to_string());
            None
        }
    };

    let key_risk_factors = string_list(object.get("keyRiskFactors"), "keyRiskFactors", &mut issues);
    let recommendations = string_list(object.get("recommendations"), "recommendations", &mut issues);

    match (risk_level, risk_percentage, explanation, key_risk_factors, recommendations) {
        (Some(risk_level), Some(risk_percentage), Some(explanation), Some(key_risk_factors), Some(recommendations))
            if issues.is_empty() =>
        {
            Ok(AiPrediction {
                risk_level,
                risk_percentage,
                confidence_score,
                explanation,
                key_risk_factors,
                recommendations,
            })
        }
        _ => Err(PredictionRejection { issues }),
    }
}

/// Apply the same rules to an already typed prediction.
pub fn check(prediction: &AiPrediction) -> Result<(), PredictionRejection> {
    let mut issues = Vec::new();
    if prediction.risk_percentage > 100 {
        issues.push(format!(
            "riskPercentage {} is outside [0, 100]",
            prediction.risk_percentage
        ));
    }
    if let Some(confidence) = prediction.confidence_score
        && confidence > 100
    {
        issues.push(format!("confidenceScore {confidence} is outside [0, 100]"));
    }
    if prediction.explanation.trim().is_empty() {
        issues.push("explanation must be a non-empty string".to_string());
    }
    if prediction.key_risk_factors.is_empty() {
        issues.push("keyRiskFactors must be a non-empty list".to_string());
    }
    if prediction.recommendations.is_empty() {
        issues.push("recommendations must be a non-empty list".to_string());
    }
    if issues.is_empty() {
        Ok(())
    } else {
        Err(PredictionRejection { issues })
    }
}

/// Validate a candidate, substituting [`fallback_prediction`] on rejection.
pub fn accept_or_fallback(candidate: &Value) -> AiPrediction {
    match validate_candidate(candidate) {
        Ok(prediction) => prediction,
        Err(rejection) => {
            warn!(issues = ?rejection.issues, "prediction rejected, using fallback");
            fallback_prediction()
        }
    }
}

fn percentage(value: Option<&Value>, field: &str, issues: &mut Vec<String>) -> Option<u8> {
    match value.and_then(Value::as_f64) {
        Some(n) if (0.0..=100.0).contains(&n) => Some(n.round() as u8),
        Some(n) => {
            issues.push(format!("{field} {n} is outside [0, 100]"));
            None
        }
        None => {
            issues.push(format!("{field} is missing or not a number"));
            None
        }
    }
}

fn string_list(value: Option<&Value>, field: &str, issues: &mut Vec<String>) -> Option<Vec<String>> {
    let Some(items) = value.and_then(Value::as_array) else {
        issues.push(format!("{field} must be a list of strings"));
        return None;
    };
    if items.is_empty() {
        issues.push(format!("{field} must not be empty"));
        return None;
    }
    let strings: Option<Vec<String>> = items.iter().map(|v| v.as_str().map(str::to_string)).collect();
    if strings.is_none() {
        issues.push(format!("{field} must contain only strings"));
    }
    strings
}
