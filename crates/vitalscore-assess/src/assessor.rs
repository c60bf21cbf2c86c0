use jiff::Timestamp;
use tracing::{info, warn};
use uuid::Uuid;

use vitalscore_core::models::questionnaire::QuestionnaireAnswers;
use vitalscore_core::models::record::AssessmentRecord;
use vitalscore_core::models::scores::DerivedScores;
use vitalscore_scoring::bmi::{self, MAX_PLAUSIBLE_BMI, MIN_PLAUSIBLE_BMI};
use vitalscore_scoring::{score_answers, validate};

use crate::classifier::{
    Classification, ClassificationRequest, RiskClassifier, SafeDefaultClassifier,
};
use crate::error::AssessError;

pub const MIN_AGE: u32 = 6;
pub const MAX_AGE: u32 = 17;

/// Check that the answers can be assessed at all.
///
/// Runs in order: required demographics, age range, BMI plausibility. The
/// first problem found is returned.
pub fn validate_answers(answers: &QuestionnaireAnswers) -> Result<(), AssessError> {
    let d = &answers.demographics;
    if d.name.trim().is_empty() {
        return Err(AssessError::MissingField("name"));
    }
    if d.age == 0 {
        return Err(AssessError::MissingField("age"));
    }
    if d.gender.is_none() {
        return Err(AssessError::MissingField("gender"));
    }
    if !(d.height.is_finite() && d.height > 0.0) {
        return Err(AssessError::MissingField("height"));
    }
    if !(d.weight.is_finite() && d.weight > 0.0) {
        return Err(AssessError::MissingField("weight"));
    }
    if !(MIN_AGE..=MAX_AGE).contains(&d.age) {
        return Err(AssessError::AgeOutOfRange {
            age: d.age,
            min: MIN_AGE,
            max: MAX_AGE,
        });
    }
    let bmi = bmi::compute_bmi(d.height, d.weight);
    if !bmi::is_plausible(bmi) {
        return Err(AssessError::ImplausibleBmi {
            bmi,
            min: MIN_PLAUSIBLE_BMI,
            max: MAX_PLAUSIBLE_BMI,
        });
    }
    Ok(())
}

/// Runs the full assessment pipeline with an injected classifier.
///
/// Holds no mutable state; share it behind an `Arc` across requests.
#[derive(Debug, Clone)]
pub struct Assessor<C> {
    classifier: C,
}

impl<C: RiskClassifier> Assessor<C> {
    pub fn new(classifier: C) -> Self {
        Self { classifier }
    }

    pub fn classifier(&self) -> &C {
        &self.classifier
    }

    /// Validate and score without classifying.
    pub fn score_only(&self, answers: &QuestionnaireAnswers) -> Result<DerivedScores, AssessError> {
        validate_answers(answers)?;
        Ok(score_answers(answers))
    }

    /// Validate, score and classify a questionnaire into a new record.
    ///
    /// Only input problems are errors. A failing or untrustworthy
    /// classification is replaced by the safe default prediction and the
    /// reason is kept on the record.
    pub async fn assess(
        &self,
        answers: QuestionnaireAnswers,
    ) -> Result<AssessmentRecord, AssessError> {
        let scores = self.score_only(&answers)?;

        let request = ClassificationRequest {
            answers: &answers,
            scores: &scores,
        };
        let classification = match self.classifier.classify(&request).await {
            Ok(classification) => classification,
            Err(e) => {
                warn!(error = %e, "classification failed, using safe default");
                safe_default(e.to_string())
            }
        };

        let classification = match validate::check(&classification.prediction) {
            Ok(()) => classification,
            Err(rejection) => {
                warn!(issues = ?rejection.issues, "classification rejected, using safe default");
                safe_default(rejection.to_string())
            }
        };

        let record = AssessmentRecord {
            id: Uuid::new_v4(),
            answers,
            scores,
            prediction: classification.prediction,
            prediction_source: classification.source,
            fallback_reason: classification.fallback_reason,
            completed_at: Timestamp::now(),
        };

        info!(
            assessment_id = %record.id,
            bmi = record.scores.bmi,
            risk_level = %record.prediction.risk_level,
            risk_percentage = record.prediction.risk_percentage,
            fallback = record.fallback_reason.is_some(),
            "assessment complete"
        );

        Ok(record)
    }
}

fn safe_default(reason: String) -> Classification {
    Classification {
        fallback_reason: Some(reason),
        ..SafeDefaultClassifier::classification()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vitalscore_core::models::questionnaire::{Demographics, Gender};

    fn answers() -> QuestionnaireAnswers {
        QuestionnaireAnswers {
            demographics: Demographics {
                name: "Kiran".to_string(),
                age: 11,
                gender: Some(Gender::Other),
                height: 145.0,
                weight: 38.0,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn complete_answers_pass() {
        assert_eq!(validate_answers(&answers()), Ok(()));
    }

    #[test]
    fn required_fields_in_order() {
        let mut a = answers();
        a.demographics.name = "  ".to_string();
        a.demographics.height = 0.0;
        assert_eq!(validate_answers(&a), Err(AssessError::MissingField("name")));

        let mut a = answers();
        a.demographics.gender = None;
        assert_eq!(validate_answers(&a), Err(AssessError::MissingField("gender")));

        let mut a = answers();
        a.demographics.weight = 0.0;
        assert_eq!(validate_answers(&a), Err(AssessError::MissingField("weight")));
    }

    #[test]
    fn age_bounds_are_inclusive() {
        for (age, ok) in [(5, false), (6, true), (17, true), (18, false)] {
            let mut a = answers();
            a.demographics.age = age;
            assert_eq!(validate_answers(&a).is_ok(), ok, "age {age}");
        }
    }

    #[test]
    fn implausible_bmi_is_rejected() {
        let mut a = answers();
        a.demographics.height = 100.0;
        a.demographics.weight = 80.0;
        let err = validate_answers(&a).unwrap_err();
        assert_eq!(
            err,
            AssessError::ImplausibleBmi {
                bmi: 80.0,
                min: 10.0,
                max: 50.0
            }
        );
        assert!(err.to_string().contains("check height and weight"));
    }
}
