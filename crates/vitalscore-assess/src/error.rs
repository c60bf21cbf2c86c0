use std::time::Duration;

use thiserror::Error;

use vitalscore_bedrock::error::BedrockError;
use vitalscore_scoring::validate::PredictionRejection;

/// Input problems that stop an assessment before anything is scored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AssessError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("age {age} is outside the supported range {min}-{max}")]
    AgeOutOfRange { age: u32, min: u32, max: u32 },

    #[error("BMI {bmi} is outside the plausible range {min}-{max}; check height and weight")]
    ImplausibleBmi { bmi: f64, min: f64, max: f64 },
}

/// Why a classifier could not produce a prediction. Always recovered by
/// falling back to another strategy.
#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error("model call failed: {0}")]
    Model(#[from] BedrockError),

    #[error("model call timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    #[error(transparent)]
    Rejected(#[from] PredictionRejection),
}
