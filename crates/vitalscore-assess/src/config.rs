use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;
use vitalscore_bedrock::converse::InferenceSettings;

pub const MODEL_ID_VAR: &str = "VITALSCORE_MODEL_ID";
pub const MODEL_TIMEOUT_VAR: &str = "VITALSCORE_MODEL_TIMEOUT_SECS";
pub const FALLBACK_VAR: &str = "VITALSCORE_FALLBACK";
pub const MAX_TOKENS_VAR: &str = "VITALSCORE_MAX_TOKENS";
pub const TEMPERATURE_VAR: &str = "VITALSCORE_TEMPERATURE";

const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 20;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: &'static str,
    },
}

/// What stands in for the model when it fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FallbackPolicy {
    #[default]
    SafeDefault,
    Heuristic,
}

impl FromStr for FallbackPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "safe_default" => Ok(FallbackPolicy::SafeDefault),
            "heuristic" => Ok(FallbackPolicy::Heuristic),
            _ => Err(()),
        }
    }
}

/// Classification settings, read once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct AssessConfig {
    /// Bedrock model or inference profile. `None` runs the heuristic only.
    pub model_id: Option<String>,
    pub model_timeout: Duration,
    pub fallback: FallbackPolicy,
    pub inference: InferenceSettings,
}

impl Default for AssessConfig {
    fn default() -> Self {
        Self {
            model_id: None,
            model_timeout: Duration::from_secs(DEFAULT_MODEL_TIMEOUT_SECS),
            fallback: FallbackPolicy::default(),
            inference: InferenceSettings::default(),
        }
    }
}

impl AssessConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build from any variable source. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        config.model_id = get(MODEL_ID_VAR).map(|v| v.trim().to_string());

        if let Some(value) = get(MODEL_TIMEOUT_VAR) {
            let secs: u64 = value.trim().parse().map_err(|_| ConfigError::InvalidValue {
                var: MODEL_TIMEOUT_VAR,
                value: value.clone(),
                reason: "expected a whole number of seconds",
            })?;
            if secs == 0 {
                return Err(ConfigError::InvalidValue {
                    var: MODEL_TIMEOUT_VAR,
                    value,
                    reason: "timeout must be at least one second",
                });
            }
            config.model_timeout = Duration::from_secs(secs);
        }

        if let Some(value) = get(FALLBACK_VAR) {
            config.fallback = value.parse().map_err(|()| ConfigError::InvalidValue {
                var: FALLBACK_VAR,
                value: value.clone(),
                reason: "expected safe_default or heuristic",
            })?;
        }

        if let Some(value) = get(MAX_TOKENS_VAR) {
            config.inference.max_tokens = value
                .trim()
                .parse()
                .ok()
                .filter(|tokens: &i32| *tokens > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: MAX_TOKENS_VAR,
                    value: value.clone(),
                    reason: "expected a positive whole number",
                })?;
        }

        if let Some(value) = get(TEMPERATURE_VAR) {
            config.inference.temperature = value
                .trim()
                .parse()
                .ok()
                .filter(|t: &f32| (0.0..=1.0).contains(t))
                .ok_or_else(|| ConfigError::InvalidValue {
                    var: TEMPERATURE_VAR,
                    value: value.clone(),
                    reason: "expected a number between 0 and 1",
                })?;
        }

        Ok(config)
    }
}
