//! vitalscore-assess
//!
//! Turns a completed questionnaire into an assessment record: input
//! validation, scoring, risk classification with fallback, and the final
//! prediction gate.

pub mod assessor;
pub mod classifier;
pub mod config;
pub mod error;
pub mod fallback;
pub mod model;
pub mod prompt;
pub mod strategy;
