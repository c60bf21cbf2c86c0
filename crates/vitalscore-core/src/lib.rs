//! vitalscore-core
//!
//! Pure domain types and storage key conventions.
//! No AWS SDK dependency; this is the shared vocabulary of the VitalScore system.

pub mod error;
pub mod lenient;
pub mod models;
pub mod s3_keys;
