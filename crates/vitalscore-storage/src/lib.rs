//! vitalscore-storage
//!
//! S3 persistence for assessment records. Thin wrapper around the AWS S3 SDK.

pub mod client;
pub mod error;
pub mod records;
