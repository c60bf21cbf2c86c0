//! vitalscore-bedrock
//!
//! Bedrock model invocation and JSON reply parsing.

pub mod converse;
pub mod error;
pub mod reply;
pub mod tokens;
pub mod transaction;
