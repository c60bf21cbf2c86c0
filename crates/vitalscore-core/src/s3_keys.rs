//! S3 key/path conventions.
//!
//! Pure string functions with no AWS SDK dependency. These define the canonical
//! layout of objects in the VitalScore bucket.

use uuid::Uuid;

pub const ASSESSMENTS_PREFIX: &str = "assessments/";

pub fn assessment(id: Uuid) -> String {
    format!("{ASSESSMENTS_PREFIX}{id}.json")
}

/// Recover the record id from an assessment key, if it has the expected shape.
pub fn assessment_id(key: &str) -> Option<Uuid> {
    key.strip_prefix(ASSESSMENTS_PREFIX)?
        .strip_suffix(".json")
        .and_then(|id| Uuid::parse_str(id).ok())
}
