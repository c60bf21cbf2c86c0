pub mod prediction;
pub mod questionnaire;
pub mod record;
pub mod scores;
pub mod usage;
