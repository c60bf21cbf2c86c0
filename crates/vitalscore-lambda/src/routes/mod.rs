pub mod assessments;
pub mod categories;
pub mod health;
pub mod scores;
