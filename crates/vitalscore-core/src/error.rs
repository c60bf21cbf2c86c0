use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid value for {field}: {value}")]
    InvalidField { field: String, value: String },
}
