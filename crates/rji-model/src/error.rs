use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid submission: {0}")]
    InvalidSubmission(String),
    #[error("unknown status value '{value}' for {field}")]
    UnknownStatus { field: &'static str, value: String },
    #[error("unknown dataset kind: {0}")]
    UnknownDataset(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
