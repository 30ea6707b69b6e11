use thiserror::Error;

/// The first structural mismatch found by the validator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{path}: expected {expected}")]
pub struct ValidationError {
    pub path: String,
    pub expected: &'static str,
}

impl ValidationError {
    pub(crate) fn new(path: impl Into<String>, expected: &'static str) -> Self {
        Self {
            path: path.into(),
            expected,
        }
    }
}

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Invalid CV structure: {0}")]
    Invalid(#[from] ValidationError),

    #[error("CV data does not match the document model: {0}")]
    Shape(#[from] serde_json::Error),
}
