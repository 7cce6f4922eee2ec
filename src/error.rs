use thiserror::Error;

use crate::generator::{MAX_LENGTH, MIN_LENGTH};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error(
        "Password length must be between {} and {} (got {input:?})",
        MIN_LENGTH,
        MAX_LENGTH
    )]
    InvalidLength { input: String },

    #[error("Please select at least one character type")]
    NoClassSelected,
}

impl GenerationError {
    pub fn invalid_length(input: impl ToString) -> Self {
        GenerationError::InvalidLength {
            input: input.to_string(),
        }
    }
}
