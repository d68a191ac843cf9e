//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors raised while loading vocabulary, generating questions or placing letters.
#[derive(Debug, Error)]
pub enum QuizError {
    /// The vocabulary cannot support question generation. Fatal at load.
    #[error("vocabulary configuration error: {0}")]
    Configuration(String),

    /// Distractor sampling ran out of its retry budget.
    #[error("could not collect {needed} distinct distractors after {attempts} attempts")]
    GenerationExhausted { needed: usize, attempts: usize },

    /// A drop referenced a slot or letter unit that cannot take it.
    #[error("invalid placement: {reason}")]
    InvalidPlacement { reason: String },
}

impl QuizError {
    pub(crate) fn invalid_placement(reason: impl Into<String>) -> Self {
        Self::InvalidPlacement {
            reason: reason.into(),
        }
    }
}

/// Failure reported by a reward store implementation.
#[derive(Debug, Error)]
#[error("reward store error: {0}")]
pub struct StoreError(pub String);
