//! Error types for rewriting and turtle interpretation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LSystemError {
    // Configuration errors (rejected before use)
    #[error("Rule key '{key}' must be exactly one symbol")]
    InvalidRuleKey { key: String },

    #[error("Step length must be finite and positive, got {0}")]
    InvalidStepLength(f32),

    #[error("Turn angle must be finite, got {0}")]
    InvalidAngle(f32),

    // Boundary errors (malformed sentence)
    #[error("Unmatched ']' at index {index}: branch stack is empty")]
    UnmatchedPop { index: usize },

    #[error("Branch stack overflow at index {index} (max depth {depth})")]
    StackOverflow { index: usize, depth: usize },

    // Growth guard
    #[error("Next generation would hold {len} symbols (limit: {max})")]
    GenerationLimit { len: usize, max: usize },
}

impl LSystemError {
    /// Invalid parameters or rule tables.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidRuleKey { .. } | Self::InvalidStepLength(_) | Self::InvalidAngle(_)
        )
    }

    /// Bracket errors found while scanning a sentence.
    pub fn is_boundary(&self) -> bool {
        matches!(self, Self::UnmatchedPop { .. } | Self::StackOverflow { .. })
    }
}

pub type Result<T> = std::result::Result<T, LSystemError>;
