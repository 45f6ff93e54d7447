//! Failure taxonomy shared by every puzzle computation.
//!
//! All variants are fatal for the run that raised them: callers surface them
//! and stop, no partial answer is produced.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Input text does not have the shape the puzzle expects.
    #[error("malformed input: {0}")]
    MalformedInput(String),

    /// A referenced label or position does not exist.
    #[error("lookup failed: {0}")]
    LookupFailure(String),

    /// A walk exceeded its step cap without repeating or arriving.
    #[error("no termination detected after {steps} steps: {context}")]
    NoTerminationDetected { steps: u64, context: String },
}

impl PuzzleError {
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput(message.into())
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::LookupFailure(message.into())
    }

    pub fn no_termination(steps: u64, context: impl Into<String>) -> Self {
        Self::NoTerminationDetected {
            steps,
            context: context.into(),
        }
    }
}

pub type PuzzleResult<T> = Result<T, PuzzleError>;
