//! Errors raised by session transitions.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("slot {index} is out of range (grid has {len} slots)")]
    OutOfRange { index: usize, len: usize },
}

impl GameError {
    /// Stable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::OutOfRange { .. } => "OUT_OF_RANGE",
        }
    }
}
