//! Error types surfaced by the progression engine.
use std::fmt;

/// Failures returned by [`ProgressionState::award_xp`](super::engine::ProgressionState::award_xp).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressionError {
    /// The award was zero or negative. State is left unchanged.
    InvalidAmount { amount: i64 },
}

impl ProgressionError {
    pub fn invalid_amount(amount: i64) -> Self {
        Self::InvalidAmount { amount }
    }
}

impl fmt::Display for ProgressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount { amount } => {
                write!(f, "invalid XP amount {} (must be positive)", amount)
            }
        }
    }
}

impl std::error::Error for ProgressionError {}
