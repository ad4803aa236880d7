use thiserror::Error;

/// Scoring either returns a complete result or fails atomically;
/// nothing is defaulted or partially computed.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("invalid match outcome: {reason}")]
    InvalidMatchOutcome { reason: String },

    #[error("invalid player reference: {reason}")]
    InvalidPlayerReference { reason: String },
}

impl ScoringError {
    pub fn invalid_outcome(reason: impl Into<String>) -> Self {
        Self::InvalidMatchOutcome {
            reason: reason.into(),
        }
    }

    pub fn invalid_player(reason: impl Into<String>) -> Self {
        Self::InvalidPlayerReference {
            reason: reason.into(),
        }
    }
}
