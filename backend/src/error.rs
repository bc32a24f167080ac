//! Error types for the generator
//!
//! Errors fall into two classes:
//! - **Invalid argument**: the caller asked for something the generator cannot
//!   produce (non-positive limit, unsupported bit width, malformed snapshot,
//!   taking more bits than are buffered).
//! - **Fatal generation**: the bit queue could not be refilled (interrupted
//!   wait, degenerate seed, poisoned lock).
//!
//! A draw either fully succeeds or fails; there are no partial results.

use thiserror::Error;

/// Errors that can occur while drawing values
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RngError {
    #[error("Limit must be positive, got {0}")]
    NonPositiveLimit(i64),

    #[error("Bit width must be between 1 and 64, got {0}")]
    InvalidBitWidth(u32),

    #[error("Snapshot error: {0}")]
    Snapshot(String),

    #[error("Requested {requested} bits with only {buffered} buffered")]
    InsufficientBits { requested: usize, buffered: usize },

    #[error("Bit refill interrupted while waiting for {required} bits ({buffered} buffered)")]
    Interrupted { required: usize, buffered: usize },

    #[error("Seed reached the zero fixed point; no further bits can be generated")]
    DegenerateSeed,

    #[error("Bit queue lock poisoned by a panicked draw")]
    Poisoned,
}

impl RngError {
    /// True for errors caused by a bad argument from the caller
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RngError::NonPositiveLimit(_)
                | RngError::InvalidBitWidth(_)
                | RngError::Snapshot(_)
                | RngError::InsufficientBits { .. }
        )
    }

    /// True for errors raised while generating bits
    pub fn is_fatal(&self) -> bool {
        !self.is_invalid_argument()
    }
}

/// Result alias used throughout the crate
pub type RngResult<T> = Result<T, RngError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_classes() {
        assert!(RngError::NonPositiveLimit(0).is_invalid_argument());
        assert!(RngError::InvalidBitWidth(65).is_invalid_argument());
        assert!(RngError::Snapshot("bad".to_string()).is_invalid_argument());
        assert!(RngError::InsufficientBits {
            requested: 48,
            buffered: 0
        }
        .is_invalid_argument());

        assert!(RngError::DegenerateSeed.is_fatal());
        assert!(RngError::Poisoned.is_fatal());
        assert!(RngError::Interrupted {
            required: 80,
            buffered: 3
        }
        .is_fatal());
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RngError::NonPositiveLimit(-5).to_string(),
            "Limit must be positive, got -5"
        );
        assert_eq!(
            RngError::InvalidBitWidth(0).to_string(),
            "Bit width must be between 1 and 64, got 0"
        );
    }
}
