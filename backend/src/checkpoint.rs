//! Checkpoint - Save/Load Generator State
//!
//! A generator's full state is its seed plus whatever bits are still
//! buffered. Capturing both lets a stream be paused and resumed, in the same
//! process or after a round trip through JSON.
//!
//! # Critical Invariants
//!
//! - **Determinism**: a restored generator yields exactly the draws the
//!   original would have yielded after the snapshot
//! - **No double use**: buffered bits are copied, never shared, so the
//!   original and the restored generator evolve independently

use serde::{Deserialize, Serialize};

use crate::error::{RngError, RngResult};

/// Complete generator state snapshot
///
/// # Example
/// ```
/// use collatz_rand::CollatzRand;
///
/// let rng = CollatzRand::with_seed(7);
/// rng.next_long().unwrap();
///
/// let snapshot = rng.snapshot().unwrap();
/// let resumed = CollatzRand::from_snapshot(&snapshot);
/// assert_eq!(rng.next_int().unwrap(), resumed.next_int().unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorSnapshot {
    /// Seed value at the time of the snapshot
    pub seed: u64,

    /// Bits not yet consumed, front first
    pub buffered_bits: Vec<bool>,
}

impl GeneratorSnapshot {
    /// Serialize to JSON
    pub fn to_json(&self) -> RngResult<String> {
        serde_json::to_string(self)
            .map_err(|e| RngError::Snapshot(format!("Snapshot serialization failed: {}", e)))
    }

    /// Deserialize from JSON
    pub fn from_json(json: &str) -> RngResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| RngError::Snapshot(format!("Snapshot deserialization failed: {}", e)))
    }

    /// True if restoring this snapshot can never produce another bit
    ///
    /// A zero seed with an empty buffer fails every draw with
    /// [`RngError::DegenerateSeed`].
    pub fn is_degenerate(&self) -> bool {
        self.seed == 0 && self.buffered_bits.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_round_trip() {
        let snapshot = GeneratorSnapshot {
            seed: 0x6_55F5_0619,
            buffered_bits: vec![true, false, true],
        };
        let json = snapshot.to_json().unwrap();
        assert_eq!(GeneratorSnapshot::from_json(&json).unwrap(), snapshot);
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = GeneratorSnapshot::from_json("{ \"seed\": -1 }").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(err.to_string().starts_with("Snapshot error: Snapshot deserialization failed"));
    }

    #[test]
    fn test_is_degenerate() {
        let zero = GeneratorSnapshot {
            seed: 0,
            buffered_bits: vec![],
        };
        assert!(zero.is_degenerate());

        let buffered = GeneratorSnapshot {
            seed: 0,
            buffered_bits: vec![true],
        };
        assert!(!buffered.is_degenerate());
    }
}
