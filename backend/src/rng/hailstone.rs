//! Hailstone expansion: seed value → bits
//!
//! # Algorithm
//!
//! 1. Walk the hailstone trajectory from the seed (`v/2` when even, `3v+1`
//!    when odd), recording every value while `v > 1`.
//! 2. Trim: hailstone trajectories run roughly two evens per odd. For each odd
//!    value, in visitation order, drop the nearest following even value that
//!    has not already been dropped.
//! 3. Emit the parity of every surviving value, starting from the value
//!    nearest the terminal 1 and ending with the seed itself.
//!
//! Values are carried in `u128`. Trajectories of 64-bit seeds peak well below
//! `2^128`; should `3v+1` ever overflow, the walk stops at that value.

/// Hailstone trajectory of `seed`, in visitation order
///
/// Includes `seed` itself and stops before reaching 1. Seeds 0 and 1 have an
/// empty trajectory.
///
/// # Example
/// ```
/// use collatz_rand::rng::hailstone_sequence;
///
/// assert_eq!(hailstone_sequence(6), vec![6, 3, 10, 5, 16, 8, 4, 2]);
/// assert!(hailstone_sequence(1).is_empty());
/// ```
pub fn hailstone_sequence(seed: u64) -> Vec<u128> {
    let mut sequence = Vec::new();
    let mut value = u128::from(seed);

    while value > 1 {
        sequence.push(value);
        if value & 1 == 1 {
            match value.checked_mul(3).and_then(|v| v.checked_add(1)) {
                Some(next) => value = next,
                None => break,
            }
        } else {
            value >>= 1;
        }
    }

    sequence
}

/// Drop one following even value per odd value
///
/// Single pass: `pending` counts odd anchors still waiting for an even value
/// to remove. Each even value met while anchors are pending is removed for
/// the earliest of them, which is exactly the nearest surviving even value
/// after that anchor.
///
/// # Example
/// ```
/// use collatz_rand::rng::trim;
///
/// assert_eq!(trim(&[6, 3, 10, 5, 16, 8, 4, 2]), vec![6, 3, 5, 8, 4, 2]);
/// // An odd value with no even value after it removes nothing
/// assert_eq!(trim(&[4, 7]), vec![4, 7]);
/// ```
pub fn trim(sequence: &[u128]) -> Vec<u128> {
    let mut kept = Vec::with_capacity(sequence.len());
    let mut pending = 0usize;

    for &value in sequence {
        if value & 1 == 1 {
            pending += 1;
            kept.push(value);
        } else if pending > 0 {
            pending -= 1;
        } else {
            kept.push(value);
        }
    }

    kept
}

/// Expand an advanced seed value into its bit sequence
///
/// # Example
/// ```
/// use collatz_rand::rng::expand;
///
/// // 6 → [6, 3, 5, 8, 4, 2] after trimming; parities emitted from 2 back to 6
/// assert_eq!(expand(6), vec![false, false, false, true, true, false]);
/// assert!(expand(0).is_empty());
/// ```
pub fn expand(seed_value: u64) -> Vec<bool> {
    let trimmed = trim(&hailstone_sequence(seed_value));
    trimmed.iter().rev().map(|value| value & 1 == 1).collect()
}
