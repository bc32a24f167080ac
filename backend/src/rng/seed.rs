//! Seed state and default seed derivation
//!
//! The seed is a single 64-bit value advanced by a wrapping multiply. Every
//! advance goes through a compare-and-swap retry loop, so one `SeedState` can
//! be shared by any number of threads without a lock.
//!
//! # Fixed Point
//!
//! Zero is a fixed point of the multiply (0 × k = 0). A seed that is exactly
//! zero advances to zero forever. This is a known degenerate input; the bit
//! queue reports it as [`RngError::DegenerateSeed`](crate::RngError) instead of
//! spinning.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Multiplier applied on every advance
///
/// Odd, so advancing is a bijection on `u64` and preserves the number of
/// trailing zero bits of the seed.
pub const MODIFIER: u64 = 0x6_55F5_0619;

/// Constant XORed into time-derived default seeds
pub const DEFAULT_SEED_SALT: u64 = 0x8008_067F_52B4_F55A;

/// Multiplier spreading [`SeedSource`] counter values across all 64 bits
pub const SEED_UNIQUIFIER: u64 = 181_783_497_276_652_981;

/// Atomically advanced 64-bit seed
///
/// # Example
/// ```
/// use collatz_rand::SeedState;
///
/// let seed = SeedState::new(1);
/// assert_eq!(seed.advance(), 0x655F50619);
/// assert_eq!(seed.current(), 0x655F50619);
/// ```
#[derive(Debug)]
pub struct SeedState {
    value: AtomicU64,
}

impl SeedState {
    /// Create a seed state holding `seed`
    pub fn new(seed: u64) -> Self {
        Self {
            value: AtomicU64::new(seed),
        }
    }

    /// Advance the seed and return the newly installed value
    ///
    /// Reads the current value, computes `value * MODIFIER` (wrapping), and
    /// installs it with a compare-and-swap. If another thread advanced in
    /// between, the swap fails and the loop retries from the fresh value.
    /// Every successful call therefore consumes a distinct prior value.
    pub fn advance(&self) -> u64 {
        let mut current = self.value.load(Ordering::Acquire);
        loop {
            let candidate = current.wrapping_mul(MODIFIER);
            match self.value.compare_exchange_weak(
                current,
                candidate,
                Ordering::AcqRel,
                Ordering::Acquire,
            ) {
                Ok(_) => return candidate,
                Err(observed) => current = observed,
            }
        }
    }

    /// Current seed value without advancing it
    pub fn current(&self) -> u64 {
        self.value.load(Ordering::Acquire)
    }
}

/// Time-varying 64-bit value (nanoseconds since the Unix epoch, truncated)
fn clock_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}

/// Default seed for a generator constructed without an explicit seed
pub fn default_seed() -> u64 {
    DEFAULT_SEED_SALT ^ clock_nanos()
}

/// Factory for default seeds
///
/// Owns a monotonic counter that perturbs each time-derived seed, so two
/// generators created within the same clock tick still start apart. The
/// counter belongs to the factory; there is no process-wide state.
///
/// # Example
/// ```
/// use collatz_rand::SeedSource;
///
/// let source = SeedSource::new();
/// let a = source.next_seed();
/// let b = source.next_seed();
/// assert_ne!(a, b);
/// assert_eq!(source.issued(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SeedSource {
    counter: AtomicU64,
}

impl SeedSource {
    /// Create a factory whose counter starts at zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a factory whose counter starts at `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            counter: AtomicU64::new(start),
        }
    }

    /// Produce the next default seed
    pub fn next_seed(&self) -> u64 {
        self.seed_at(clock_nanos())
    }

    /// Number of seeds handed out so far (relative to the starting count)
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    fn seed_at(&self, nanos: u64) -> u64 {
        let tick = self.counter.fetch_add(1, Ordering::Relaxed);
        DEFAULT_SEED_SALT ^ nanos ^ tick.wrapping_mul(SEED_UNIQUIFIER)
    }
}
