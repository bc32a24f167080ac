//! CollatzRand - value assembly on top of the bit queue
//!
//! Every draw reads a fixed 48-bit window from the bit queue and keeps its
//! top `width` bits:
//!
//! ```text
//! ensure(48 + width) → pop 48 bits → acc |= bit_i << i → acc >> (48 - width)
//! ```
//!
//! Widths above 48 are composed from two adjacent windows (`width - 32` high
//! bits, then 32 low bits) read under one lock, after a single `ensure` that
//! covers both. Floating point values follow the same recipe as
//! `java.util.Random`: 24 bits for `f32`, 26 + 27 bits for `f64`.
//!
//! # Determinism
//!
//! Same seed + same sequence of draw calls → same results. Interleaving draws
//! from several threads keeps every individual draw well-formed, but which
//! thread receives which window is unspecified.

use tracing::debug;

use crate::checkpoint::GeneratorSnapshot;
use crate::config::GeneratorConfig;
use crate::error::{RngError, RngResult};
use crate::rng::bit_queue::{BitBuffer, BitQueue, InterruptHandle};
use crate::rng::seed::{default_seed, SeedSource, SeedState};

/// Bits read from the queue per draw
pub const WINDOW_BITS: u32 = 48;

/// Widest value a single draw can return
pub const MAX_BIT_WIDTH: u32 = 64;

/// Collatz conjecture based pseudorandom generator
///
/// Not suitable for anything security related.
///
/// # Example
/// ```
/// use collatz_rand::CollatzRand;
///
/// let rng = CollatzRand::with_seed(1);
/// assert_eq!(rng.next_int().unwrap(), 1323277866);
///
/// let roll = rng.next_int_below(6).unwrap();
/// assert!((0..6).contains(&roll));
/// ```
#[derive(Debug)]
pub struct CollatzRand {
    seed: SeedState,
    bits: BitQueue,
}

impl CollatzRand {
    /// Create a generator seeded from the clock
    pub fn new() -> Self {
        Self::with_seed(default_seed())
    }

    /// Create a generator with an explicit seed
    ///
    /// The resulting stream is fully reproducible. Intended for tests and
    /// replays, not as a source of real randomness.
    pub fn with_seed(seed: u64) -> Self {
        debug!(seed, "creating CollatzRand");
        Self {
            seed: SeedState::new(seed),
            bits: BitQueue::new(),
        }
    }

    /// Create a generator whose default seed comes from `source`
    pub fn from_source(source: &SeedSource) -> Self {
        Self::with_seed(source.next_seed())
    }

    /// Create a generator from configuration
    ///
    /// Uses `config.seed` when set, otherwise a clock-derived seed.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Rebuild a generator from a snapshot
    ///
    /// The restored generator produces exactly the draws the original would
    /// have produced from the moment the snapshot was taken.
    pub fn from_snapshot(snapshot: &GeneratorSnapshot) -> Self {
        Self {
            seed: SeedState::new(snapshot.seed),
            bits: BitQueue::with_bits(snapshot.buffered_bits.iter().copied()),
        }
    }

    /// Capture the seed and buffered bits
    pub fn snapshot(&self) -> RngResult<GeneratorSnapshot> {
        // Seed only advances under the queue lock, so both reads agree
        let buffer = self.bits.lock()?;
        Ok(GeneratorSnapshot {
            seed: self.seed.current(),
            buffered_bits: buffer.to_vec(),
        })
    }

    /// Current seed value
    pub fn seed(&self) -> u64 {
        self.seed.current()
    }

    /// Number of bits currently buffered
    pub fn buffered_bits(&self) -> RngResult<usize> {
        Ok(self.bits.lock()?.len())
    }

    /// Handle that interrupts a draw blocked on a refill
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.bits.interrupt_handle()
    }

    /// Draw `width` bits (1..=64) as the low bits of a `u64`
    ///
    /// A failed draw leaves the buffered bits untouched; no window is
    /// consumed unless the whole value can be assembled.
    ///
    /// # Errors
    /// [`RngError::InvalidBitWidth`] for a width of 0 or above 64, or any
    /// generation error from the refill.
    pub fn draw_bits(&self, width: u32) -> RngResult<u64> {
        match width {
            1..=WINDOW_BITS => self.draw_window(width),
            49..=MAX_BIT_WIDTH => {
                let (high, low) = self.draw_pair(width - 32, 32)?;
                Ok((high << 32) | low)
            }
            _ => Err(RngError::InvalidBitWidth(width)),
        }
    }

    fn draw_window(&self, width: u32) -> RngResult<u64> {
        let mut buffer = self.bits.lock()?;
        buffer.ensure((WINDOW_BITS + width) as usize, &self.seed)?;
        read_window(&mut buffer, width)
    }

    /// Two adjacent windows, refilled once and popped under the same lock
    fn draw_pair(&self, high_width: u32, low_width: u32) -> RngResult<(u64, u64)> {
        let mut buffer = self.bits.lock()?;
        buffer.ensure((2 * WINDOW_BITS + low_width) as usize, &self.seed)?;
        let high = read_window(&mut buffer, high_width)?;
        let low = read_window(&mut buffer, low_width)?;
        Ok((high, low))
    }

    /// Top bit of one window
    pub fn next_bool(&self) -> RngResult<bool> {
        Ok(self.draw_bits(1)? != 0)
    }

    /// `draw_bits(8)` reinterpreted as two's complement, so the full `i8`
    /// range is reachable
    pub fn next_byte(&self) -> RngResult<i8> {
        Ok(self.draw_bits(8)? as u8 as i8)
    }

    /// `draw_bits(16)` reinterpreted as two's complement
    pub fn next_short(&self) -> RngResult<i16> {
        Ok(self.draw_bits(16)? as u16 as i16)
    }

    /// `draw_bits(32)` reinterpreted as two's complement
    pub fn next_int(&self) -> RngResult<i32> {
        Ok(self.draw_bits(32)? as u32 as i32)
    }

    /// Two adjacent 32-bit windows, high half first
    ///
    /// Uses the same bits as two consecutive `next_int()` calls.
    pub fn next_long(&self) -> RngResult<i64> {
        Ok(self.draw_bits(64)? as i64)
    }

    /// Draw an `i16` in `[0, limit)`
    ///
    /// Computed as `|next_short()| mod limit`. `i16::MIN` has no positive
    /// counterpart and stays negative after `wrapping_abs`; the Euclidean
    /// remainder still maps it into range.
    ///
    /// # Errors
    /// [`RngError::NonPositiveLimit`] if `limit <= 0`.
    pub fn next_short_below(&self, limit: i16) -> RngResult<i16> {
        if limit <= 0 {
            return Err(RngError::NonPositiveLimit(i64::from(limit)));
        }
        Ok(self.next_short()?.wrapping_abs().rem_euclid(limit))
    }

    /// Draw an `i32` in `[0, limit)`; see [`next_short_below`](Self::next_short_below)
    pub fn next_int_below(&self, limit: i32) -> RngResult<i32> {
        if limit <= 0 {
            return Err(RngError::NonPositiveLimit(i64::from(limit)));
        }
        Ok(self.next_int()?.wrapping_abs().rem_euclid(limit))
    }

    /// Draw an `i64` in `[0, limit)`; see [`next_short_below`](Self::next_short_below)
    pub fn next_long_below(&self, limit: i64) -> RngResult<i64> {
        if limit <= 0 {
            return Err(RngError::NonPositiveLimit(limit));
        }
        Ok(self.next_long()?.wrapping_abs().rem_euclid(limit))
    }

    /// Draw an `f32` in `[0, 1)`
    ///
    /// Values lean toward small magnitudes; this is an accepted property of
    /// the bit source.
    pub fn next_float(&self) -> RngResult<f32> {
        Ok(self.draw_bits(24)? as f32 / (1u32 << 24) as f32)
    }

    /// Draw an `f64` in `[0, 1)`, with the same small-magnitude lean as
    /// [`next_float`](Self::next_float)
    pub fn next_double(&self) -> RngResult<f64> {
        let (high, low) = self.draw_pair(26, 27)?;
        Ok(((high << 27) + low) as f64 * (1.0 / (1u64 << 53) as f64))
    }
}

/// Pop one window from a locked buffer and keep its top `width` bits
///
/// The caller must already have ensured at least `WINDOW_BITS` are buffered.
fn read_window(buffer: &mut BitBuffer<'_>, width: u32) -> RngResult<u64> {
    let window = buffer
        .take(WINDOW_BITS as usize)?
        .enumerate()
        .fold(0u64, |acc, (i, bit)| acc | (u64::from(bit) << i));

    Ok(window >> (WINDOW_BITS - width))
}

impl Default for CollatzRand {
    fn default() -> Self {
        Self::new()
    }
}
