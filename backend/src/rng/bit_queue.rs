//! Bit queue - FIFO buffer of generated bits
//!
//! Bits are produced by advancing the seed and expanding the new value into
//! its hailstone parity bits. Consumers lock the queue, `ensure` enough bits
//! are buffered, then `take` them. Both steps happen under the same lock, so a
//! concurrent draw never sees a half-refilled queue or loses bits to another
//! caller mid-window.
//!
//! # Liveness
//!
//! Every regeneration from a seed other than 0 or 1 appends at least one
//! bit. Seed 1 can only appear once in a row (the advance is a bijection),
//! and seed 0 is reported as [`RngError::DegenerateSeed`]. Refills therefore
//! terminate in practice; the bound inherits the open Collatz termination
//! question.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{trace, warn};

use crate::error::{RngError, RngResult};
use crate::rng::hailstone::expand;
use crate::rng::seed::SeedState;

/// Handle used to interrupt a draw blocked on a refill
///
/// Interrupting is one-shot: the next refill cycle that observes the flag
/// clears it and fails with [`RngError::Interrupted`]. Draws served from
/// already-buffered bits are not affected.
///
/// # Example
/// ```
/// use collatz_rand::{CollatzRand, RngError};
///
/// let rng = CollatzRand::with_seed(42);
/// rng.interrupt_handle().interrupt();
/// assert!(matches!(rng.next_int(), Err(RngError::Interrupted { .. })));
/// assert!(rng.next_int().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InterruptHandle {
    flag: Arc<AtomicBool>,
}

impl InterruptHandle {
    /// Request that the next refill wait be abandoned
    pub fn interrupt(&self) {
        self.flag.store(true, Ordering::Release);
    }

    /// True while an interrupt is pending
    pub fn is_pending(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }

    fn take(&self) -> bool {
        self.flag.swap(false, Ordering::AcqRel)
    }
}

/// Mutex-guarded FIFO of bits, shared by every draw on one generator
#[derive(Debug, Default)]
pub struct BitQueue {
    bits: Mutex<VecDeque<bool>>,
    interrupt: InterruptHandle,
}

impl BitQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a queue pre-loaded with `bits` (front is consumed first)
    pub fn with_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        Self {
            bits: Mutex::new(bits.into_iter().collect()),
            interrupt: InterruptHandle::default(),
        }
    }

    /// Handle that interrupts refills on this queue
    pub fn interrupt_handle(&self) -> InterruptHandle {
        self.interrupt.clone()
    }

    /// Lock the queue for an ensure-then-take sequence
    pub fn lock(&self) -> RngResult<BitBuffer<'_>> {
        let bits = self.bits.lock().map_err(|_| RngError::Poisoned)?;
        Ok(BitBuffer {
            bits,
            interrupt: &self.interrupt,
        })
    }
}

/// Locked view of a [`BitQueue`]
pub struct BitBuffer<'a> {
    bits: MutexGuard<'a, VecDeque<bool>>,
    interrupt: &'a InterruptHandle,
}

impl BitBuffer<'_> {
    /// Number of buffered bits
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when no bits are buffered
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Copy of the buffered bits, front first
    pub fn to_vec(&self) -> Vec<bool> {
        self.bits.iter().copied().collect()
    }

    /// Refill until at least `required` bits are buffered
    ///
    /// Returns the number of regeneration cycles it took (0 when the queue
    /// already held enough bits).
    ///
    /// # Errors
    /// - [`RngError::Interrupted`] if an interrupt was pending at the start of
    ///   a cycle. Bits appended by earlier cycles stay queued.
    /// - [`RngError::DegenerateSeed`] if the seed advanced to zero.
    pub fn ensure(&mut self, required: usize, seed: &SeedState) -> RngResult<usize> {
        let mut cycles = 0;

        while self.bits.len() < required {
            if self.interrupt.take() {
                warn!(
                    required,
                    buffered = self.bits.len(),
                    "bit refill interrupted"
                );
                return Err(RngError::Interrupted {
                    required,
                    buffered: self.bits.len(),
                });
            }

            let seed_value = seed.advance();
            if seed_value == 0 {
                warn!("seed advanced to the zero fixed point");
                return Err(RngError::DegenerateSeed);
            }

            let bits = expand(seed_value);
            trace!(seed = seed_value, appended = bits.len(), "regenerated bits");
            self.bits.extend(bits);
            cycles += 1;
        }

        Ok(cycles)
    }

    /// Pop `count` bits from the front, in FIFO order
    ///
    /// # Errors
    /// [`RngError::InsufficientBits`] if fewer than `count` bits are
    /// buffered; nothing is removed. Call [`ensure`] first.
    ///
    /// [`ensure`]: BitBuffer::ensure
    pub fn take(&mut self, count: usize) -> RngResult<impl Iterator<Item = bool> + '_> {
        if self.bits.len() < count {
            return Err(RngError::InsufficientBits {
                requested: count,
                buffered: self.bits.len(),
            });
        }
        Ok(self.bits.drain(..count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_fills_to_threshold() {
        let queue = BitQueue::new();
        let seed = SeedState::new(1);

        let mut buffer = queue.lock().unwrap();
        let cycles = buffer.ensure(80, &seed).unwrap();

        // 0x655F50619 alone expands to 279 bits
        assert_eq!(cycles, 1);
        assert_eq!(buffer.len(), 279);
    }

    #[test]
    fn test_ensure_noop_when_enough_buffered() {
        let queue = BitQueue::with_bits(vec![true; 10]);
        let seed = SeedState::new(1);

        let mut buffer = queue.lock().unwrap();
        assert_eq!(buffer.ensure(10, &seed).unwrap(), 0);
        assert_eq!(seed.current(), 1, "seed must not advance");
    }

    #[test]
    fn test_take_is_fifo() {
        let queue = BitQueue::with_bits(vec![true, false, false, true]);
        let mut buffer = queue.lock().unwrap();

        let first: Vec<bool> = buffer.take(3).unwrap().collect();
        assert_eq!(first, vec![true, false, false]);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_take_more_than_buffered_leaves_queue_usable() {
        let queue = BitQueue::with_bits(vec![true, true]);
        {
            let mut buffer = queue.lock().unwrap();
            assert!(matches!(
                buffer.take(5),
                Err(RngError::InsufficientBits {
                    requested: 5,
                    buffered: 2
                })
            ));
            assert_eq!(buffer.len(), 2, "failed take must not remove bits");
        }

        // Lock is not poisoned
        let mut buffer = queue.lock().unwrap();
        let rest: Vec<bool> = buffer.take(2).unwrap().collect();
        assert_eq!(rest, vec![true, true]);
    }

    #[test]
    fn test_zero_seed_is_reported() {
        let queue = BitQueue::new();
        let seed = SeedState::new(0);

        let mut buffer = queue.lock().unwrap();
        assert_eq!(buffer.ensure(1, &seed), Err(RngError::DegenerateSeed));
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_interrupt_is_one_shot() {
        let queue = BitQueue::new();
        let seed = SeedState::new(42);
        let handle = queue.interrupt_handle();

        handle.interrupt();
        assert!(handle.is_pending());

        let mut buffer = queue.lock().unwrap();
        assert_eq!(
            buffer.ensure(48, &seed),
            Err(RngError::Interrupted {
                required: 48,
                buffered: 0
            })
        );
        assert!(!handle.is_pending());
        assert_eq!(seed.current(), 42, "interrupted refill must not advance");

        assert!(buffer.ensure(48, &seed).is_ok());
        assert!(buffer.len() >= 48);
    }

    #[test]
    fn test_interrupt_ignored_when_no_refill_needed() {
        let queue = BitQueue::with_bits(vec![false; 64]);
        let seed = SeedState::new(42);
        queue.interrupt_handle().interrupt();

        let mut buffer = queue.lock().unwrap();
        assert_eq!(buffer.ensure(64, &seed), Ok(0));
        assert!(queue.interrupt_handle().is_pending());
    }
}
