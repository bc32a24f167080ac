//! Collatz conjecture based random number generation
//!
//! Bits come from the parities of hailstone (3x+1) trajectories. The pieces,
//! leaf first:
//! - `seed`: atomically advanced 64-bit seed, plus default seed derivation
//! - `hailstone`: seed value → trajectory → trimmed parity bits
//! - `bit_queue`: FIFO of bits, refilled on demand, interruptible
//! - `collatz`: `CollatzRand`, packing bit windows into numeric values
//!
//! Not a cryptographic generator.

mod bit_queue;
mod collatz;
mod hailstone;
mod seed;

pub use bit_queue::{BitBuffer, BitQueue, InterruptHandle};
pub use collatz::{CollatzRand, MAX_BIT_WIDTH, WINDOW_BITS};
pub use hailstone::{expand, hailstone_sequence, trim};
pub use seed::{default_seed, SeedSource, SeedState, DEFAULT_SEED_SALT, MODIFIER, SEED_UNIQUIFIER};
