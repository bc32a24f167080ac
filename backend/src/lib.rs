//! CollatzRand Core - Rust Engine
//!
//! Pseudorandom value generator driven by the hailstone (Collatz, 3x+1)
//! iteration.
//!
//! # Architecture
//!
//! - **rng**: seed state, hailstone expansion, bit queue, value assembly
//! - **config**: construction settings
//! - **checkpoint**: snapshot/restore of generator state
//! - **error**: error types shared by all draws
//!
//! # Critical Invariants
//!
//! 1. Same seed + same draw calls = same values
//! 2. Bounded draws always land in `[0, limit)`
//! 3. A draw either fully succeeds or fails; the bit queue is never left
//!    with a partially consumed window
//!
//! # Example
//! ```
//! use collatz_rand::CollatzRand;
//!
//! let rng = CollatzRand::with_seed(12345);
//! let coin = rng.next_bool().unwrap();
//! let unit = rng.next_double().unwrap();
//! assert!((0.0..1.0).contains(&unit));
//! # let _ = coin;
//! ```

// Module declarations
pub mod checkpoint;
pub mod config;
pub mod error;
pub mod rng;

// Re-exports for convenience
pub use checkpoint::GeneratorSnapshot;
pub use config::GeneratorConfig;
pub use error::{RngError, RngResult};
pub use rng::{expand, CollatzRand, InterruptHandle, SeedSource, SeedState};
