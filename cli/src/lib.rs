//! CollatzRand harness
//!
//! Sampling checks and the banner for the `collatz-rand` binary. Everything
//! here goes through the generator's public draw API.

pub mod config;
pub mod error;
pub mod harness;
pub mod report;

use tracing_subscriber::{fmt, EnvFilter};

pub use config::HarnessConfig;
pub use error::{HarnessError, HarnessResult};
pub use report::HarnessReport;

/// Text printed by `collatz-rand about`
pub const BANNER: &str = "\
CollatzRand: a pseudorandom number generator built on the Collatz (3x+1) conjecture.
This package is a library; link against collatz-rand-core to draw values from it.
The bundled commands only sample the generator to show its distribution.
Licensed under the GNU GPL, version 3 or later.";

/// Initialise the global tracing subscriber
///
/// Honors `RUST_LOG`, defaulting to `info`.
pub fn init_tracing() -> HarnessResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| HarnessError::Tracing(err.to_string()))
}
