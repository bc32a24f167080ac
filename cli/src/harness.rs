//! Sampling harness
//!
//! Consumes only the public draw API. Three checks:
//! - bucket distribution of `next_int_below(buckets)` with a pass/fail
//!   tolerance
//! - leading decimal digit tally (Benford's law check), report only
//! - stress run calling every draw kind

use std::time::Instant;

use clap::ValueEnum;
use collatz_rand::CollatzRand;
use serde::Serialize;
use tracing::{debug, info};

use crate::error::{HarnessError, HarnessResult};

/// Value kind tallied by [`leading_digits`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Int,
    Long,
    Double,
}

#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    pub samples: usize,
    pub buckets: u32,
    pub tolerance: f64,
    pub expected_per_bucket: f64,
    pub counts: Vec<usize>,
    pub max_deviation: f64,
    pub passes: bool,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct LeadingDigitReport {
    pub kind: ValueKind,
    pub samples: usize,
    /// Index 0 holds digit 1, index 8 digit 9
    pub counts: [usize; 9],
    /// Draws equal to zero, which have no leading digit
    pub zeros: usize,
    pub elapsed_ms: u128,
}

#[derive(Debug, Clone, Serialize)]
pub struct StressReport {
    pub iterations: usize,
    pub draws: usize,
    pub elapsed_ms: u128,
}

/// Draw `next_int_below(buckets)` `samples` times and check every bucket is
/// within `tolerance` (relative) of the uniform expectation
pub fn bucket_distribution(
    rng: &CollatzRand,
    samples: usize,
    buckets: u32,
    tolerance: f64,
) -> HarnessResult<DistributionReport> {
    let started = Instant::now();
    let limit = i32::try_from(buckets)
        .map_err(|_| HarnessError::Config(format!("bucket count {} exceeds i32", buckets)))?;

    let mut counts = vec![0usize; buckets as usize];
    for _ in 0..samples {
        counts[rng.next_int_below(limit)? as usize] += 1;
    }

    let expected = samples as f64 / buckets as f64;
    let max_deviation = counts
        .iter()
        .map(|&count| (count as f64 - expected).abs() / expected)
        .fold(0.0, f64::max);
    let passes = max_deviation <= tolerance;

    info!(samples, buckets, max_deviation, passes, "bucket distribution complete");
    Ok(DistributionReport {
        samples,
        buckets,
        tolerance,
        expected_per_bucket: expected,
        counts,
        max_deviation,
        passes,
        elapsed_ms: started.elapsed().as_millis(),
    })
}

/// First significant decimal digit of `value`, or `None` for zero
pub fn leading_digit_u64(mut value: u64) -> Option<usize> {
    if value == 0 {
        return None;
    }
    while value >= 10 {
        value /= 10;
    }
    Some(value as usize)
}

/// First significant decimal digit of a finite `value`, or `None` for zero
pub fn leading_digit_f64(value: f64) -> Option<usize> {
    if value == 0.0 || !value.is_finite() {
        return None;
    }
    // Scientific notation always starts with the first significant digit
    format!("{:e}", value.abs())
        .chars()
        .next()
        .and_then(|c| c.to_digit(10))
        .map(|digit| digit as usize)
}

/// Tally the leading decimal digit of `samples` draws of `kind`
pub fn leading_digits(
    rng: &CollatzRand,
    kind: ValueKind,
    samples: usize,
) -> HarnessResult<LeadingDigitReport> {
    let started = Instant::now();
    let mut counts = [0usize; 9];
    let mut zeros = 0;

    for _ in 0..samples {
        let digit = match kind {
            ValueKind::Int => leading_digit_u64(u64::from(rng.next_int()?.unsigned_abs())),
            ValueKind::Long => leading_digit_u64(rng.next_long()?.unsigned_abs()),
            ValueKind::Double => leading_digit_f64(rng.next_double()?),
        };
        match digit {
            Some(digit) => counts[digit - 1] += 1,
            None => zeros += 1,
        }
    }

    info!(?kind, samples, zeros, "leading digit tally complete");
    Ok(LeadingDigitReport {
        kind,
        samples,
        counts,
        zeros,
        elapsed_ms: started.elapsed().as_millis(),
    })
}

/// Call every draw kind `iterations` times
pub fn stress(rng: &CollatzRand, iterations: usize) -> HarnessResult<StressReport> {
    let started = Instant::now();

    for i in 0..iterations {
        rng.next_int()?;
        rng.next_bool()?;
        rng.next_byte()?;
        rng.next_double()?;
        rng.next_float()?;
        rng.next_long()?;
        rng.next_short()?;
        if i % 10_000 == 0 {
            debug!(iteration = i, "stress progress");
        }
    }

    Ok(StressReport {
        iterations,
        draws: iterations * 7,
        elapsed_ms: started.elapsed().as_millis(),
    })
}
