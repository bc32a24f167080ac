//! Generator configuration
//!
//! Loaded from JSON by the harness, or built in code.

use serde::{Deserialize, Serialize};

/// Construction settings for a [`CollatzRand`](crate::CollatzRand)
///
/// # Example
/// ```
/// use collatz_rand::{CollatzRand, GeneratorConfig};
///
/// let config: GeneratorConfig = serde_json::from_str(r#"{ "seed": 42 }"#).unwrap();
/// let rng = CollatzRand::from_config(&config);
/// assert_eq!(rng.seed(), 42);
///
/// // Missing seed means "derive one from the clock"
/// let config: GeneratorConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config.seed, None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Explicit seed for a reproducible stream (None = clock-derived)
    #[serde(default)]
    pub seed: Option<u64>,
}

impl GeneratorConfig {
    /// Configuration pinned to `seed`
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }
}
