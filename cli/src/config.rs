use std::fs;
use std::path::Path;

use collatz_rand::GeneratorConfig;
use serde::{Deserialize, Serialize};

use crate::error::{HarnessError, HarnessResult};

/// Settings for every harness command, loadable from JSON
///
/// ```json
/// { "seed": 42, "samples": 200000, "buckets": 10, "tolerance": 0.2 }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    #[serde(flatten)]
    pub generator: GeneratorConfig,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_buckets")]
    pub buckets: u32,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_stress_iterations")]
    pub stress_iterations: usize,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            samples: default_samples(),
            buckets: default_buckets(),
            tolerance: default_tolerance(),
            stress_iterations: default_stress_iterations(),
        }
    }
}

impl HarnessConfig {
    pub fn from_path(path: &Path) -> HarnessResult<Self> {
        let contents = fs::read_to_string(path).map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(json: &str) -> HarnessResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> HarnessResult<()> {
        if self.samples == 0 {
            return Err(HarnessError::Config("samples must be > 0".to_string()));
        }
        if self.buckets == 0 || self.buckets > i32::MAX as u32 {
            return Err(HarnessError::Config(format!(
                "buckets must be in 1..={}, got {}",
                i32::MAX,
                self.buckets
            )));
        }
        if !(0.0..=1.0).contains(&self.tolerance) {
            return Err(HarnessError::Config(format!(
                "tolerance must be within [0, 1], got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}

fn default_samples() -> usize {
    1_000_000
}

fn default_buckets() -> u32 {
    10
}

fn default_tolerance() -> f64 {
    0.2
}

fn default_stress_iterations() -> usize {
    100_000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = HarnessConfig::from_json("{}").unwrap();
        assert_eq!(config, HarnessConfig::default());
        assert_eq!(config.generator.seed, None);
    }

    #[test]
    fn test_seed_is_flattened() {
        let config = HarnessConfig::from_json(r#"{ "seed": 9, "buckets": 4 }"#).unwrap();
        assert_eq!(config.generator.seed, Some(9));
        assert_eq!(config.buckets, 4);
    }

    #[test]
    fn test_rejects_zero_buckets() {
        let err = HarnessConfig::from_json(r#"{ "buckets": 0 }"#).unwrap_err();
        assert!(matches!(err, HarnessError::Config(_)));
    }

    #[test]
    fn test_rejects_tolerance_out_of_range() {
        assert!(HarnessConfig::from_json(r#"{ "tolerance": 1.5 }"#).is_err());
    }
}
