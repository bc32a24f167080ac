use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{HarnessError, HarnessResult};
use crate::harness::{DistributionReport, LeadingDigitReport, StressReport};

/// Result of one harness command, tagged by command name in JSON
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum HarnessReport {
    Distribution(DistributionReport),
    LeadingDigits(LeadingDigitReport),
    Stress(StressReport),
}

impl HarnessReport {
    /// False only for a distribution check outside tolerance
    pub fn passes(&self) -> bool {
        match self {
            HarnessReport::Distribution(report) => report.passes,
            HarnessReport::LeadingDigits(_) | HarnessReport::Stress(_) => true,
        }
    }

    pub fn write_json(&self, path: &Path) -> HarnessResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| HarnessError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| HarnessError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        match self {
            HarnessReport::Distribution(report) => {
                out.push_str(&format!(
                    "Distribution: {} draws over {} buckets (expected {:.1} each)\n",
                    report.samples, report.buckets, report.expected_per_bucket
                ));
                for (bucket, count) in report.counts.iter().enumerate() {
                    out.push_str(&format!("{:>4}: {}\n", bucket, count));
                }
                out.push_str(&format!(
                    "Max deviation {:.2}% (tolerance {:.0}%): {}\n",
                    report.max_deviation * 100.0,
                    report.tolerance * 100.0,
                    if report.passes { "PASS" } else { "FAIL" }
                ));
            }
            HarnessReport::LeadingDigits(report) => {
                out.push_str(&format!(
                    "Leading digits of {} {:?} draws\n",
                    report.samples, report.kind
                ));
                for (index, count) in report.counts.iter().enumerate() {
                    out.push_str(&format!(
                        "{}: {:.3}%\n",
                        index + 1,
                        *count as f64 / report.samples as f64 * 100.0
                    ));
                }
                if report.zeros > 0 {
                    out.push_str(&format!("zero draws: {}\n", report.zeros));
                }
            }
            HarnessReport::Stress(report) => {
                out.push_str(&format!(
                    "Stress: {} iterations, {} draws, no failures\n",
                    report.iterations, report.draws
                ));
            }
        }
        out.push_str(&format!("Finished in {} ms\n", self.elapsed_ms()));
        out
    }

    fn elapsed_ms(&self) -> u128 {
        match self {
            HarnessReport::Distribution(report) => report.elapsed_ms,
            HarnessReport::LeadingDigits(report) => report.elapsed_ms,
            HarnessReport::Stress(report) => report.elapsed_ms,
        }
    }
}
