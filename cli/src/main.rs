use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand, ValueHint};
use collatz_rand::CollatzRand;
use tracing::info;

use collatz_rand_cli::harness::{self, ValueKind};
use collatz_rand_cli::{HarnessConfig, HarnessReport, BANNER};

#[derive(Debug, Parser)]
#[command(name = "collatz-rand", about = "Sampling harness for the Collatz conjecture based PRNG")]
struct Cli {
    /// Optional path to a harness configuration file (JSON).
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Path to write the JSON report.
    #[arg(long, global = true, value_name = "PATH", value_hint = ValueHint::FilePath)]
    output: Option<PathBuf>,

    /// Override the generator seed (default: derived from the clock).
    #[arg(long, global = true, value_name = "SEED")]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Describe this package.
    About,

    /// Bucket test: every bucket of next_int_below(buckets) within tolerance.
    Distribution {
        #[arg(long)]
        samples: Option<usize>,
        #[arg(long)]
        buckets: Option<u32>,
        #[arg(long)]
        tolerance: Option<f64>,
    },

    /// Tally leading decimal digits (Benford's law check).
    LeadingDigits {
        #[arg(long, value_enum, default_value_t = ValueKind::Int)]
        kind: ValueKind,
        #[arg(long)]
        samples: Option<usize>,
    },

    /// Call every draw kind repeatedly.
    Stress {
        #[arg(long)]
        iterations: Option<usize>,
    },
}

fn main() -> anyhow::Result<()> {
    collatz_rand_cli::init_tracing()?;

    let cli = Cli::parse();
    let mut config = match cli.config.as_ref() {
        Some(path) => HarnessConfig::from_path(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.generator.seed = Some(seed);
    }

    let report = match cli.command {
        Command::About => {
            println!("{}", BANNER);
            return Ok(());
        }
        Command::Distribution {
            samples,
            buckets,
            tolerance,
        } => {
            config.samples = samples.unwrap_or(config.samples);
            config.buckets = buckets.unwrap_or(config.buckets);
            config.tolerance = tolerance.unwrap_or(config.tolerance);
            config.validate()?;
            HarnessReport::Distribution(harness::bucket_distribution(
                &build_generator(&config),
                config.samples,
                config.buckets,
                config.tolerance,
            )?)
        }
        Command::LeadingDigits { kind, samples } => {
            config.samples = samples.unwrap_or(config.samples);
            config.validate()?;
            let rng = build_generator(&config);
            HarnessReport::LeadingDigits(harness::leading_digits(&rng, kind, config.samples)?)
        }
        Command::Stress { iterations } => {
            let iterations = iterations.unwrap_or(config.stress_iterations);
            HarnessReport::Stress(harness::stress(&build_generator(&config), iterations)?)
        }
    };

    print!("{}", report.render_text());

    if let Some(path) = cli.output.as_ref() {
        report
            .write_json(path)
            .with_context(|| format!("writing report to {}", path.display()))?;
        info!(path = ?path, "wrote JSON report");
    }

    if !report.passes() {
        bail!("distribution check failed");
    }
    Ok(())
}

fn build_generator(config: &HarnessConfig) -> CollatzRand {
    let rng = CollatzRand::from_config(&config.generator);
    info!(seed = rng.seed(), "generator ready");
    rng
}
