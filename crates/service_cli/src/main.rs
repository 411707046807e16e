//! Triang CLI - Triangulation Datasheet Generation
//!
//! This is the operational entry point for the triangle-test flight
//! generator.
//!
//! # Usage
//!
//! - `triang --number 12 --samples pale,amber,brown,stout` - Generate a
//!   datasheet for 12 participants with a fresh random seed
//! - `triang --number 12 --samples pale,amber,brown,stout --seed 42` -
//!   Regenerate a previous sheet from its audited seed
//! - `triang ... --format json` - Emit the machine-readable document
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates
//! `triang_core`, `triang_sampling`, and `triang_report` behind a
//! unified command-line interface. All validation happens here, before
//! the core is invoked; on bad input the binary prints one diagnostic
//! line and exits non-zero.

use clap::{Parser, ValueEnum};
use rand::rngs::OsRng;
use rand::Rng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use triang_core::types::{SamplePool, MIN_POOL_SIZE};
use triang_sampling::{Sampler, SamplerConfig};

mod error;
mod output;

pub use error::{CliError, Result};

/// Upper bound (exclusive) for freshly generated default seeds.
const ONE_BILLION: u64 = 1_000_000_000;

/// Triangulation datasheet generator CLI
#[derive(Parser)]
#[command(name = "triang")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of participants to generate data for
    #[arg(short = 'n', long)]
    number: usize,

    /// Comma-separated list of sample names to pour from
    #[arg(short, long, value_delimiter = ',')]
    samples: Vec<String>,

    /// Use a predetermined seed instead of a fresh random one
    #[arg(long)]
    seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Supported datasheet output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Printable two-view datasheet with seed preamble.
    Text,
    /// JSON document embedding seed, timestamp, and flights.
    Json,
}

fn main() {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Validates the arguments, runs the pipeline, prints the datasheet.
fn run(cli: Cli) -> Result<()> {
    if cli.verbose {
        info!("Verbose mode enabled");
    }

    if cli.number == 0 || cli.samples.len() < MIN_POOL_SIZE {
        return Err(CliError::InvalidArgument(
            "You must have at least 1 participant and 4 samples to choose from".to_string(),
        ));
    }

    let seed = cli.seed.unwrap_or_else(default_seed);
    info!("Generating datasheet...");
    info!("  Participants: {}", cli.number);
    info!("  Samples: {}", cli.samples.len());
    info!("  Seed: {}", seed);

    let pool = SamplePool::new(cli.samples)?;
    let config = SamplerConfig::builder()
        .num_participants(cli.number)
        .seed(seed)
        .build()?;
    let draws = Sampler::new(config).generate(&pool);

    match cli.format {
        OutputFormat::Text => print!("{}", output::render_text(seed, &draws)),
        OutputFormat::Json => println!("{}", output::render_json(seed, &draws)?),
    }

    info!("Datasheet generation complete");
    Ok(())
}

/// Draws a fresh seed from the OS entropy source in `[0, 1_000_000_000)`.
///
/// The generated seed is echoed in the output preamble so any sheet can
/// be reproduced later by passing it back via `--seed`.
fn default_seed() -> u64 {
    OsRng.gen_range(0..ONE_BILLION)
}
