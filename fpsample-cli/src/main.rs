//! Command-line front end: load a point cloud of `x y z` rows, reduce it with farthest point
//! sampling, and emit the selected points for other tools to display.

mod output;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use fpsample::io::load_xyz;
use fpsample::{DEFAULT_PARALLEL_THRESHOLD, PointCloudFeatures, SamplerOptions};
use log::{LevelFilter, info};
use output::Format;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "fpsample")]
#[command(about = "Reduce a point cloud with farthest point sampling", long_about = None)]
struct Cli {
    /// Input file with one whitespace separated `x y z` row per point
    input: PathBuf,

    /// Number of points to select
    #[arg(short = 'k', long, default_value = "2048")]
    count: usize,

    /// Index of the first point to select, drawn at random if omitted
    #[arg(long)]
    seed_index: Option<usize>,

    /// Seed for the generator that draws the first point when no seed index is given
    #[arg(long, conflicts_with = "seed_index")]
    rng_seed: Option<u64>,

    /// Clouds with at least this many points update distances on all cores
    #[arg(long, default_value_t = DEFAULT_PARALLEL_THRESHOLD)]
    parallel_threshold: usize,

    /// Output file, standard output if omitted
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Xyz)]
    format: Format,

    /// Increase logging, once for info and twice for debug. RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let cloud = load_xyz(&cli.input)
        .map_err(|e| anyhow!("failed to load points from {}: {e}", cli.input.display()))?;
    info!("loaded {} points from {}", cloud.len(), cli.input.display());

    let options = SamplerOptions::default().with_parallel_threshold(cli.parallel_threshold);
    let mut rng = match cli.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let start = Instant::now();
    let selected = fpsample::sample_farthest_points_with(
        cloud.points(),
        cli.count,
        cli.seed_index,
        &options,
        &mut rng,
    )
    .context("farthest point sampling failed")?;
    info!(
        "selected {} points in {:.3?}, starting from index {}",
        selected.len(),
        start.elapsed(),
        selected.indices()[0]
    );

    output::emit(&selected, cli.format, cli.output.as_deref())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
