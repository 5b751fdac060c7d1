//! Solve a small linear system with the inverse, Cramer and Gauss-Jordan methods
//!
//! Usage:
//!   cargo run --release --bin linsys -- --example 3
//!   cargo run --release --bin linsys -- --matrix "2,1;1,1" --constants "3,2"
//!   cargo run --release --bin linsys -- --config system.json --format json
//!   RUST_LOG=trace cargo run --bin linsys -- --example 2

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use math_audio_linsys::{LinearSystem, Pivoting, SolveOptions, SystemConfig, parallel, report};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(
    name = "linsys",
    about = "Solve Ax = b with matrix inversion, Cramer's rule and Gauss-Jordan elimination"
)]
struct Cli {
    /// JSON system file with `matrix` and `constants`
    #[arg(long, conflicts_with_all = ["example", "matrix"])]
    config: Option<PathBuf>,

    /// Load the built-in example system of this size (2 or 3)
    #[arg(long, conflicts_with = "matrix")]
    example: Option<usize>,

    /// Coefficient rows, e.g. "2,1;1,1"
    #[arg(long, requires = "constants", allow_hyphen_values = true)]
    matrix: Option<String>,

    /// Right-hand side values, e.g. "3,2"
    #[arg(long, requires = "matrix", allow_hyphen_values = true)]
    constants: Option<String>,

    /// System size; alone it selects an all-zero system, otherwise it must match the input
    #[arg(long)]
    size: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Invert without row exchanges (fails on zero diagonal pivots)
    #[arg(long)]
    no_pivot_inverse: bool,

    /// Run the three methods and Cramer's columns concurrently
    #[arg(long)]
    parallel: bool,

    /// Write the system that was solved to this JSON file
    #[arg(long)]
    save: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn load_system(cli: &Cli) -> anyhow::Result<(LinearSystem, SolveOptions)> {
    let mut options = SolveOptions::default();

    let system = if let Some(path) = &cli.config {
        let config = SystemConfig::load(path)
            .with_context(|| format!("failed to load system file {}", path.display()))?;
        options = config.options();
        config.to_system().context("invalid system in config file")?
    } else if let Some(n) = cli.example {
        match LinearSystem::example(n) {
            Some(system) => system,
            None => bail!("no built-in example of size {n} (available: 2, 3)"),
        }
    } else if let (Some(matrix), Some(constants)) = (&cli.matrix, &cli.constants) {
        LinearSystem::parse(matrix, constants).context("invalid inline system")?
    } else if let Some(n) = cli.size {
        LinearSystem::zeros(n).context("invalid system size")?
    } else {
        bail!("no system given: use --config, --example or --matrix/--constants");
    };

    if let Some(n) = cli.size {
        if n != system.size() {
            let m = system.size();
            bail!("--size {n} does not match the {m}x{m} system");
        }
    }

    if cli.no_pivot_inverse {
        options.inversion_pivoting = Pivoting::None;
    }
    if cli.parallel {
        options.parallel = true;
    }
    Ok((system, options))
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let (system, options) = load_system(&cli)?;
    if options.parallel && !parallel::is_parallel_available() {
        log::warn!("built without the `native` feature, methods will run sequentially");
    }
    log::info!(
        "solving {0}x{0} system ({1:?} inversion pivoting, parallel = {2})",
        system.size(),
        options.inversion_pivoting,
        options.parallel
    );

    if let Some(path) = &cli.save {
        let mut config = SystemConfig::from_system(&system);
        config.inversion_pivoting = options.inversion_pivoting;
        config.parallel = options.parallel;
        config
            .save(path)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    let start = Instant::now();
    let solutions = system.solve_with(&options);
    log::info!("solved in {:.3?}", start.elapsed());

    match cli.format {
        OutputFormat::Text => print!("{}", report::render_solutions(&solutions)),
        OutputFormat::Json => {
            let json = report::solutions_to_json(&solutions);
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
    }

    if let Some(diff) = solutions.max_discrepancy() {
        if diff > 1e-6 {
            log::warn!("methods disagree by up to {:.3e}", diff);
        }
    }
    Ok(())
}
