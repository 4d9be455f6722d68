//! Cache simulator CLI.
//!
//! Replays a Valgrind memory trace against a set-associative cache with LRU
//! replacement and prints the hit, miss and eviction totals. It performs:
//! 1. **Argument parsing:** `-s`, `-E`, `-b`, `-t`, `-v` with the classic cache-lab usage.
//! 2. **Replay:** Builds the cache and replays the trace, optionally echoing each record.
//! 3. **Reporting:** Prints `hits:<H> misses:<M> evictions:<E>` and optional JSON / results file.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use csim_core::{
    CacheConfig, ConfigError, NullObserver, SimError, SimStats, Simulator, VerboseObserver,
};

#[derive(Parser, Debug)]
#[command(
    name = "csim",
    version,
    about = "Trace-driven cache simulator (LRU replacement)",
    override_usage = "csim [-hv] -s <num> -E <num> -b <num> -t <file>",
    after_help = "Examples:\n  \
                  linux>  csim -s 4 -E 1 -b 4 -t traces/yi.trace\n  \
                  linux>  csim -v -s 8 -E 2 -b 4 -t traces/yi.trace"
)]
struct Cli {
    /// Number of set index bits.
    #[arg(short = 's', value_name = "num")]
    set_bits: u32,

    /// Number of lines per set.
    #[arg(short = 'E', value_name = "num")]
    lines_per_set: usize,

    /// Number of block offset bits.
    #[arg(short = 'b', value_name = "num")]
    block_bits: u32,

    /// Trace file.
    #[arg(short = 't', value_name = "file")]
    trace: PathBuf,

    /// Optional verbose flag.
    #[arg(short = 'v')]
    verbose: bool,

    /// Also print the statistics as JSON.
    #[arg(long)]
    json: bool,

    /// Write the "hits misses evictions" results artifact to this path.
    #[arg(long, value_name = "path")]
    results_file: Option<PathBuf>,
}

impl Cli {
    const fn config(&self) -> CacheConfig {
        CacheConfig::new(self.set_bits, self.lines_per_set, self.block_bits)
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error("{}: {source}", .path.display())]
    Results { path: PathBuf, source: io::Error },

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),

    #[error("failed to encode statistics: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Sim(SimError::Config(e))
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::Sim(SimError::Config(e))) => {
            eprintln!("csim: {e}");
            eprintln!("{}", Cli::command().render_usage());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Installs the stderr log subscriber; `RUST_LOG` overrides the `warn` default.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Validates the geometry, replays the trace and reports the totals.
fn run(cli: &Cli) -> Result<(), CliError> {
    let config = cli.config();
    config.require_positive()?;
    let mut sim = Simulator::new(&config)?;
    debug!(%config, trace = %cli.trace.display(), "starting simulation");

    let stats = if cli.verbose {
        let mut echo = VerboseObserver::new(BufWriter::new(io::stdout().lock()));
        let stats = sim.run_file(&cli.trace, &mut echo)?;
        echo.into_inner().flush()?;
        stats
    } else {
        sim.run_file(&cli.trace, NullObserver)?
    };

    report(cli, &stats)
}

fn report(cli: &Cli, stats: &SimStats) -> Result<(), CliError> {
    stats.print();
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&json_report(stats))?);
    }
    if let Some(path) = &cli.results_file {
        stats
            .write_results(path)
            .map_err(|source| CliError::Results {
                path: path.clone(),
                source,
            })?;
    }
    Ok(())
}

/// Counters plus the derived hit and miss rates.
fn json_report(stats: &SimStats) -> serde_json::Value {
    serde_json::json!({
        "hits": stats.hits,
        "misses": stats.misses,
        "evictions": stats.evictions,
        "records": stats.records,
        "skipped": stats.skipped,
        "hit_rate": stats.hit_rate(),
        "miss_rate": stats.miss_rate(),
    })
}
