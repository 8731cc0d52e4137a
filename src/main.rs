use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use knapsack_anneal::instance::{Instance, SolutionRecord};
use knapsack_anneal::sa::{SaConfig, SaResult, SaRunner};
use rayon::prelude::*;
use tracing::{debug, info, warn};

/// Approximate 0/1 knapsack instances with simulated annealing.
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// Instance file, one `id n capacity w1 v1 ...` line per instance
    #[arg(short = 'f', long)]
    inst_file: PathBuf,

    /// File the solution lines are written to
    #[arg(short, long, default_value = "output.sol.dat")]
    output: PathBuf,

    /// Independent solves per instance; the best result is kept
    #[arg(short, long, default_value_t = 1)]
    repeat: usize,

    /// Initial temperature for the annealing search
    #[arg(short, long, default_value_t = 100.0)]
    temperature: f64,

    /// Search steps per cooling round
    #[arg(short = 'n', long, default_value_t = 100)]
    steps: usize,

    /// Base RNG seed; omit to seed from OS entropy
    #[arg(long)]
    seed: Option<u64>,

    /// Worker threads for the batch (each instance still solves sequentially)
    #[arg(short = 'j', long, default_value_t = 1)]
    threads: usize,

    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), anyhow::Error> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(if cli.debug {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .init();

    let base_config = SaConfig::default()
        .with_initial_temperature(cli.temperature)
        .with_steps_per_round(cli.steps);
    base_config
        .validate()
        .map_err(anyhow::Error::msg)
        .context("invalid solver parameters")?;

    rayon::ThreadPoolBuilder::new()
        .num_threads(cli.threads)
        .build_global()
        .context("building worker pool")?;

    let started = Instant::now();
    let contents = fs::read_to_string(&cli.inst_file)
        .with_context(|| format!("reading {}", cli.inst_file.display()))?;
    let lines: Vec<&str> = contents
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect();
    info!(
        "solving {} instances from {}",
        lines.len(),
        cli.inst_file.display()
    );

    let bar = ProgressBar::new(lines.len() as u64);
    bar.set_style(
        ProgressStyle::default_bar()
            .template("[{bar:40}] {pos}/{len} ({elapsed})")
            .unwrap(),
    );

    let records: Vec<Option<SolutionRecord>> = lines
        .par_iter()
        .enumerate()
        .map(|(line_no, &line)| {
            let record = solve_line(line_no, line, &cli, &base_config);
            bar.inc(1);
            record
        })
        .collect();
    bar.finish_and_clear();

    let mut writer = BufWriter::new(
        File::create(&cli.output)
            .with_context(|| format!("creating {}", cli.output.display()))?,
    );
    let mut written = 0usize;
    for record in records.into_iter().flatten() {
        writeln!(writer, "{record}")?;
        written += 1;
    }
    writer.flush()?;

    info!(
        "wrote {}/{} solutions to {} in {:.2?}",
        written,
        lines.len(),
        cli.output.display(),
        started.elapsed()
    );
    Ok(())
}

/// Parses and solves one instance line. Failures are logged and skipped so
/// the rest of the batch still runs.
fn solve_line(
    line_no: usize,
    line: &str,
    cli: &Cli,
    base_config: &SaConfig,
) -> Option<SolutionRecord> {
    let instance: Instance = match line.parse() {
        Ok(instance) => instance,
        Err(err) => {
            warn!("line {}: {err}; skipping", line_no + 1);
            return None;
        }
    };

    let mut best: Option<SaResult> = None;
    let repeat = cli.repeat.max(1);
    for attempt in 0..repeat {
        let mut config = base_config.clone();
        if let Some(base_seed) = cli.seed {
            config = config.with_seed(run_seed(base_seed, line_no, repeat, attempt));
        }
        match SaRunner::run(&instance, &config) {
            Ok(result) => {
                debug!(
                    "line {}: attempt {} found value {} after {} rounds",
                    line_no + 1,
                    attempt + 1,
                    result.best_value,
                    result.rounds
                );
                if best
                    .as_ref()
                    .is_none_or(|kept| result.best_value > kept.best_value)
                {
                    best = Some(result);
                }
            }
            Err(err) => {
                warn!("line {}: {err}; skipping", line_no + 1);
                return None;
            }
        }
    }

    let result = best?;
    Some(SolutionRecord {
        id: instance.id,
        item_count: instance.len(),
        best_value: result.best_value,
        selection: result.selection,
    })
}

/// Derives a distinct, reproducible seed for each (instance, attempt) pair
/// from the base seed, so results are stable for any `--threads` value.
fn run_seed(base: u64, line_no: usize, repeat: usize, attempt: usize) -> u64 {
    base.wrapping_add((line_no * repeat + attempt) as u64)
}
