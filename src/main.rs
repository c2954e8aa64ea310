use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;
use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Env;
use log::info;
use circular16::config::{SolverConfig, DEFAULT_DEPTH_BOUND};
use circular16::moves::moves_str;
use circular16::report::{solve_files, ReportStatus};
use circular16::DebugPrintable;

#[derive(Debug, Parser)]
#[command(author, version, about = "Solve circular 16-puzzles by row and column rotations")]
struct Cli {
    /// Input files, each holding 16 whitespace-separated integers
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Maximum number of rotations in a solution
    #[arg(long, value_name = "N", default_value_t = DEFAULT_DEPTH_BOUND)]
    depth: usize,

    /// Give up on a board after this many milliseconds
    #[arg(long, value_name = "MS")]
    time_limit_ms: Option<u64>,

    /// Number of worker threads (defaults to Rayon default)
    #[arg(long, value_name = "N")]
    workers: Option<usize>,

    /// Print one JSON report per line instead of plain move lists
    #[arg(long)]
    json: bool,

    /// Draw each initial board before its solution
    #[arg(long)]
    show_board: bool,

    /// Show a progress bar while solving
    #[arg(long)]
    progress: bool,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let mut config = SolverConfig::default().with_depth_bound(cli.depth);
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit(Duration::from_millis(ms));
    }
    info!("Solving {} puzzle(s) with depth bound {}", cli.files.len(), config.depth_bound);

    let reports = solve_files(&cli.files, config, cli.workers, cli.progress)?;

    for report in &reports {
        if cli.json {
            let line = serde_json::to_string(report).context("failed to serialize report")?;
            println!("{}", line);
            continue;
        }

        if cli.show_board {
            if let Some(board) = &report.board {
                board.debug_print(false);
            }
        }

        match report.status {
            ReportStatus::Solved => println!("{}", moves_str(&report.moves)),
            _ => println!(
                "{}: {}",
                report.source.display(),
                report.error.as_deref().unwrap_or("no solution")
            ),
        }
    }

    if reports.iter().all(|r| r.is_solved()) {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}
