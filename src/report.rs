use std::path::{Path, PathBuf};
use std::time::Instant;
use chrono::{DateTime, Utc};
use indicatif::{ProgressBar, ProgressStyle};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use crate::config::SolverConfig;
use crate::moves::Move;
use crate::puzzle::{Board, PuzzleError};
use crate::search::{self, SearchOutcome, SearchStats};
use crate::util::read_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Solved,
    Exhausted,
    DeadlineElapsed,
    Malformed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub source: PathBuf,
    pub board: Option<Board>,
    pub status: ReportStatus,
    pub moves: Vec<Move>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub stats: SearchStats,
    pub elapsed_ms: u128,
    pub finished_at: DateTime<Utc>,
}

impl SolveReport {
    pub fn is_solved(&self) -> bool {
        self.status == ReportStatus::Solved
    }

    fn malformed(source: &Path, err: PuzzleError, started: Instant) -> Self {
        Self {
            source: source.to_path_buf(),
            board: None,
            status: ReportStatus::Malformed,
            moves: vec![],
            error: Some(err.to_string()),
            stats: SearchStats::default(),
            elapsed_ms: started.elapsed().as_millis(),
            finished_at: Utc::now(),
        }
    }
}

pub fn solve_path(path: &Path, config: SolverConfig) -> SolveReport {
    let started = Instant::now();

    let board = match read_board(path) {
        Ok(board) => board,
        Err(err) => {
            warn!("{}: {}", path.display(), err);
            return SolveReport::malformed(path, err, started);
        }
    };

    let (outcome, stats) = search::solve(board, config);
    let (status, moves, error) = match outcome {
        SearchOutcome::Solved(moves) => (ReportStatus::Solved, moves, None),
        SearchOutcome::Exhausted => {
            let err = PuzzleError::SearchExhausted { depth_bound: config.depth_bound };
            warn!("{}: {}", path.display(), err);
            (ReportStatus::Exhausted, vec![], Some(err.to_string()))
        }
        SearchOutcome::DeadlineElapsed => {
            let err = PuzzleError::DeadlineElapsed { expanded: stats.expanded };
            warn!("{}: {}", path.display(), err);
            (ReportStatus::DeadlineElapsed, vec![], Some(err.to_string()))
        }
    };

    SolveReport {
        source: path.to_path_buf(),
        board: Some(board),
        status,
        moves,
        error,
        stats,
        elapsed_ms: started.elapsed().as_millis(),
        finished_at: Utc::now(),
    }
}

pub(crate) fn default_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("[{elapsed_precise}] {wide_bar} {pos}/{len}") {
        pb.set_style(style.progress_chars("=> "));
    }
    pb
}

/// Solves every file independently, in parallel, returning reports in input
/// order. `workers` sizes a dedicated rayon pool; `None` uses the global one.
pub fn solve_files(
    paths: &[PathBuf],
    config: SolverConfig,
    workers: Option<usize>,
    progress: bool,
) -> anyhow::Result<Vec<SolveReport>> {
    let pb = if progress {
        default_progress_bar(paths.len() as u64)
    } else {
        ProgressBar::hidden()
    };

    let process = || -> Vec<SolveReport> {
        paths
            .par_iter()
            .map(|path| {
                let report = solve_path(path, config);
                pb.inc(1);
                report
            })
            .collect()
    };

    let reports = if let Some(n) = workers {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build()?
            .install(process)
    } else {
        process()
    };

    pb.finish_with_message("puzzles processed");

    let solved = reports.iter().filter(|r| r.is_solved()).count();
    info!("Solved {} of {} puzzles", solved, reports.len());

    Ok(reports)
}
