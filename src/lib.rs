//! Solver for the circular 16-puzzle: a 4x4 grid of `1..=16` where each move
//! rotates a whole row left/right or a whole column up/down by one cell.

pub mod config;
pub mod moves;
pub mod puzzle;
pub mod report;
pub mod search;
pub mod tile;
pub mod traits;
pub mod util;

#[cfg(test)]
mod test;

use std::fmt;
use std::path::Path;
use serde::Serialize;

pub use config::SolverConfig;
pub use moves::{Direction, Move};
pub use puzzle::{Board, PuzzleError};
pub use search::{Search, SearchOutcome, SearchStats};
pub use traits::puzzle::{DebugPrintable, Heuristic};

/// A solving move sequence, in the order to apply from the initial board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Solution {
    pub moves: Vec<Move>,
    pub stats: SearchStats,
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&moves::moves_str(&self.moves))
    }
}

pub fn solve_board(board: Board, config: SolverConfig) -> Result<Solution, PuzzleError> {
    let (outcome, stats) = search::solve(board, config);

    match outcome {
        SearchOutcome::Solved(moves) => Ok(Solution { moves, stats }),
        SearchOutcome::Exhausted => Err(PuzzleError::SearchExhausted { depth_bound: config.depth_bound }),
        SearchOutcome::DeadlineElapsed => Err(PuzzleError::DeadlineElapsed { expanded: stats.expanded }),
    }
}

/// Validates `values` as a board before searching; malformed input never
/// reaches the search loop.
pub fn solve_values(values: &[i64], config: SolverConfig) -> Result<Solution, PuzzleError> {
    let board = Board::from_values(values)?;
    solve_board(board, config)
}

pub fn solve_file(path: &Path, config: SolverConfig) -> Result<Solution, PuzzleError> {
    let board = util::read_board(path)?;
    solve_board(board, config)
}
