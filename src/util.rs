use std::fs;
use std::path::Path;
use crate::puzzle::{Board, PuzzleError};

/// Parses whitespace-separated integers (any line layout) into a board.
pub fn parse_board(input: &str) -> Result<Board, PuzzleError> {
    let mut values: Vec<i64> = Vec::with_capacity(16);

    for token in input.split_whitespace() {
        let value = token
            .parse::<i64>()
            .map_err(|_| PuzzleError::MalformedInput(format!("{:?} is not an integer", token)))?;
        values.push(value);
    }

    Board::from_values(&values)
}

pub fn read_board(path: &Path) -> Result<Board, PuzzleError> {
    let contents = fs::read_to_string(path).map_err(|source| PuzzleError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_board(&contents)
}
