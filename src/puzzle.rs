use std::fmt;
use std::path::PathBuf;
use rustc_hash::FxHashSet;
use serde::Serialize;
use crate::moves::{Direction, Move};
use crate::tile::{Tile, SIDE, TILE_COUNT};
use crate::traits::puzzle::Heuristic;

#[derive(Debug, thiserror::Error)]
pub enum PuzzleError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("No solution found within {depth_bound} moves")]
    SearchExhausted { depth_bound: usize },
    #[error("Time limit elapsed after expanding {expanded} boards")]
    DeadlineElapsed { expanded: usize },
    #[error("Could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShift {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColShift {
    Up,
    Down,
}

/// A permutation of `1..=16` laid out row-major on a 4x4 grid.
///
/// Boards are plain values: every rotation returns a new board and leaves
/// `self` untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
}

/// A child board produced by one rotation, together with the full move
/// history that reaches it and its heuristic estimate.
#[derive(Clone, Debug)]
pub struct Successor {
    pub board: Board,
    pub moves: Vec<Move>,
    pub heuristic: f32,
}

impl Board {
    pub fn solved() -> Self {
        let mut tiles = [Tile::new_unchecked(1); TILE_COUNT];
        for (idx, tile) in tiles.iter_mut().enumerate() {
            *tile = Tile::new_unchecked(idx as u8 + 1);
        }
        Self { tiles }
    }

    /// Builds a board from row-major values, rejecting anything that is not
    /// a permutation of `1..=16`.
    pub fn from_values(values: &[i64]) -> Result<Self, PuzzleError> {
        if values.len() != TILE_COUNT {
            return Err(PuzzleError::MalformedInput(format!(
                "expected {} values, found {}",
                TILE_COUNT,
                values.len()
            )));
        }

        let mut seen = [false; TILE_COUNT + 1];
        let mut tiles = [Tile::new_unchecked(1); TILE_COUNT];

        for (idx, &value) in values.iter().enumerate() {
            let tile = Tile::new(value).ok_or_else(|| {
                PuzzleError::MalformedInput(format!("value {} at position {} is outside 1..=16", value, idx + 1))
            })?;

            if seen[tile.raw() as usize] {
                return Err(PuzzleError::MalformedInput(format!("value {} appears more than once", value)));
            }
            seen[tile.raw() as usize] = true;
            tiles[idx] = tile;
        }

        Ok(Self { tiles })
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn values(&self) -> Vec<u8> {
        self.tiles.iter().map(Tile::raw).collect()
    }

    pub fn get(&self, row: usize, col: usize) -> Tile {
        self.tiles[row * SIDE + col]
    }

    pub fn is_goal(&self) -> bool {
        self.tiles.iter().enumerate().all(|(idx, tile)| tile.solved_idx() == idx)
    }

    pub fn rotate_row(&self, row: usize, shift: RowShift) -> Board {
        assert!(row < SIDE, "row {} out of range", row);
        let mut successor = *self;
        let line = &mut successor.tiles[row * SIDE..(row + 1) * SIDE];
        match shift {
            RowShift::Left => line.rotate_left(1),
            RowShift::Right => line.rotate_right(1),
        }
        successor.debug_check();
        successor
    }

    pub fn rotate_col(&self, col: usize, shift: ColShift) -> Board {
        assert!(col < SIDE, "column {} out of range", col);
        let mut line: [Tile; SIDE] = std::array::from_fn(|row| self.tiles[row * SIDE + col]);
        match shift {
            ColShift::Up => line.rotate_left(1),
            ColShift::Down => line.rotate_right(1),
        }

        let mut successor = *self;
        for (row, tile) in line.into_iter().enumerate() {
            successor.tiles[row * SIDE + col] = tile;
        }
        successor.debug_check();
        successor
    }

    pub fn apply(&self, move_: Move) -> Board {
        let index = move_.index as usize;
        match move_.direction {
            Direction::RowLeft => self.rotate_row(index, RowShift::Left),
            Direction::RowRight => self.rotate_row(index, RowShift::Right),
            Direction::ColUp => self.rotate_col(index, ColShift::Up),
            Direction::ColDown => self.rotate_col(index, ColShift::Down),
        }
    }

    pub fn apply_all<'a>(&self, moves: impl IntoIterator<Item = &'a Move>) -> Board {
        moves.into_iter().fold(*self, |board, move_| board.apply(*move_))
    }

    /// All 16 children of this board, one per rotation, in `Move::ALL` order.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL.iter().map(|&move_| (move_, self.apply(move_))).collect()
    }

    /// Children not yet in `closed`, each carrying `history` extended by the
    /// move that produced it.
    pub fn generate_successors(&self, history: &[Move], closed: &FxHashSet<Board>) -> Vec<Successor> {
        let mut result: Vec<Successor> = Vec::with_capacity(Move::ALL.len());

        for (move_, board) in self.successors() {
            if closed.contains(&board) {
                continue;
            }

            let mut moves = Vec::with_capacity(history.len() + 1);
            moves.extend_from_slice(history);
            moves.push(move_);

            result.push(Successor {
                heuristic: board.get_heuristic(),
                board,
                moves,
            });
        }

        result
    }

    fn debug_check(&self) {
        debug_assert!(
            {
                let mut seen = [false; TILE_COUNT + 1];
                self.tiles.iter().all(|t| !std::mem::replace(&mut seen[t.raw() as usize], true))
            },
            "rotation produced a non-permutation: {:?}",
            self.values()
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..SIDE {
            let line: Vec<String> = (0..SIDE).map(|col| format!("{:>3}", self.get(row, col).raw())).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
