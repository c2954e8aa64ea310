use serde::Serialize;

pub const SIDE: usize = 4;
pub const TILE_COUNT: usize = SIDE * SIDE;

/// Goal row of every tile value, indexed by value (index 0 unused).
const TARGET_ROW: [usize; TILE_COUNT + 1] = target_rows();
/// Goal column of every tile value, indexed by value (index 0 unused).
const TARGET_COL: [usize; TILE_COUNT + 1] = target_cols();

const fn target_rows() -> [usize; TILE_COUNT + 1] {
    let mut table = [0; TILE_COUNT + 1];
    let mut value = 1;
    while value <= TILE_COUNT {
        table[value] = (value - 1) / SIDE;
        value += 1;
    }
    table
}

const fn target_cols() -> [usize; TILE_COUNT + 1] {
    let mut table = [0; TILE_COUNT + 1];
    let mut value = 1;
    while value <= TILE_COUNT {
        table[value] = (value - 1) % SIDE;
        value += 1;
    }
    table
}

/// A single numbered tile, `1..=16`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Tile(u8);

impl Tile {
    /// Returns `None` when `value` is outside `1..=16`.
    pub fn new(value: i64) -> Option<Self> {
        if (1..=TILE_COUNT as i64).contains(&value) {
            Some(Self(value as u8))
        } else {
            None
        }
    }

    pub(crate) const fn new_unchecked(value: u8) -> Self {
        Self(value)
    }

    pub fn raw(&self) -> u8 {
        self.0
    }

    pub fn target_row(&self) -> usize {
        TARGET_ROW[self.0 as usize]
    }

    pub fn target_col(&self) -> usize {
        TARGET_COL[self.0 as usize]
    }

    /// Row-major index this tile occupies on the goal board.
    pub fn solved_idx(&self) -> usize {
        self.0 as usize - 1
    }
}

/// Shortest distance between two lines on a 4-cycle.
pub fn circular_distance(a: usize, b: usize) -> u32 {
    let d = a.abs_diff(b);
    d.min(SIDE - d) as u32
}
