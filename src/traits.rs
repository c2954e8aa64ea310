pub mod puzzle {
    use std::fmt::Write;
    use colored::Colorize;
    use crate::puzzle::Board;
    use crate::tile::{circular_distance, Tile, SIDE};

    pub trait DebugPrintable {
        fn render(&self, manhattan_distance: bool) -> String;

        fn debug_print(&self, manhattan_distance: bool) {
            print!("{}", self.render(manhattan_distance));
        }
    }

    fn border(out: &mut String, left: char, mid: char, right: char) {
        out.push(left);
        for col in 0..SIDE {
            out.push_str("────");
            if col < SIDE - 1 {
                out.push(mid);
            }
        }
        out.push(right);
        out.push('\n');
    }

    impl DebugPrintable for Board {
        /// Box-drawn grid; tiles already on their goal cell are green. With
        /// `manhattan_distance` set, each cell shows its tile's circular
        /// distance instead of its value.
        fn render(&self, manhattan_distance: bool) -> String {
            let mut out = String::new();
            border(&mut out, '┌', '┬', '┐');

            for row in 0..SIDE {
                out.push('│');
                for col in 0..SIDE {
                    let idx = row * SIDE + col;
                    let tile = self.get(row, col);
                    let label = if manhattan_distance {
                        format!("{:>3}", self.circular_manhattan_distance(idx))
                    } else {
                        format!("{:>3}", tile.raw())
                    };

                    if tile.solved_idx() == idx {
                        let _ = write!(out, "{} ", label.green());
                    } else {
                        let _ = write!(out, "{} ", label);
                    }
                    out.push('│');
                }
                out.push('\n');

                if row < SIDE - 1 {
                    border(&mut out, '├', '┼', '┤');
                }
            }

            border(&mut out, '└', '┴', '┘');
            out
        }
    }

    pub trait Heuristic {
        /// Row plus column wrap-around distance of the tile sitting at `idx`.
        fn circular_manhattan_distance(&self, idx: usize) -> u32;

        fn get_heuristic(&self) -> f32;
    }

    impl Heuristic for Board {
        fn circular_manhattan_distance(&self, idx: usize) -> u32 {
            let tile: Tile = self.tiles()[idx];
            let current_row = idx / SIDE;
            let current_col = idx % SIDE;

            circular_distance(current_row, tile.target_row()) + circular_distance(current_col, tile.target_col())
        }

        /// Sum of circular distances divided by four: one rotation moves four
        /// tiles by one step each, so the quotient never exceeds the number of
        /// rotations left.
        fn get_heuristic(&self) -> f32 {
            let mut heuristic: u32 = 0;

            for idx in 0..self.tiles().len() {
                heuristic += self.circular_manhattan_distance(idx);
            }

            heuristic as f32 / SIDE as f32
        }
    }
}

pub(crate) mod search {
    use std::cmp::Ordering;
    use crate::search::FrontierEntry;

    impl PartialEq for FrontierEntry {
        fn eq(&self, other: &Self) -> bool {
            self.cmp(other) == Ordering::Equal
        }
    }

    impl Eq for FrontierEntry { }

    impl PartialOrd for FrontierEntry {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    // Reversed so `BinaryHeap` pops the lowest priority first, and the
    // earliest inserted among equals.
    impl Ord for FrontierEntry {
        fn cmp(&self, other: &Self) -> Ordering {
            other.priority.cmp(&self.priority)
                .then_with(|| other.sequence.cmp(&self.sequence))
        }
    }
}
