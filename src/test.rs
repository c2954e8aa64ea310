#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;
    use rustc_hash::FxHashSet;
    use crate::moves::{Direction, Move};
    use crate::puzzle::{Board, ColShift, PuzzleError, RowShift};
    use crate::report::{solve_path, ReportStatus};
    use crate::search::{Search, SearchOutcome, SearchState};
    use crate::traits::puzzle::{DebugPrintable, Heuristic};
    use crate::util::parse_board;
    use crate::{solve_board, solve_values, SolverConfig};

    fn scrambled() -> Board {
        Board::from_values(&[6, 15, 3, 8, 13, 2, 16, 11, 1, 10, 4, 7, 9, 14, 12, 5]).unwrap()
    }

    fn goal_values() -> Vec<i64> {
        (1..=16).collect()
    }

    fn is_permutation(board: &Board) -> bool {
        let mut values = board.values();
        values.sort_unstable();
        values == (1..=16).collect::<Vec<u8>>()
    }

    #[test]
    fn row_rotations_are_inverse() {
        for board in [Board::solved(), scrambled()] {
            for row in 0..4 {
                let there = board.rotate_row(row, RowShift::Left);
                assert_eq!(there.rotate_row(row, RowShift::Right), board);
                let back = board.rotate_row(row, RowShift::Right);
                assert_eq!(back.rotate_row(row, RowShift::Left), board);
            }
        }
    }

    #[test]
    fn col_rotations_are_inverse() {
        for board in [Board::solved(), scrambled()] {
            for col in 0..4 {
                let there = board.rotate_col(col, ColShift::Up);
                assert_eq!(there.rotate_col(col, ColShift::Down), board);
                let back = board.rotate_col(col, ColShift::Down);
                assert_eq!(back.rotate_col(col, ColShift::Up), board);
            }
        }
    }

    #[test]
    fn every_move_preserves_the_permutation() {
        for board in [Board::solved(), scrambled()] {
            for move_ in Move::ALL {
                let next = board.apply(move_);
                assert!(is_permutation(&next), "{} broke the board: {:?}", move_, next.values());
                assert_eq!(next.apply(move_.inverse()), board);
            }
        }
    }

    #[test]
    fn rotate_row_shifts_one_cell() {
        let board = Board::solved();

        let right = board.rotate_row(0, RowShift::Right);
        assert_eq!(&right.values()[..4], &[4, 1, 2, 3]);
        assert_eq!(&right.values()[4..], &board.values()[4..]);

        let left = board.rotate_row(3, RowShift::Left);
        assert_eq!(&left.values()[12..], &[14, 15, 16, 13]);
        assert_eq!(&left.values()[..12], &board.values()[..12]);
    }

    #[test]
    fn rotate_col_shifts_one_cell() {
        let board = Board::solved();

        let down = board.rotate_col(2, ColShift::Down);
        let values = down.values();
        assert_eq!([values[2], values[6], values[10], values[14]], [15, 3, 7, 11]);

        let up = board.rotate_col(0, ColShift::Up);
        let values = up.values();
        assert_eq!([values[0], values[4], values[8], values[12]], [5, 9, 13, 1]);
        assert_eq!(values[1], 2);
    }

    #[test]
    fn rotations_leave_input_untouched() {
        let board = scrambled();
        let before = board.values();
        let _ = board.rotate_row(1, RowShift::Left);
        let _ = board.rotate_col(3, ColShift::Down);
        assert_eq!(board.values(), before);
    }

    #[test]
    fn detects_goal() {
        assert!(Board::solved().is_goal());
        assert!(Board::from_values(&goal_values()).unwrap().is_goal());
        assert!(!scrambled().is_goal());
        assert!(!Board::solved().apply(Move::col_down(1)).is_goal());
    }

    #[test]
    fn heuristic_is_zero_on_goal() {
        assert_eq!(Board::solved().get_heuristic(), 0.0);
        assert!(scrambled().get_heuristic() > 0.0);
    }

    #[test]
    fn heuristic_wraps_around() {
        // 4 1 2 3: tile 4 is three columns away in a straight line but one by wrap-around.
        let board = Board::solved().rotate_row(0, RowShift::Right);
        assert_eq!(board.circular_manhattan_distance(0), 1);
        assert_eq!(board.circular_manhattan_distance(1), 1);
        assert_eq!(board.circular_manhattan_distance(4), 0);
        assert_eq!(board.get_heuristic(), 1.0);

        let board = Board::solved().rotate_col(2, ColShift::Down).rotate_col(2, ColShift::Down);
        assert_eq!(board.circular_manhattan_distance(2), 2);
        assert_eq!(board.get_heuristic(), 2.0);
    }

    #[test]
    fn heuristic_never_overestimates_near_goal() {
        let mut distance: HashMap<Board, usize> = HashMap::new();
        let mut layer = vec![Board::solved()];
        distance.insert(Board::solved(), 0);

        for depth in 1..=3 {
            let mut next = vec![];
            for board in &layer {
                for (_, child) in board.successors() {
                    if !distance.contains_key(&child) {
                        distance.insert(child, depth);
                        next.push(child);
                    }
                }
            }
            layer = next;
        }

        for (board, moves) in &distance {
            assert!(board.get_heuristic() >= 0.0);
            assert!(
                board.get_heuristic() <= *moves as f32,
                "h={} exceeds {} for {:?}",
                board.get_heuristic(),
                moves,
                board.values()
            );
        }
    }

    #[test]
    fn successors_cover_all_rotations() {
        let board = scrambled();
        let successors = board.successors();

        assert_eq!(successors.len(), 16);
        for (_, child) in &successors {
            assert_ne!(*child, board);
        }

        let distinct: FxHashSet<Board> = successors.iter().map(|(_, b)| *b).collect();
        assert_eq!(distinct.len(), 16);
    }

    #[test]
    fn generate_successors_filters_closed_boards() {
        let board = Board::solved().apply(Move::row_right(0));
        let history = vec![Move::row_right(0)];

        let open = board.generate_successors(&history, &FxHashSet::default());
        assert_eq!(open.len(), 16);
        assert!(open.iter().all(|s| s.moves.len() == 2 && s.moves[0] == Move::row_right(0)));

        let mut closed = FxHashSet::default();
        closed.insert(Board::solved());
        let filtered = board.generate_successors(&history, &closed);
        assert_eq!(filtered.len(), 15);
        assert!(filtered.iter().all(|s| !s.board.is_goal()));
        assert!(filtered.iter().all(|s| s.heuristic == s.board.get_heuristic()));
    }

    #[test]
    fn encodes_moves() {
        assert_eq!(Move::row_right(0).to_string(), "R1");
        assert_eq!(Move::row_left(2).code(), "L3");
        assert_eq!(Move::col_up(1).to_string(), "U2");
        assert_eq!(Move::col_down(3).to_string(), "D4");

        for move_ in Move::ALL {
            assert_eq!(move_.code().parse::<Move>().unwrap(), move_);
            assert_eq!(move_.inverse().inverse(), move_);
        }

        assert_eq!(Move::row_left(1).inverse(), Move::row_right(1));
        assert_eq!(Move::col_up(3).inverse().direction, Direction::ColDown);
    }

    #[test]
    fn rejects_bad_move_codes() {
        for code in ["", "L", "L0", "L5", "X1", "R12", "u1"] {
            assert!(matches!(code.parse::<Move>(), Err(PuzzleError::MalformedInput(_))), "{:?}", code);
        }
        assert!(Move::new(Direction::RowLeft, 4).is_err());
        assert_eq!(Move::new(Direction::ColUp, 3).unwrap(), Move::col_up(3));
    }

    #[test]
    fn already_solved_returns_no_moves() {
        let solution = solve_values(&goal_values(), SolverConfig::default()).unwrap();
        assert!(solution.moves.is_empty());
        assert_eq!(solution.stats.expanded, 0);
        assert_eq!(solution.to_string(), "");
    }

    #[test]
    fn solves_single_row_rotation() {
        let board = Board::solved().rotate_row(0, RowShift::Right);
        let solution = solve_board(board, SolverConfig::default()).unwrap();

        assert_eq!(solution.to_string(), "L1");
        assert_eq!(solution.stats.expanded, 1);
        assert_eq!(solution.stats.generated, 16);
    }

    #[test]
    fn solves_single_col_rotation() {
        let board = Board::solved().rotate_col(2, ColShift::Down);
        let solution = solve_board(board, SolverConfig::default()).unwrap();

        assert_eq!(solution.moves, vec![Move::col_up(2)]);
        assert_eq!(solution.to_string(), "U3");
    }

    #[test]
    fn solves_three_move_scramble() {
        let scramble = [Move::row_right(0), Move::col_down(1), Move::row_left(2)];
        let board = Board::solved().apply_all(&scramble);

        let solution = solve_board(board, SolverConfig::default()).unwrap();

        assert!(!solution.moves.is_empty());
        assert!(solution.moves.len() <= 12);
        assert!(board.apply_all(&solution.moves).is_goal());
    }

    #[test]
    fn exhausts_when_bound_is_too_small() {
        let board = Board::solved().apply(Move::row_right(0)).apply(Move::col_down(3));
        let config = SolverConfig::default().with_depth_bound(1);

        let (outcome, stats) = Search::new(board, config).run();
        assert_eq!(outcome, SearchOutcome::Exhausted);
        assert_eq!(stats.expanded, 17);

        let err = solve_board(board, config).unwrap_err();
        assert!(matches!(err, PuzzleError::SearchExhausted { depth_bound: 1 }));

        let err = solve_board(scrambled(), SolverConfig::default().with_depth_bound(0)).unwrap_err();
        assert!(matches!(err, PuzzleError::SearchExhausted { depth_bound: 0 }));
    }

    #[test]
    fn solution_fits_bound_exactly() {
        let board = Board::solved().apply(Move::row_right(0)).apply(Move::col_down(3));
        let solution = solve_board(board, SolverConfig::default().with_depth_bound(2)).unwrap();
        assert_eq!(solution.moves.len(), 2);
        assert!(board.apply_all(&solution.moves).is_goal());
    }

    #[test]
    fn rejects_malformed_boards() {
        let mut short = goal_values();
        short.pop();
        assert!(matches!(solve_values(&short, SolverConfig::default()), Err(PuzzleError::MalformedInput(_))));

        let mut duplicate = goal_values();
        duplicate[15] = 1;
        assert!(matches!(solve_values(&duplicate, SolverConfig::default()), Err(PuzzleError::MalformedInput(_))));

        let mut out_of_range = goal_values();
        out_of_range[0] = 17;
        assert!(matches!(Board::from_values(&out_of_range), Err(PuzzleError::MalformedInput(_))));

        let mut long = goal_values();
        long.push(1);
        assert!(Board::from_values(&long).is_err());
    }

    #[test]
    fn parses_whitespace_separated_input() {
        let board = parse_board("5 7 8 1\n10 2 4 3\n6 9 11 12\n15 13 14 16\n").unwrap();
        assert_eq!(board.get(0, 0).raw(), 5);
        assert_eq!(board.get(3, 3).raw(), 16);

        assert!(matches!(parse_board("1 2 3"), Err(PuzzleError::MalformedInput(_))));
        assert!(matches!(parse_board("1 2 x 4"), Err(PuzzleError::MalformedInput(_))));
        assert!(matches!(parse_board("0 1 2 3 4 5 6 7 8 9 10 11 12 13 14 15"), Err(PuzzleError::MalformedInput(_))));
    }

    #[test]
    fn search_moves_through_states() {
        let board = Board::solved().rotate_row(1, RowShift::Left);
        let mut search = Search::new(board, SolverConfig::default());

        assert_eq!(search.state(), SearchState::Idle);
        assert_eq!(search.step(), SearchState::Searching);
        assert_eq!(search.step(), SearchState::Solved);
        assert_eq!(search.step(), SearchState::Solved);
        assert_eq!(search.stats().expanded, 1);
    }

    #[test]
    fn deadline_stops_search() {
        let config = SolverConfig::default().with_time_limit(Duration::ZERO);

        let (outcome, _) = Search::new(scrambled(), config).run();
        assert_eq!(outcome, SearchOutcome::DeadlineElapsed);

        assert!(matches!(solve_board(scrambled(), config), Err(PuzzleError::DeadlineElapsed { .. })));

        // A goal board is recognised before the clock is consulted.
        assert!(solve_board(Board::solved(), config).unwrap().moves.is_empty());
    }

    #[test]
    fn renders_board_grid() {
        let rendered = Board::solved().render(false);
        assert_eq!(rendered.lines().count(), 9);
        assert!(rendered.starts_with('┌'));
        assert!(rendered.contains("16"));

        let distances = Board::solved().rotate_row(0, RowShift::Right).render(true);
        assert_eq!(distances.lines().count(), 9);

        let plain = Board::solved().to_string();
        assert_eq!(plain.lines().next().unwrap().split_whitespace().collect::<Vec<_>>(), ["1", "2", "3", "4"]);
    }

    #[test]
    fn reports_solved_and_malformed_files() {
        let dir = std::env::temp_dir();
        let solved_path = dir.join(format!("circular16-report-{}-ok.txt", std::process::id()));
        let broken_path = dir.join(format!("circular16-report-{}-bad.txt", std::process::id()));

        std::fs::write(&solved_path, "4 1 2 3\n5 6 7 8\n9 10 11 12\n13 14 15 16\n").unwrap();
        std::fs::write(&broken_path, "1 2 3 4 5 6 7 8 9 10 11 12 13 14 15\n").unwrap();

        let report = solve_path(&solved_path, SolverConfig::default());
        assert_eq!(report.status, ReportStatus::Solved);
        assert_eq!(report.moves, vec![Move::row_left(0)]);

        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"status\":\"solved\""));
        assert!(json.contains("\"moves\":[\"L1\"]"));

        let solution = crate::solve_file(&solved_path, SolverConfig::default()).unwrap();
        assert_eq!(solution.to_string(), "L1");

        let report = solve_path(&broken_path, SolverConfig::default());
        assert_eq!(report.status, ReportStatus::Malformed);
        assert!(report.board.is_none());
        assert!(report.error.is_some());

        let missing = solve_path(&dir.join("circular16-does-not-exist.txt"), SolverConfig::default());
        assert_eq!(missing.status, ReportStatus::Malformed);

        let _ = std::fs::remove_file(solved_path);
        let _ = std::fs::remove_file(broken_path);
    }
}
