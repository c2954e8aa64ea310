use std::collections::BinaryHeap;
use std::time::Instant;
use log::{debug, trace};
use ordered_float::OrderedFloat;
use rustc_hash::FxHashSet;
use serde::Serialize;
use crate::config::SolverConfig;
use crate::moves::{moves_str, Move};
use crate::puzzle::Board;
use crate::traits::puzzle::Heuristic;

/// A board on the frontier with the moves that reached it.
#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    pub moves: Vec<Move>,
}

impl SearchNode {
    pub fn path_cost(&self) -> usize {
        self.moves.len()
    }
}

/// Ordering lives in `traits::search`.
#[derive(Debug)]
pub(crate) struct FrontierEntry {
    pub(crate) priority: OrderedFloat<f32>,
    pub(crate) sequence: u64,
    pub(crate) node: SearchNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchState {
    Idle,
    Searching,
    Solved,
    Exhausted,
    DeadlineElapsed,
}

impl SearchState {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SearchState::Idle | SearchState::Searching)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    Solved(Vec<Move>),
    Exhausted,
    DeadlineElapsed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Boards inserted into the closed set.
    pub expanded: usize,
    /// Successors produced after closed-set filtering.
    pub generated: usize,
    pub max_frontier: usize,
}

/// One best-first search from a single initial board.
///
/// A `Search` owns its frontier and closed set and is consumed by
/// [`Search::run`]; start a new one for every board.
pub struct Search {
    config: SolverConfig,
    initial: Board,
    frontier: BinaryHeap<FrontierEntry>,
    closed: FxHashSet<Board>,
    state: SearchState,
    stats: SearchStats,
    sequence: u64,
    deadline: Option<Instant>,
    solution: Vec<Move>,
}

impl Search {
    pub fn new(initial: Board, config: SolverConfig) -> Self {
        Self {
            config,
            initial,
            frontier: BinaryHeap::new(),
            closed: FxHashSet::default(),
            state: SearchState::Idle,
            stats: SearchStats::default(),
            sequence: 0,
            deadline: None,
            solution: vec![],
        }
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    fn push(&mut self, node: SearchNode, heuristic: f32) {
        let priority = OrderedFloat(heuristic + node.path_cost() as f32);
        self.frontier.push(FrontierEntry { priority, sequence: self.sequence, node });
        self.sequence += 1;
        self.stats.max_frontier = self.stats.max_frontier.max(self.frontier.len());
    }

    fn start(&mut self) {
        debug!(
            "starting search: depth bound {}, heuristic {}",
            self.config.depth_bound,
            self.initial.get_heuristic()
        );
        self.deadline = self.config.time_limit.map(|limit| Instant::now() + limit);

        if self.initial.is_goal() {
            self.state = SearchState::Solved;
            return;
        }

        let root = SearchNode { board: self.initial, moves: vec![] };
        self.push(root, self.initial.get_heuristic());
        self.state = SearchState::Searching;
    }

    /// Advances the search by one frontier pop and returns the new state.
    /// Terminal states are sticky.
    pub fn step(&mut self) -> SearchState {
        match self.state {
            SearchState::Idle => {
                self.start();
                return self.state;
            }
            SearchState::Searching => {}
            terminal => return terminal,
        }

        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            self.state = SearchState::DeadlineElapsed;
            return self.state;
        }

        let Some(FrontierEntry { priority, node, .. }) = self.frontier.pop() else {
            self.state = SearchState::Exhausted;
            return self.state;
        };

        if !self.closed.insert(node.board) {
            return self.state;
        }
        self.stats.expanded += 1;
        trace!("expanding f={} depth={} [{}]", priority, node.path_cost(), moves_str(&node.moves));

        // Children would be one move past the bound.
        if node.path_cost() >= self.config.depth_bound {
            return self.state;
        }

        let successors = node.board.generate_successors(&node.moves, &self.closed);
        self.stats.generated += successors.len();

        for successor in successors {
            if successor.board.is_goal() {
                self.solution = successor.moves;
                self.state = SearchState::Solved;
                return self.state;
            }

            let child = SearchNode { board: successor.board, moves: successor.moves };
            self.push(child, successor.heuristic);
        }

        self.state
    }

    pub fn run(mut self) -> (SearchOutcome, SearchStats) {
        while !self.step().is_terminal() {}

        let outcome = match self.state {
            SearchState::Solved => SearchOutcome::Solved(std::mem::take(&mut self.solution)),
            SearchState::DeadlineElapsed => SearchOutcome::DeadlineElapsed,
            _ => SearchOutcome::Exhausted,
        };

        debug!(
            "search finished: {:?} after {} expansions ({} generated, peak frontier {})",
            self.state, self.stats.expanded, self.stats.generated, self.stats.max_frontier
        );

        (outcome, self.stats)
    }
}

pub fn solve(initial: Board, config: SolverConfig) -> (SearchOutcome, SearchStats) {
    Search::new(initial, config).run()
}
