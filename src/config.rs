use std::time::Duration;
use serde::Serialize;

pub const DEFAULT_DEPTH_BOUND: usize = 12;

/// Limits for a single search.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct SolverConfig {
    /// Longest move sequence the search will consider.
    pub depth_bound: usize,
    /// Optional wall-clock budget, checked once per frontier pop.
    pub time_limit: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depth_bound: DEFAULT_DEPTH_BOUND,
            time_limit: None,
        }
    }
}

impl SolverConfig {
    pub fn with_depth_bound(mut self, depth_bound: usize) -> Self {
        self.depth_bound = depth_bound;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }
}
