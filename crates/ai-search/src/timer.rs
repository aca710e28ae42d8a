use std::time::{Duration, Instant};

use crate::SearchStats;

/// Deadline check consulted by the engine between expansions.
///
/// This is the only way to bound a search. An expired timer turns the running search into a
/// [`SearchResult::PartialPath`](crate::SearchResult::PartialPath).
pub trait Timer {
    /// Called once at the start of every `find_path`.
    fn start(&mut self) {}

    fn expired(&self, stats: &SearchStats) -> bool;
}

/// Never expires.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Unbounded;

impl Timer for Unbounded {
    fn expired(&self, _stats: &SearchStats) -> bool {
        false
    }
}

/// Expires once the given number of nodes has been expanded.
///
/// Useful for frame-sliced AI updates and for reproducible tests, since it does not depend on
/// wall-clock time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpansionBudget(pub usize);

impl Timer for ExpansionBudget {
    fn expired(&self, stats: &SearchStats) -> bool {
        stats.expansions >= self.0
    }
}

/// Wall-clock budget measured from the start of each search.
#[derive(Debug, Clone, Copy)]
pub struct WallClock {
    budget: Duration,
    started: Option<Instant>,
}

impl WallClock {
    pub fn new(budget: Duration) -> Self {
        Self {
            budget,
            started: None,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }
}

impl Timer for WallClock {
    fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    fn expired(&self, _stats: &SearchStats) -> bool {
        self.started
            .map(|started| started.elapsed() >= self.budget)
            .unwrap_or(false)
    }
}
