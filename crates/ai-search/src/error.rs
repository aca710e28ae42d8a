use thiserror::Error;

/// Contract violations surfaced by [`AStar`](crate::AStar).
///
/// Failing to reach the goal is not an error; see [`SearchResult`](crate::SearchResult).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("find_path called before reset installed a configuration")]
    NotConfigured,

    #[error("search space produced a negative step cost")]
    NegativeStepCost,

    #[error("node arena exceeded u32::MAX entries")]
    NodeLimit,
}
