//! Deterministic, domain-agnostic A* search.
//!
//! The engine knows nothing about what it is searching over. A [`SearchSpace`] supplies the
//! successor generator, the heuristic and the goal test; [`AStar`] owns the node arena and the
//! open/closed bookkeeping. The same driver backs waypoint pathfinding and GOAP planning.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod astar;
pub mod config;
pub mod cost;
pub mod error;
pub mod node;
pub mod timer;

pub use astar::{AStar, SearchPath, SearchResult, SearchSpace, SearchStats, Successor};
pub use config::AStarConfig;
pub use cost::Cost;
pub use error::SearchError;
pub use node::{NodeId, NodeStatus, SearchNode};
pub use timer::{ExpansionBudget, Timer, Unbounded, WallClock};
