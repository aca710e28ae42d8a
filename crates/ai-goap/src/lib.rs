//! Goal-oriented action planning on top of the `ai-search` A* engine.
//!
//! A planning domain describes facts as [`StateVariable`]s inside a [`WorldState`] and
//! transitions as [`Operator`]s. [`PlannerHelper`] turns a set of operators plus cost and goal
//! functors into a search space; [`Planner`] runs the query and [`PlanExecutor`] plays the
//! resulting plan back against a live state.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod executor;
pub mod helper;
pub mod operator;
pub mod planner;
pub mod real;
pub mod state;
pub mod world_state;

pub use ai_search::SearchResult;
pub use error::GoapError;
pub use executor::{PlanExecutor, StepStatus};
pub use helper::PlannerHelper;
pub use operator::{Condition, Conditional, NpcOperator, Operator};
pub use planner::{Planner, PlannerConfig};
pub use real::Real;
pub use state::{StateValue, StateVariable};
pub use world_state::{DesiredStateFn, RemainingCostFn, WorldState};
