//! Umbrella crate that re-exports the `ai-*` building blocks.
//!
//! `search` is the generic A* engine; `goap` plans operator sequences over world states with
//! it; `nav` runs it over grids and waypoint graphs.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

#[cfg(feature = "search")]
#[cfg_attr(docsrs, doc(cfg(feature = "search")))]
pub use ai_search as search;

#[cfg(feature = "goap")]
#[cfg_attr(docsrs, doc(cfg(feature = "goap")))]
pub use ai_goap as goap;

#[cfg(feature = "nav")]
#[cfg_attr(docsrs, doc(cfg(feature = "nav")))]
pub use ai_nav as nav;

/// The types most callers need, in one import.
pub mod prelude {
    pub use ai_search::{AStar, AStarConfig, SearchResult, SearchSpace, Successor, Timer};

    #[cfg(feature = "goap")]
    pub use ai_goap::{
        Condition, NpcOperator, Operator, PlanExecutor, Planner, PlannerHelper, StepStatus,
        WorldState,
    };

    #[cfg(feature = "nav")]
    pub use ai_nav::{NavGrid, Navigator, Vec2, Vec3, WaypointGraph};
}
