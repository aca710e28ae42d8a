use ai_search::{AStar, AStarConfig, SearchResult, SearchStats, Timer, Unbounded};

use crate::{GoapError, Operator, PlannerHelper, WorldState};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Optional per-query limits. The default is unlimited: only a configured cap or the
/// planner's [`Timer`] can turn a search into a partial plan.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlannerConfig {
    /// Expansion budget per query; running out yields a partial plan.
    pub max_expansions: Option<usize>,
    /// Plans costlier than this are never considered.
    pub max_cost: Option<f32>,
}

/// GOAP planner: the A* engine specialised to operator application over world states.
///
/// Each [`generate_plan`](Self::generate_plan) is one query (idle, searching, then one of the
/// three [`SearchResult`]s). There is no way to pause and resume a query.
pub struct Planner<'a, T = Unbounded> {
    search: AStar<PlannerHelper<'a>, T>,
    config: PlannerConfig,
}

impl<'a> Planner<'a, Unbounded> {
    pub fn new(helper: PlannerHelper<'a>) -> Self {
        Self::with_timer(helper, Unbounded)
    }
}

impl<'a, T> Planner<'a, T>
where
    T: Timer,
{
    pub fn with_timer(helper: PlannerHelper<'a>, timer: T) -> Self {
        Self {
            search: AStar::with_timer(helper, timer),
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Search from the helper's current state until its goal predicate holds.
    ///
    /// `PathFound` with an empty plan means the current state already satisfies the goal.
    pub fn generate_plan(&mut self) -> Result<SearchResult, GoapError> {
        let start = self.search.space().current_state().clone();
        let config = AStarConfig {
            max_cost: self.config.max_cost,
            max_expansions: self.config.max_expansions,
            ..AStarConfig::new(start)
        };

        self.search.reset(config);
        let result = self.search.find_path()?;

        tracing::debug!(
            ?result,
            steps = self.plan().len(),
            cost = self.plan_cost(),
            expansions = self.search.stats().expansions,
            "goap plan generated"
        );
        Ok(result)
    }

    /// Operators of the last plan, in execution order. Empty for `NoPath`.
    pub fn plan(&self) -> &[&'a dyn Operator] {
        &self.search.path().edges
    }

    /// State reached by the last plan (the best partial state for `PartialPath`).
    pub fn final_state(&self) -> Option<&WorldState> {
        self.search.path().end()
    }

    /// Accumulated operator cost of the last plan.
    pub fn plan_cost(&self) -> f32 {
        self.search.path().cost
    }

    pub fn stats(&self) -> &SearchStats {
        self.search.stats()
    }

    pub fn helper(&self) -> &PlannerHelper<'a> {
        self.search.space()
    }

    pub fn helper_mut(&mut self) -> &mut PlannerHelper<'a> {
        self.search.space_mut()
    }

    pub fn timer_mut(&mut self) -> &mut T {
        self.search.timer_mut()
    }
}
