/// Input for one search: where to start, what counts as done, and optional limits.
///
/// `goal` is optional because many spaces decide goal-ness themselves (GOAP goal predicates);
/// when present it is handed to the heuristic and the goal test.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarConfig<D, C> {
    pub start: D,
    pub goal: Option<D>,
    /// Successors whose accumulated cost exceeds this are never inserted.
    pub max_cost: Option<C>,
    /// Expansion budget; running out yields a partial path.
    pub max_expansions: Option<usize>,
}

impl<D, C> AStarConfig<D, C> {
    pub fn new(start: D) -> Self {
        Self {
            start,
            goal: None,
            max_cost: None,
            max_expansions: None,
        }
    }

    pub fn with_goal(mut self, goal: D) -> Self {
        self.goal = Some(goal);
        self
    }

    pub fn with_max_cost(mut self, max_cost: C) -> Self {
        self.max_cost = Some(max_cost);
        self
    }

    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }
}
