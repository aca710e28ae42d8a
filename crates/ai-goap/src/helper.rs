use core::fmt;
use std::rc::Rc;

use ai_search::{SearchSpace, Successor};

use crate::{DesiredStateFn, GoapError, Operator, RemainingCostFn, WorldState};

/// Binds a root [`WorldState`], the candidate operators and the cost/goal functors into a
/// search space for [`AStar`](ai_search::AStar).
///
/// Operators are borrowed: the domain owns them and they must outlive the helper. Swapping the
/// functors is how one helper type serves different planning domains.
pub struct PlannerHelper<'a> {
    operators: Vec<&'a dyn Operator>,
    current_state: WorldState,
    remaining_cost: RemainingCostFn,
    desired: DesiredStateFn,
}

impl<'a> PlannerHelper<'a> {
    pub fn new(
        remaining_cost: impl Fn(&WorldState) -> f32 + 'static,
        is_desired: impl Fn(&WorldState) -> bool + 'static,
    ) -> Self {
        Self {
            operators: Vec::new(),
            current_state: WorldState::new(),
            remaining_cost: Rc::new(remaining_cost),
            desired: Rc::new(is_desired),
        }
    }

    /// Register an operator. Names must be unique; expansion follows registration order.
    pub fn add_operator(&mut self, operator: &'a dyn Operator) -> Result<(), GoapError> {
        if self.get_operator(operator.name()).is_some() {
            return Err(GoapError::DuplicateOperator(operator.name().to_string()));
        }
        self.operators.push(operator);
        Ok(())
    }

    pub fn remove_operator(&mut self, name: &str) -> Option<&'a dyn Operator> {
        let idx = self.operators.iter().position(|op| op.name() == name)?;
        Some(self.operators.remove(idx))
    }

    pub fn operators(&self) -> &[&'a dyn Operator] {
        &self.operators
    }

    pub fn get_operator(&self, name: &str) -> Option<&'a dyn Operator> {
        self.operators.iter().copied().find(|op| op.name() == name)
    }

    /// Root state for the next planning query. Stored as a deep copy.
    pub fn set_current_state(&mut self, state: &WorldState) {
        self.current_state = state.clone();
    }

    pub fn current_state(&self) -> &WorldState {
        &self.current_state
    }

    pub fn remaining_cost(&self, state: &WorldState) -> f32 {
        (self.remaining_cost)(state)
    }

    pub fn is_desired_state(&self, state: &WorldState) -> bool {
        (self.desired)(state)
    }
}

impl<'a> SearchSpace for PlannerHelper<'a> {
    type Data = WorldState;
    type Edge = &'a dyn Operator;
    type Cost = f32;

    fn expand(&self, from: &WorldState, out: &mut Vec<Successor<WorldState, &'a dyn Operator, f32>>) {
        for &operator in &self.operators {
            match operator.apply(from) {
                Some(next) => out.push(Successor::new(next, operator, operator.cost())),
                None => tracing::trace!(operator = operator.name(), "operator not applicable"),
            }
        }
    }

    fn cost_to_goal(&self, data: &WorldState, _goal: Option<&WorldState>) -> f32 {
        self.remaining_cost(data)
    }

    fn is_goal(&self, data: &WorldState, goal: Option<&WorldState>) -> bool {
        match goal {
            Some(goal) => data == goal,
            None => self.is_desired_state(data),
        }
    }
}

impl fmt::Debug for PlannerHelper<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.operators.iter().map(|op| op.name()).collect();
        f.debug_struct("PlannerHelper")
            .field("operators", &names)
            .field("current_state", &self.current_state)
            .finish_non_exhaustive()
    }
}
