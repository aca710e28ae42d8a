use core::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::{GoapError, StateValue, StateVariable};

/// Heuristic estimate of the cost still needed to satisfy the goal.
pub type RemainingCostFn = Rc<dyn Fn(&WorldState) -> f32>;

/// Goal predicate.
pub type DesiredStateFn = Rc<dyn Fn(&WorldState) -> bool>;

/// One point in a planning domain's state space.
///
/// Holds an ordered set of uniquely named [`StateVariable`]s and the cost accumulated to
/// reach it. Cloning deep-copies every variable, so states produced by different operators
/// never share mutable facts. The optional functors are stateless and shared.
///
/// Equality and hashing look at the set of variables only: reaching the same facts at
/// different costs, or in a different insertion order, is the same search node.
#[derive(Clone, Default)]
pub struct WorldState {
    cost: f32,
    variables: Vec<StateVariable>,
    remaining_cost: Option<RemainingCostFn>,
    desired: Option<DesiredStateFn>,
}

impl WorldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_remaining_cost(mut self, f: impl Fn(&WorldState) -> f32 + 'static) -> Self {
        self.remaining_cost = Some(Rc::new(f));
        self
    }

    pub fn with_desired_state(mut self, f: impl Fn(&WorldState) -> bool + 'static) -> Self {
        self.desired = Some(Rc::new(f));
        self
    }

    /// Builder form of [`add_state`](Self::add_state).
    pub fn with_state<T: StateValue>(
        mut self,
        name: impl Into<String>,
        value: T,
    ) -> Result<Self, GoapError> {
        self.add_state(StateVariable::new(name, value))?;
        Ok(self)
    }

    pub fn cost(&self) -> f32 {
        self.cost
    }

    pub fn add_cost(&mut self, delta: f32) -> Result<(), GoapError> {
        if delta < 0.0 || delta.is_nan() {
            return Err(GoapError::NegativeCost(delta));
        }
        self.cost += delta;
        Ok(())
    }

    pub fn add_state(&mut self, variable: StateVariable) -> Result<(), GoapError> {
        if self.get_state(variable.name()).is_some() {
            return Err(GoapError::DuplicateVariable(variable.name().to_string()));
        }
        self.variables.push(variable);
        Ok(())
    }

    pub fn get_state(&self, name: &str) -> Option<&StateVariable> {
        self.variables.iter().find(|v| v.name() == name)
    }

    pub fn get_state_mut(&mut self, name: &str) -> Option<&mut StateVariable> {
        self.variables.iter_mut().find(|v| v.name() == name)
    }

    pub fn remove_state(&mut self, name: &str) -> Option<StateVariable> {
        let idx = self.variables.iter().position(|v| v.name() == name)?;
        Some(self.variables.remove(idx))
    }

    /// Typed read of a variable; `None` when absent or of another type.
    pub fn value<T: 'static>(&self, name: &str) -> Option<&T> {
        self.get_state(name)?.get::<T>()
    }

    /// Overwrite an existing variable's payload.
    pub fn set_value<T: StateValue>(&mut self, name: &str, value: T) -> Result<(), GoapError> {
        let variable = self
            .get_state_mut(name)
            .ok_or_else(|| GoapError::UnknownVariable(name.to_string()))?;
        variable.set(value);
        Ok(())
    }

    pub fn variables(&self) -> &[StateVariable] {
        &self.variables
    }

    pub fn len(&self) -> usize {
        self.variables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Delegates to the installed heuristic; `0.0` (trivially admissible) when none is set.
    pub fn remaining_cost(&self) -> f32 {
        self.remaining_cost.as_ref().map_or(0.0, |f| f(self))
    }

    /// Delegates to the installed goal predicate; `false` when none is set.
    pub fn is_desired_state(&self) -> bool {
        self.desired.as_ref().is_some_and(|f| f(self))
    }
}

// Names are unique, so equal length plus a per-name match is set equality regardless of
// insertion order. Hashing sorts by name to agree with it.
impl PartialEq for WorldState {
    fn eq(&self, other: &Self) -> bool {
        self.variables.len() == other.variables.len()
            && self
                .variables
                .iter()
                .all(|v| other.get_state(v.name()).is_some_and(|o| o == v))
    }
}

impl Eq for WorldState {}

impl Hash for WorldState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let mut sorted: Vec<&StateVariable> = self.variables.iter().collect();
        sorted.sort_unstable_by(|a, b| a.name().cmp(b.name()));
        sorted.hash(state);
    }
}

impl fmt::Debug for WorldState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorldState")
            .field("cost", &self.cost)
            .field("variables", &self.variables)
            .finish_non_exhaustive()
    }
}
