use core::fmt;
use std::rc::Rc;

use crate::{GoapError, WorldState};

/// Boolean test over a [`WorldState`], used as a precondition or an interrupt.
pub trait Conditional {
    fn name(&self) -> &str;

    fn is_true(&self, state: &WorldState) -> bool;
}

/// Closure-backed [`Conditional`].
pub struct Condition {
    name: String,
    test: Box<dyn Fn(&WorldState) -> bool>,
}

impl Condition {
    pub fn new(name: impl Into<String>, test: impl Fn(&WorldState) -> bool + 'static) -> Self {
        Self {
            name: name.into(),
            test: Box::new(test),
        }
    }

    /// Shorthand for the common "variable equals value" test.
    ///
    /// A missing variable, or one of another type, never matches.
    pub fn equals<T>(name: impl Into<String>, variable: impl Into<String>, expected: T) -> Self
    where
        T: PartialEq + 'static,
    {
        let variable = variable.into();
        Self::new(name, move |state| {
            state.value::<T>(&variable).is_some_and(|v| *v == expected)
        })
    }

    pub fn shared(self) -> Rc<dyn Conditional> {
        Rc::new(self)
    }
}

impl Conditional for Condition {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_true(&self, state: &WorldState) -> bool {
        (self.test)(state)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Condition").field("name", &self.name).finish()
    }
}

/// A state transition the planner may chain into a plan.
///
/// Preconditions gate whether the operator may start. Interrupts are never consulted by the
/// search; the simulation checks them while the action runs (see [`PlanExecutor`]).
///
/// Operators compare equal by name.
///
/// [`PlanExecutor`]: crate::PlanExecutor
pub trait Operator {
    fn name(&self) -> &str;

    /// Incremental cost added to the successor state. Non-negative.
    fn cost(&self) -> f32;

    fn preconditions(&self) -> &[Rc<dyn Conditional>];

    fn interrupts(&self) -> &[Rc<dyn Conditional>];

    /// Mutate `state` (already a copy of the current state) into the successor.
    ///
    /// Returning `false` rejects the transition.
    fn apply_effect(&self, state: &mut WorldState) -> bool;

    fn can_apply(&self, state: &WorldState) -> bool {
        self.preconditions().iter().all(|c| c.is_true(state))
    }

    fn is_interrupted(&self, state: &WorldState) -> bool {
        self.interrupts().iter().any(|c| c.is_true(state))
    }

    /// Successor of `current`, or `None` if a precondition fails or the effect rejects it.
    ///
    /// `current` is never modified.
    fn apply(&self, current: &WorldState) -> Option<WorldState> {
        if !self.can_apply(current) {
            return None;
        }
        let mut next = current.clone();
        if !self.apply_effect(&mut next) {
            return None;
        }
        next.add_cost(self.cost()).ok()?;
        Some(next)
    }
}

impl PartialEq for dyn Operator + '_ {
    fn eq(&self, other: &Self) -> bool {
        self.name() == other.name()
    }
}

impl Eq for dyn Operator + '_ {}

impl fmt::Debug for dyn Operator + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operator")
            .field("name", &self.name())
            .field("cost", &self.cost())
            .finish_non_exhaustive()
    }
}

type EffectFn = Box<dyn Fn(&mut WorldState) -> bool>;

/// The stock [`Operator`]: a name, a cost, condition lists and an effect closure.
pub struct NpcOperator {
    name: String,
    cost: f32,
    preconditions: Vec<Rc<dyn Conditional>>,
    interrupts: Vec<Rc<dyn Conditional>>,
    effect: EffectFn,
}

impl NpcOperator {
    pub fn new(
        name: impl Into<String>,
        cost: f32,
        effect: impl Fn(&mut WorldState) -> bool + 'static,
    ) -> Result<Self, GoapError> {
        if cost < 0.0 || cost.is_nan() {
            return Err(GoapError::NegativeCost(cost));
        }
        Ok(Self {
            name: name.into(),
            cost,
            preconditions: Vec::new(),
            interrupts: Vec::new(),
            effect: Box::new(effect),
        })
    }

    pub fn with_precondition(mut self, condition: impl Conditional + 'static) -> Self {
        self.add_precondition(Rc::new(condition));
        self
    }

    pub fn with_interrupt(mut self, condition: impl Conditional + 'static) -> Self {
        self.add_interrupt(Rc::new(condition));
        self
    }

    pub fn add_precondition(&mut self, condition: Rc<dyn Conditional>) {
        self.preconditions.push(condition);
    }

    /// Remove every precondition with this name. Returns whether any was removed.
    pub fn remove_precondition(&mut self, name: &str) -> bool {
        remove_named(&mut self.preconditions, name)
    }

    pub fn add_interrupt(&mut self, condition: Rc<dyn Conditional>) {
        self.interrupts.push(condition);
    }

    pub fn remove_interrupt(&mut self, name: &str) -> bool {
        remove_named(&mut self.interrupts, name)
    }
}

fn remove_named(conditions: &mut Vec<Rc<dyn Conditional>>, name: &str) -> bool {
    let before = conditions.len();
    conditions.retain(|c| c.name() != name);
    conditions.len() != before
}

impl Operator for NpcOperator {
    fn name(&self) -> &str {
        &self.name
    }

    fn cost(&self) -> f32 {
        self.cost
    }

    fn preconditions(&self) -> &[Rc<dyn Conditional>] {
        &self.preconditions
    }

    fn interrupts(&self) -> &[Rc<dyn Conditional>] {
        &self.interrupts
    }

    fn apply_effect(&self, state: &mut WorldState) -> bool {
        (self.effect)(state)
    }
}

impl fmt::Debug for NpcOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = |list: &[Rc<dyn Conditional>]| {
            list.iter().map(|c| c.name().to_string()).collect::<Vec<_>>()
        };
        f.debug_struct("NpcOperator")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .field("preconditions", &names(&self.preconditions[..]))
            .field("interrupts", &names(&self.interrupts[..]))
            .finish_non_exhaustive()
    }
}
