use crate::{Operator, WorldState};

/// Outcome of a single [`PlanExecutor::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus<'a> {
    /// The operator ran and the live state moved to its successor.
    Applied(&'a dyn Operator),
    /// An interrupt of the current operator fired; the live state is untouched.
    Interrupted(&'a dyn Operator),
    /// The current operator's preconditions no longer hold, or its effect rejected the state.
    Failed(&'a dyn Operator),
    Complete,
}

/// Walks a plan against a live world state, one operator per step.
///
/// A step that is interrupted or fails does not advance, so the caller can replan or retry
/// once the world has changed.
#[derive(Debug, Clone)]
pub struct PlanExecutor<'a> {
    steps: Vec<&'a dyn Operator>,
    index: usize,
}

impl<'a> PlanExecutor<'a> {
    pub fn new(plan: &[&'a dyn Operator]) -> Self {
        Self {
            steps: plan.to_vec(),
            index: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    pub fn is_complete(&self) -> bool {
        self.index >= self.steps.len()
    }

    pub fn current(&self) -> Option<&'a dyn Operator> {
        self.steps.get(self.index).copied()
    }

    pub fn step(&mut self, world: &mut WorldState) -> StepStatus<'a> {
        let Some(operator) = self.current() else {
            return StepStatus::Complete;
        };

        if operator.is_interrupted(world) {
            tracing::debug!(operator = operator.name(), step = self.index, "plan step interrupted");
            return StepStatus::Interrupted(operator);
        }

        match operator.apply(world) {
            Some(next) => {
                *world = next;
                self.index += 1;
                StepStatus::Applied(operator)
            }
            None => {
                tracing::debug!(operator = operator.name(), step = self.index, "plan step failed");
                StepStatus::Failed(operator)
            }
        }
    }

    /// Step until the plan completes or a step is interrupted or fails.
    pub fn run(&mut self, world: &mut WorldState) -> StepStatus<'a> {
        loop {
            match self.step(world) {
                StepStatus::Applied(_) => continue,
                other => return other,
            }
        }
    }
}
