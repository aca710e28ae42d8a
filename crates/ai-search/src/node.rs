use crate::Cost;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Index of a [`SearchNode`] inside the engine's arena.
///
/// Ids are only meaningful until the next `reset`/`find_path`, which clears the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// `None` once the arena index no longer fits in a `u32`.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(Self)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum NodeStatus {
    Open,
    Closed,
}

/// One discovered state plus its bookkeeping.
///
/// `edge` is the label of the transition that reached this node from `parent` (an operator
/// for planning, unit for plain graphs). The start node has neither.
#[derive(Debug, Clone)]
pub struct SearchNode<D, E, C> {
    pub(crate) data: D,
    pub(crate) edge: Option<E>,
    pub(crate) g: C,
    pub(crate) h: C,
    pub(crate) parent: Option<NodeId>,
    pub(crate) status: NodeStatus,
}

impl<D, E, C: Cost> SearchNode<D, E, C> {
    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn edge(&self) -> Option<&E> {
        self.edge.as_ref()
    }

    /// Accumulated cost from the start, g(n).
    pub fn cost_to_node(&self) -> C {
        self.g
    }

    /// Heuristic estimate to the goal, h(n).
    pub fn cost_to_goal(&self) -> C {
        self.h
    }

    pub fn total_cost(&self) -> C {
        self.g.accumulate(self.h)
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn status(&self) -> NodeStatus {
        self.status
    }
}
