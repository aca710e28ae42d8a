use core::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};
use std::hash::Hash;
use std::time::{Duration, Instant};

use crate::{AStarConfig, Cost, NodeId, NodeStatus, SearchError, SearchNode, Timer, Unbounded};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How a search ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SearchResult {
    /// The open list ran dry before the goal was reached.
    NoPath,
    PathFound,
    /// The budget ran out; the path leads to the best frontier node.
    PartialPath,
}

impl SearchResult {
    pub fn is_found(self) -> bool {
        self == SearchResult::PathFound
    }

    pub fn has_path(self) -> bool {
        self != SearchResult::NoPath
    }
}

/// One edge produced by [`SearchSpace::expand`].
#[derive(Debug, Clone, PartialEq)]
pub struct Successor<D, E, C> {
    pub data: D,
    pub edge: E,
    /// Step cost of `edge`. Must be non-negative.
    pub cost: C,
}

impl<D, E, C> Successor<D, E, C> {
    pub fn new(data: D, edge: E, cost: C) -> Self {
        Self { data, edge, cost }
    }
}

/// A domain the engine can search: successor generator, heuristic and goal test.
///
/// `Data` doubles as the identity of a node; two equal values are the same node and only the
/// cheaper path to it is kept.
pub trait SearchSpace {
    type Data: Clone + Eq + Hash;
    type Edge: Clone;
    type Cost: Cost;

    /// Push every successor of `from` into `out`, in a stable order.
    ///
    /// `out` is empty on entry.
    fn expand(&self, from: &Self::Data, out: &mut Vec<Successor<Self::Data, Self::Edge, Self::Cost>>);

    /// Heuristic h(n). Must not overestimate for the returned path to be optimal.
    fn cost_to_goal(&self, data: &Self::Data, goal: Option<&Self::Data>) -> Self::Cost;

    fn is_goal(&self, data: &Self::Data, goal: Option<&Self::Data>) -> bool {
        goal == Some(data)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchStats {
    /// Nodes moved to the closed list (re-expansions included).
    pub expansions: usize,
    /// Distinct nodes discovered, the start node included.
    pub generated: usize,
    /// Closed nodes moved back to open after a strictly cheaper path was found.
    pub reopened: usize,
    pub elapsed: Duration,
}

/// Result container: the data along the path plus the edges between them.
///
/// `edges[i]` leads from `nodes[i]` to `nodes[i + 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchPath<D, E, C> {
    pub nodes: Vec<D>,
    pub edges: Vec<E>,
    pub cost: C,
}

impl<D, E, C: Cost> SearchPath<D, E, C> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            cost: C::ZERO,
        }
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn start(&self) -> Option<&D> {
        self.nodes.first()
    }

    pub fn end(&self) -> Option<&D> {
        self.nodes.last()
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.cost = C::ZERO;
    }
}

impl<D, E, C: Cost> Default for SearchPath<D, E, C> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, Copy)]
struct OpenEntry<C> {
    f: C,
    g: C,
    node: NodeId,
    seq: u64,
}

impl<C: Cost> Ord for OpenEntry<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering to make BinaryHeap behave like a min-heap; equal f pops FIFO.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<C: Cost> PartialOrd for OpenEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Cost> PartialEq for OpenEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<C: Cost> Eq for OpenEntry<C> {}

/// Node arena plus the open heap and the data -> node index.
///
/// The closed list is implicit: nodes whose status is `Closed`. Heap entries are never
/// removed eagerly; an entry is stale once its node is closed or its g has been lowered.
struct Frontier<D, E, C> {
    nodes: Vec<SearchNode<D, E, C>>,
    open: BinaryHeap<OpenEntry<C>>,
    index: HashMap<D, NodeId>,
    seq: u64,
}

impl<D, E, C> Frontier<D, E, C>
where
    D: Clone + Eq + Hash,
    C: Cost,
{
    fn new() -> Self {
        Self {
            nodes: Vec::new(),
            open: BinaryHeap::new(),
            index: HashMap::new(),
            seq: 0,
        }
    }

    fn clear(&mut self) {
        self.nodes.clear();
        self.open.clear();
        self.index.clear();
        self.seq = 0;
    }

    fn insert(
        &mut self,
        data: D,
        edge: Option<E>,
        parent: Option<NodeId>,
        g: C,
        h: C,
    ) -> Result<NodeId, SearchError> {
        let id = NodeId::from_index(self.nodes.len()).ok_or(SearchError::NodeLimit)?;
        self.index.insert(data.clone(), id);
        self.nodes.push(SearchNode {
            data,
            edge,
            g,
            h,
            parent,
            status: NodeStatus::Open,
        });
        self.push_open(id);
        Ok(id)
    }

    fn push_open(&mut self, id: NodeId) {
        let node = &self.nodes[id.index()];
        let entry = OpenEntry {
            f: node.total_cost(),
            g: node.g,
            node: id,
            seq: self.seq,
        };
        self.seq += 1;
        self.open.push(entry);
    }

    fn is_live(&self, entry: &OpenEntry<C>) -> bool {
        let node = &self.nodes[entry.node.index()];
        node.status == NodeStatus::Open && node.g.total_cmp(&entry.g) == Ordering::Equal
    }

    fn pop_live(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open.pop() {
            if self.is_live(&entry) {
                return Some(entry.node);
            }
        }
        None
    }

    fn peek_live(&mut self) -> Option<NodeId> {
        loop {
            let entry = self.open.peek()?;
            if self.is_live(entry) {
                return Some(entry.node);
            }
            self.open.pop();
        }
    }

    fn count(&self, status: NodeStatus) -> usize {
        self.nodes.iter().filter(|n| n.status == status).count()
    }

    fn trace_back(&self, terminal: NodeId, path: &mut SearchPath<D, E, C>)
    where
        E: Clone,
    {
        path.clear();
        path.cost = self.nodes[terminal.index()].g;

        let mut current = Some(terminal);
        while let Some(id) = current {
            let node = &self.nodes[id.index()];
            path.nodes.push(node.data.clone());
            if let Some(edge) = &node.edge {
                path.edges.push(edge.clone());
            }
            current = node.parent;
        }

        path.nodes.reverse();
        path.edges.reverse();
    }
}

type SpaceNode<S> = SearchNode<<S as SearchSpace>::Data, <S as SearchSpace>::Edge, <S as SearchSpace>::Cost>;
type SpacePath<S> = SearchPath<<S as SearchSpace>::Data, <S as SearchSpace>::Edge, <S as SearchSpace>::Cost>;
type SpaceConfig<S> = AStarConfig<<S as SearchSpace>::Data, <S as SearchSpace>::Cost>;
type SpaceSuccessor<S> = Successor<<S as SearchSpace>::Data, <S as SearchSpace>::Edge, <S as SearchSpace>::Cost>;

/// Reusable best-first search driver.
///
/// Usage is `reset(config)` once per query, then `find_path()`. The engine owns every node it
/// creates; they are dropped in bulk on the next `reset` or `find_path`. `find_path` needs
/// `&mut self`, so a search can never be re-entered or overlap with `reset`.
pub struct AStar<S, T = Unbounded>
where
    S: SearchSpace,
{
    space: S,
    timer: T,
    config: Option<SpaceConfig<S>>,
    frontier: Frontier<S::Data, S::Edge, S::Cost>,
    scratch: Vec<SpaceSuccessor<S>>,
    path: SpacePath<S>,
    stats: SearchStats,
}

impl<S> AStar<S, Unbounded>
where
    S: SearchSpace,
{
    pub fn new(space: S) -> Self {
        Self::with_timer(space, Unbounded)
    }
}

impl<S, T> AStar<S, T>
where
    S: SearchSpace,
    T: Timer,
{
    pub fn with_timer(space: S, timer: T) -> Self {
        Self {
            space,
            timer,
            config: None,
            frontier: Frontier::new(),
            scratch: Vec::new(),
            path: SearchPath::new(),
            stats: SearchStats::default(),
        }
    }

    /// Drop every node from the previous query and install a new configuration.
    pub fn reset(&mut self, config: SpaceConfig<S>) {
        self.frontier.clear();
        self.path.clear();
        self.stats = SearchStats::default();
        self.config = Some(config);
    }

    /// Run the search to completion, budget expiry, or exhaustion.
    ///
    /// Every call starts over from the installed configuration, so repeated calls return the
    /// same result and path.
    pub fn find_path(&mut self) -> Result<SearchResult, SearchError> {
        let Self {
            space,
            timer,
            config,
            frontier,
            scratch,
            path,
            stats,
        } = self;
        let config = config.as_ref().ok_or(SearchError::NotConfigured)?;
        let goal = config.goal.as_ref();

        frontier.clear();
        path.clear();
        *stats = SearchStats::default();

        let started = Instant::now();
        timer.start();

        let h = space.cost_to_goal(&config.start, goal);
        frontier.insert(config.start.clone(), None, None, S::Cost::ZERO, h)?;
        stats.generated = 1;

        tracing::debug!(
            max_expansions = ?config.max_expansions,
            max_cost = ?config.max_cost,
            "a* search started"
        );

        let result = loop {
            let out_of_budget = config
                .max_expansions
                .is_some_and(|max| stats.expansions >= max);
            if out_of_budget || timer.expired(stats) {
                break match frontier.peek_live() {
                    Some(best) => {
                        frontier.trace_back(best, path);
                        if space.is_goal(&frontier.nodes[best.index()].data, goal) {
                            SearchResult::PathFound
                        } else {
                            SearchResult::PartialPath
                        }
                    }
                    None => SearchResult::NoPath,
                };
            }

            let Some(current) = frontier.pop_live() else {
                break SearchResult::NoPath;
            };

            if space.is_goal(&frontier.nodes[current.index()].data, goal) {
                frontier.trace_back(current, path);
                break SearchResult::PathFound;
            }

            frontier.nodes[current.index()].status = NodeStatus::Closed;
            stats.expansions += 1;

            scratch.clear();
            space.expand(&frontier.nodes[current.index()].data, scratch);
            tracing::trace!(node = current.0, successors = scratch.len(), "expanded");

            let parent_g = frontier.nodes[current.index()].g;
            for successor in scratch.drain(..) {
                if successor.cost.is_negative() {
                    return Err(SearchError::NegativeStepCost);
                }

                let g = parent_g.accumulate(successor.cost);
                if let Some(max_cost) = config.max_cost {
                    if g.total_cmp(&max_cost) == Ordering::Greater {
                        continue;
                    }
                }

                match frontier.index.get(&successor.data).copied() {
                    Some(id) => {
                        let node = &mut frontier.nodes[id.index()];
                        if g.total_cmp(&node.g) != Ordering::Less {
                            continue;
                        }
                        if node.status == NodeStatus::Closed {
                            stats.reopened += 1;
                        }
                        node.data = successor.data;
                        node.edge = Some(successor.edge);
                        node.parent = Some(current);
                        node.g = g;
                        node.status = NodeStatus::Open;
                        frontier.push_open(id);
                    }
                    None => {
                        let h = space.cost_to_goal(&successor.data, goal);
                        frontier.insert(successor.data, Some(successor.edge), Some(current), g, h)?;
                        stats.generated += 1;
                    }
                }
            }
        };

        stats.elapsed = started.elapsed();
        tracing::debug!(
            ?result,
            expansions = stats.expansions,
            generated = stats.generated,
            path_len = path.len(),
            "a* search finished"
        );

        Ok(result)
    }

    /// Path from the last `find_path`; empty before the first search and after `reset`.
    pub fn path(&self) -> &SpacePath<S> {
        &self.path
    }

    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn config(&self) -> Option<&SpaceConfig<S>> {
        self.config.as_ref()
    }

    pub fn space(&self) -> &S {
        &self.space
    }

    pub fn space_mut(&mut self) -> &mut S {
        &mut self.space
    }

    pub fn timer(&self) -> &T {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut T {
        &mut self.timer
    }

    pub fn node(&self, id: NodeId) -> Option<&SpaceNode<S>> {
        self.frontier.nodes.get(id.index())
    }

    /// Every node discovered by the last search, indexed by `NodeId`.
    pub fn nodes(&self) -> &[SpaceNode<S>] {
        &self.frontier.nodes
    }

    pub fn open_len(&self) -> usize {
        self.frontier.count(NodeStatus::Open)
    }

    pub fn closed_len(&self) -> usize {
        self.frontier.count(NodeStatus::Closed)
    }
}
