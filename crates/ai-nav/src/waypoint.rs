use ai_search::{AStar, AStarConfig, SearchResult, SearchSpace, Successor, Timer, Unbounded};

use crate::{NavError, Vec3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable handle to a waypoint. Ids are never reused after removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointId(pub usize);

impl WaypointId {
    fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Waypoint {
    pub id: WaypointId,
    pub position: Vec3,
}

#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct Slot {
    waypoint: Waypoint,
    edges: Vec<WaypointId>,
}

/// Directed graph of waypoints searched with Euclidean step costs.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointGraph {
    slots: Vec<Option<Slot>>,
    count: usize,
}

/// Result of a waypoint query.
///
/// `waypoints` and `points` run from the start to the goal (or to the best frontier waypoint
/// for [`SearchResult::PartialPath`]); both are empty for [`SearchResult::NoPath`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WaypointPath {
    pub result: SearchResult,
    pub waypoints: Vec<WaypointId>,
    pub points: Vec<Vec3>,
    pub cost: f32,
}

impl WaypointGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_waypoint(&mut self, position: Vec3) -> WaypointId {
        let id = WaypointId(self.slots.len());
        self.slots.push(Some(Slot {
            waypoint: Waypoint { id, position },
            edges: Vec::new(),
        }));
        self.count += 1;
        id
    }

    /// Remove a waypoint together with every edge that touches it.
    pub fn remove_waypoint(&mut self, id: WaypointId) -> Option<Waypoint> {
        let slot = self.slots.get_mut(id.index())?.take()?;
        self.count -= 1;
        for other in self.slots.iter_mut().flatten() {
            other.edges.retain(|&to| to != id);
        }
        Some(slot.waypoint)
    }

    pub fn find_waypoint(&self, id: WaypointId) -> Option<&Waypoint> {
        self.slot(id).map(|s| &s.waypoint)
    }

    /// Closest waypoint to `position`; ties go to the lowest id.
    pub fn nearest_waypoint(&self, position: Vec3) -> Option<WaypointId> {
        self.waypoints()
            .map(|w| (w.id, w.position.distance(position)))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    pub fn waypoints(&self) -> impl Iterator<Item = &Waypoint> + '_ {
        self.slots.iter().flatten().map(|s| &s.waypoint)
    }

    pub fn waypoint_count(&self) -> usize {
        self.count
    }

    /// Add a directed edge. Adding an existing edge is a no-op.
    pub fn add_edge(&mut self, from: WaypointId, to: WaypointId) -> Result<(), NavError> {
        if self.slot(to).is_none() {
            return Err(NavError::UnknownWaypoint(to));
        }
        let slot = self
            .slots
            .get_mut(from.index())
            .and_then(Option::as_mut)
            .ok_or(NavError::UnknownWaypoint(from))?;
        if !slot.edges.contains(&to) {
            slot.edges.push(to);
        }
        Ok(())
    }

    /// Add edges in both directions.
    pub fn connect(&mut self, a: WaypointId, b: WaypointId) -> Result<(), NavError> {
        self.add_edge(a, b)?;
        self.add_edge(b, a)
    }

    pub fn remove_edge(&mut self, from: WaypointId, to: WaypointId) -> bool {
        let Some(slot) = self.slots.get_mut(from.index()).and_then(Option::as_mut) else {
            return false;
        };
        let before = slot.edges.len();
        slot.edges.retain(|&t| t != to);
        slot.edges.len() != before
    }

    /// Outgoing edges in insertion order; empty for unknown ids.
    pub fn edges_from(&self, id: WaypointId) -> &[WaypointId] {
        match self.slot(id) {
            Some(slot) => &slot.edges,
            None => &[],
        }
    }

    pub fn find_path(&self, from: WaypointId, to: WaypointId) -> Result<WaypointPath, NavError> {
        self.find_path_with_timer(from, to, Unbounded)
    }

    /// Like [`find_path`](Self::find_path), degrading to a partial path once `timer` expires.
    pub fn find_path_with_timer<T: Timer>(
        &self,
        from: WaypointId,
        to: WaypointId,
        timer: T,
    ) -> Result<WaypointPath, NavError> {
        for id in [from, to] {
            if self.slot(id).is_none() {
                return Err(NavError::UnknownWaypoint(id));
            }
        }

        let mut astar = AStar::with_timer(WaypointSpace { graph: self }, timer);
        astar.reset(AStarConfig::new(from).with_goal(to));
        let result = astar.find_path()?;

        let path = astar.path();
        let points = path
            .nodes
            .iter()
            .filter_map(|&id| self.find_waypoint(id).map(|w| w.position))
            .collect();

        tracing::debug!(
            from = from.0,
            to = to.0,
            ?result,
            hops = path.edges.len(),
            "waypoint path query"
        );

        Ok(WaypointPath {
            result,
            waypoints: path.nodes.clone(),
            points,
            cost: path.cost,
        })
    }

    fn slot(&self, id: WaypointId) -> Option<&Slot> {
        self.slots.get(id.index()).and_then(Option::as_ref)
    }

    fn position(&self, id: WaypointId) -> Option<Vec3> {
        self.slot(id).map(|s| s.waypoint.position)
    }
}

struct WaypointSpace<'g> {
    graph: &'g WaypointGraph,
}

impl SearchSpace for WaypointSpace<'_> {
    type Data = WaypointId;
    type Edge = ();
    type Cost = f32;

    fn expand(&self, from: &WaypointId, out: &mut Vec<Successor<WaypointId, (), f32>>) {
        let Some(origin) = self.graph.position(*from) else {
            return;
        };
        for &to in self.graph.edges_from(*from) {
            if let Some(p) = self.graph.position(to) {
                out.push(Successor::new(to, (), origin.distance(p)));
            }
        }
    }

    fn cost_to_goal(&self, data: &WaypointId, goal: Option<&WaypointId>) -> f32 {
        match (self.graph.position(*data), goal.and_then(|g| self.graph.position(*g))) {
            (Some(a), Some(b)) => a.distance(b),
            _ => 0.0,
        }
    }
}
