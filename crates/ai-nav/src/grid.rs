use ai_search::{AStar, AStarConfig, SearchResult, SearchSpace, Successor};

use crate::{NavPath, Navigator, Vec2};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Cell {
    x: i32,
    y: i32,
}

/// Uniform grid of blocked/open cells, searched 4-connected with unit step costs.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NavGrid {
    width: i32,
    height: i32,
    cell_size: f32,
    blocked: Vec<bool>,
}

impl NavGrid {
    pub fn new(width: u32, height: u32, cell_size: f32) -> Self {
        assert!(width > 0 && height > 0, "grid must be non-empty");
        assert!(cell_size > 0.0, "cell_size must be > 0");
        let width = width as i32;
        let height = height as i32;
        Self {
            width,
            height,
            cell_size,
            blocked: vec![false; (width * height) as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    pub fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// Out-of-bounds cells are ignored.
    pub fn set_blocked(&mut self, x: i32, y: i32, blocked: bool) {
        if let Some(idx) = self.idx(Cell { x, y }) {
            self.blocked[idx] = blocked;
        }
    }

    /// Out-of-bounds cells count as blocked.
    pub fn is_blocked(&self, x: i32, y: i32) -> bool {
        self.idx(Cell { x, y })
            .map(|idx| self.blocked[idx])
            .unwrap_or(true)
    }

    fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.y >= 0 && cell.x < self.width && cell.y < self.height
    }

    fn idx(&self, cell: Cell) -> Option<usize> {
        if !self.in_bounds(cell) {
            return None;
        }
        Some((cell.y * self.width + cell.x) as usize)
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.idx(cell).is_some_and(|idx| !self.blocked[idx])
    }

    fn world_to_cell(&self, p: Vec2) -> Option<Cell> {
        let cell = Cell {
            x: (p.x / self.cell_size).floor() as i32,
            y: (p.y / self.cell_size).floor() as i32,
        };
        self.in_bounds(cell).then_some(cell)
    }

    fn cell_center(&self, cell: Cell) -> Vec2 {
        Vec2::new(
            (cell.x as f32 + 0.5) * self.cell_size,
            (cell.y as f32 + 0.5) * self.cell_size,
        )
    }

    fn search(&self, start: Cell, goal: Cell) -> Option<Vec<Cell>> {
        if !self.is_open(start) || !self.is_open(goal) {
            return None;
        }

        let mut astar = AStar::new(GridSpace { grid: self });
        astar.reset(AStarConfig::new(start).with_goal(goal));
        match astar.find_path() {
            Ok(SearchResult::PathFound) => Some(astar.path().nodes.clone()),
            Ok(result) => {
                tracing::debug!(?result, "nav grid search found no route");
                None
            }
            Err(err) => {
                tracing::debug!(%err, "nav grid search failed");
                None
            }
        }
    }
}

struct GridSpace<'g> {
    grid: &'g NavGrid,
}

impl SearchSpace for GridSpace<'_> {
    type Data = Cell;
    type Edge = ();
    type Cost = u32;

    fn expand(&self, from: &Cell, out: &mut Vec<Successor<Cell, (), u32>>) {
        // Fixed order for determinism: N, E, S, W.
        let neighbors = [
            Cell {
                x: from.x,
                y: from.y - 1,
            },
            Cell {
                x: from.x + 1,
                y: from.y,
            },
            Cell {
                x: from.x,
                y: from.y + 1,
            },
            Cell {
                x: from.x - 1,
                y: from.y,
            },
        ];
        for n in neighbors {
            if self.grid.is_open(n) {
                out.push(Successor::new(n, (), 1));
            }
        }
    }

    fn cost_to_goal(&self, data: &Cell, goal: Option<&Cell>) -> u32 {
        goal.map_or(0, |g| data.x.abs_diff(g.x) + data.y.abs_diff(g.y))
    }
}

impl Navigator for NavGrid {
    fn find_path(&self, start: Vec2, goal: Vec2) -> Option<NavPath> {
        let start_cell = self.world_to_cell(start)?;
        let goal_cell = self.world_to_cell(goal)?;
        let cells = self.search(start_cell, goal_cell)?;

        // Interior cells become centers; the exact endpoints are preserved.
        let inner_len = cells.len().saturating_sub(2);
        let mut points = Vec::with_capacity(cells.len().saturating_add(1));
        points.push(start);
        for cell in cells.into_iter().skip(1).take(inner_len) {
            points.push(self.cell_center(cell));
        }
        points.push(goal);
        Some(NavPath::new(points))
    }

    fn nearest_point(&self, point: Vec2) -> Option<Vec2> {
        let cell = self.world_to_cell(point)?;
        self.is_open(cell).then(|| self.cell_center(cell))
    }
}
