//! Spatial pathfinding backends driven by the shared `ai-search` engine.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod math;
pub mod navigator;
pub mod waypoint;

pub use error::NavError;
pub use grid::NavGrid;
pub use math::{Vec2, Vec3};
pub use navigator::{NavPath, Navigator};
pub use waypoint::{Waypoint, WaypointGraph, WaypointId, WaypointPath};
