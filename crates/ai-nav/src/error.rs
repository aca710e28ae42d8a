use ai_search::SearchError;
use thiserror::Error;

use crate::WaypointId;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavError {
    #[error("unknown waypoint {0:?}")]
    UnknownWaypoint(WaypointId),
    #[error(transparent)]
    Search(#[from] SearchError),
}
