#![cfg(feature = "serde")]

use ai_nav::{NavGrid, Navigator, Vec2, Vec3, WaypointGraph};

#[test]
fn nav_grid_roundtrips_via_serde() {
    let mut grid = NavGrid::new(6, 6, 0.5);
    for y in 0..5 {
        grid.set_blocked(3, y, true);
    }

    let json = serde_json::to_string(&grid).expect("serialize grid");
    let grid2: NavGrid = serde_json::from_str(&json).expect("deserialize grid");

    let start = Vec2::new(0.25, 0.25);
    let goal = Vec2::new(2.75, 0.25);
    let path1 = grid.find_path(start, goal).expect("path");
    let path2 = grid2.find_path(start, goal).expect("path");
    assert_eq!(path1, path2);
}

#[test]
fn waypoint_graph_roundtrips_via_serde() {
    let mut graph = WaypointGraph::new();
    let a = graph.insert_waypoint(Vec3::new(0.0, 0.0, 0.0));
    let b = graph.insert_waypoint(Vec3::new(3.0, 4.0, 0.0));
    let c = graph.insert_waypoint(Vec3::new(3.0, 4.0, 12.0));
    graph.connect(a, b).expect("known");
    graph.add_edge(b, c).expect("known");
    let scratch = graph.insert_waypoint(Vec3::ZERO);
    graph.remove_waypoint(scratch).expect("just inserted");

    let json = serde_json::to_string(&graph).expect("serialize graph");
    let graph2: WaypointGraph = serde_json::from_str(&json).expect("deserialize graph");

    assert_eq!(graph2.waypoint_count(), 3);
    let p1 = graph.find_path(a, c).expect("known");
    let p2 = graph2.find_path(a, c).expect("known");
    assert_eq!(p1, p2);
    assert_eq!(p2.cost, 17.0);
}
