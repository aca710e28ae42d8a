use ai_nav::{NavGrid, Navigator, Vec2};

fn walled_grid() -> NavGrid {
    let mut grid = NavGrid::new(5, 5, 1.0);
    // Vertical wall with a single gap.
    for y in 0..5 {
        if y == 2 {
            continue;
        }
        grid.set_blocked(2, y, true);
    }
    grid
}

#[test]
fn nav_grid_finds_path_around_blockers() {
    let grid = walled_grid();

    let start = Vec2::new(0.5, 0.5);
    let goal = Vec2::new(4.5, 4.5);
    let path = grid.find_path(start, goal).expect("path should exist");

    assert_eq!(path.points.first().copied(), Some(start));
    assert_eq!(path.points.last().copied(), Some(goal));
    // Eight unit steps: nine cells, endpoints replaced by the exact positions.
    assert_eq!(path.points.len(), 9);
    assert!(path.points.contains(&Vec2::new(2.5, 2.5)));
    assert!((path.length() - 8.0).abs() < 1e-4);
}

#[test]
fn nav_grid_is_deterministic_for_same_input() {
    let mut grid = NavGrid::new(10, 10, 1.0);
    for y in 0..10 {
        grid.set_blocked(5, y, true);
    }
    grid.set_blocked(5, 5, false);

    let start = Vec2::new(1.5, 1.5);
    let goal = Vec2::new(8.5, 8.5);

    let a = grid.find_path(start, goal).expect("path should exist");
    let b = grid.find_path(start, goal).expect("path should exist");

    assert_eq!(a.points, b.points);
}

#[test]
fn nav_grid_rejects_blocked_or_outside_endpoints() {
    let grid = walled_grid();
    assert!(grid.find_path(Vec2::new(2.5, 0.5), Vec2::new(4.5, 4.5)).is_none());
    assert!(grid.find_path(Vec2::new(0.5, 0.5), Vec2::new(9.5, 0.5)).is_none());
    assert!(grid.find_path(Vec2::new(-0.5, 0.5), Vec2::new(1.5, 0.5)).is_none());
}

#[test]
fn nav_grid_reports_no_path_through_solid_wall() {
    let mut grid = walled_grid();
    grid.set_blocked(2, 2, true);
    assert!(grid.find_path(Vec2::new(0.5, 0.5), Vec2::new(4.5, 4.5)).is_none());
}

#[test]
fn nav_grid_same_cell_is_a_direct_hop() {
    let grid = walled_grid();
    let start = Vec2::new(0.2, 0.3);
    let goal = Vec2::new(0.8, 0.7);
    let path = grid.find_path(start, goal).expect("same cell");
    assert_eq!(path.points, vec![start, goal]);
}

#[test]
fn nav_grid_nearest_point_snaps_to_open_cell_center() {
    let grid = walled_grid();
    assert_eq!(grid.nearest_point(Vec2::new(1.2, 3.9)), Some(Vec2::new(1.5, 3.5)));
    assert_eq!(grid.nearest_point(Vec2::new(2.5, 0.5)), None);
    assert!(grid.is_blocked(-1, 0));
}
