use ai_nav::{NavGrid, Navigator, Vec2};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn serpentine_grid(size: u32) -> NavGrid {
    let mut grid = NavGrid::new(size, size, 1.0);
    let size = size as i32;
    // Alternating walls force the route to snake across the whole grid.
    for (n, x) in (2..size - 1).step_by(4).enumerate() {
        let gap = if n % 2 == 0 { size - 1 } else { 0 };
        for y in 0..size {
            if y != gap {
                grid.set_blocked(x, y, true);
            }
        }
    }
    grid
}

fn bench_nav_grid(c: &mut Criterion) {
    let grid = serpentine_grid(64);
    let start = Vec2::new(0.5, 0.5);
    let goal = Vec2::new(63.5, 63.5);

    c.bench_function("ai-nav/nav_grid.find_path(64x64 serpentine)", |b| {
        b.iter(|| {
            let path = grid.find_path(black_box(start), black_box(goal));
            black_box(path.map(|p| p.points.len()));
        })
    });
}

criterion_group!(benches, bench_nav_grid);
criterion_main!(benches);
