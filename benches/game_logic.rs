use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{apply_move, status, GameSnapshot, GameState, Grid, TileSpawner};
use tui_2048::types::Direction;

fn dense_grid() -> Grid {
    Grid::from_rows([
        [2, 2, 4, 0],
        [0, 16, 16, 4],
        [2, 0, 0, 2],
        [8, 4, 8, 4],
    ])
}

fn bench_apply_move(c: &mut Criterion) {
    c.bench_function("apply_move_left", |b| {
        b.iter(|| {
            let mut grid = dense_grid();
            apply_move(&mut grid, black_box(Direction::Left))
        })
    });
}

fn bench_status(c: &mut Criterion) {
    let grid = dense_grid();
    c.bench_function("status_evaluate", |b| {
        b.iter(|| status::evaluate(black_box(&grid)))
    });
}

fn bench_spawn(c: &mut Criterion) {
    let mut spawner = TileSpawner::new(12345);
    c.bench_function("spawn_tile", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            spawner.spawn(&mut grid)
        })
    });
}

fn bench_full_cycle(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();
    let mut i = 0usize;
    c.bench_function("move_cycle", |b| {
        b.iter(|| {
            let direction = Direction::all()[i % 4];
            i = i.wrapping_add(1);
            if game.game_over() {
                game.restart();
            }
            game.apply_direction(black_box(direction))
        })
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();
    let mut snap = GameSnapshot::default();
    c.bench_function("snapshot_into", |b| {
        b.iter(|| {
            game.snapshot_into(&mut snap);
            black_box(&snap);
        })
    });
}

criterion_group!(
    benches,
    bench_apply_move,
    bench_status,
    bench_spawn,
    bench_full_cycle,
    bench_snapshot
);
criterion_main!(benches);
