//! Criterion benchmarks for the move-legality query.
//!
//! Each case rebuilds its board once, asserts the expected move count, and
//! then measures `valid_moves`, which re-snapshots the grid on every call.

use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use gamearena::arena::arena_types::{Square, UnitId, Vector};
use gamearena::arena::game_arena::GameArena;
use gamearena::arena::unit::UnitKind;

struct BenchCase {
    name: &'static str,
    build: fn() -> (GameArena, UnitId),
    expected_moves: usize,
}

fn rook_open_board() -> (GameArena, UnitId) {
    let mut arena = GameArena::new(8, 8);
    let rook = arena
        .recruit(1, Some(Square::new(3, 3)), UnitKind::Rook)
        .expect("recruit should succeed");
    (arena, rook)
}

fn queen_in_crossfire() -> (GameArena, UnitId) {
    let mut arena = GameArena::new(8, 8);
    let queen = arena
        .recruit(1, Some(Square::new(3, 3)), UnitKind::Queen)
        .expect("recruit should succeed");
    arena
        .recruit(1, Some(Square::new(1, 1)), UnitKind::Knight)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(3, 7)), UnitKind::Rook)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(7, 3)), UnitKind::Rook)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(0, 3)), UnitKind::Knight)
        .expect("recruit should succeed");
    (arena, queen)
}

fn king_under_fire() -> (GameArena, UnitId) {
    let mut arena = GameArena::new(8, 8);
    let king = arena
        .recruit(1, Some(Square::new(4, 4)), UnitKind::King)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(4, 0)), UnitKind::Rook)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(0, 4)), UnitKind::Rook)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(1, 1)), UnitKind::Bishop)
        .expect("recruit should succeed");
    arena
        .recruit(2, Some(Square::new(6, 6)), UnitKind::Knight)
        .expect("recruit should succeed");
    arena
        .recruit(
            2,
            Some(Square::new(5, 6)),
            UnitKind::Pawn {
                forward: Vector::new(0, -1),
            },
        )
        .expect("recruit should succeed");
    (arena, king)
}

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "rook_open_board",
        build: rook_open_board,
        expected_moves: 14,
    },
    BenchCase {
        name: "queen_in_crossfire",
        build: queen_in_crossfire,
        expected_moves: 25,
    },
    BenchCase {
        name: "king_under_fire",
        build: king_under_fire,
        expected_moves: 3,
    },
];

fn bench_valid_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("valid_moves");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(60);

    for case in CASES {
        let (arena, unit_id) = (case.build)();

        // Guard against measuring a broken query.
        let probe = arena.valid_moves(unit_id);
        assert_eq!(
            probe.len(),
            case.expected_moves,
            "unexpected move count for {}",
            case.name
        );

        group.throughput(Throughput::Elements(case.expected_moves as u64));
        group.bench_function(case.name, |b| {
            b.iter(|| {
                let moves = black_box(&arena).valid_moves(black_box(unit_id));
                assert_eq!(moves.len(), case.expected_moves);
                moves.len()
            });
        });
    }

    group.finish();
}

criterion_group!(valid_moves_benches, bench_valid_moves);
criterion_main!(valid_moves_benches);
