use std::hint::black_box;
use std::time::Duration;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use reversi_engine::board::Board;
use reversi_engine::cell::Color;
use reversi_engine::perft::{REFERENCE_COUNTS, perft, perft_root};

/// Depths slower than this are left to the test suite.
const MAX_BENCH_DEPTH: u32 = 6;

fn bench_perft_opening(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft_opening");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(5));

    for (depth, nodes) in REFERENCE_COUNTS
        .into_iter()
        .filter(|&(depth, _)| (4..=MAX_BENCH_DEPTH).contains(&depth))
    {
        assert_eq!(perft_root(depth), nodes, "perft mismatch at depth {depth}");
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft_root(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_perft_endgame(c: &mut Criterion) {
    // Ten empties left with Light to move.
    let board = Board::from_string(
        "XXXXXXO-
         XXXXXOO-
         XXOXOXXX
         XOXXXXXX
         XXOXOXX-
         XOOOXXX-
         -OOOOO--
         -XXXXX--",
    )
    .unwrap();

    let mut group = c.benchmark_group("perft_endgame");
    group.sample_size(10);

    for depth in [3, 4] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| perft(black_box(&board), Color::Light, black_box(depth)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft_opening, bench_perft_endgame);
criterion_main!(benches);
