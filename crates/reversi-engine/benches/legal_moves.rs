use criterion::{Criterion, criterion_group, criterion_main};
use reversi_engine::board::Board;
use reversi_engine::capture;
use reversi_engine::cell::Color;
use reversi_engine::move_list::MoveList;
use reversi_engine::square::Square;
use std::hint::black_box;

fn midgame_board() -> Board {
    Board::from_string(
        "--XXXO--
         -OOXXO--
         OOOXOXX-
         OOXOXXO-
         OXXOOXO-
         -XOXOOO-
         --OXXO--
         ---XO---",
    )
    .unwrap()
}

fn bench_move_list_opening(c: &mut Criterion) {
    let board = Board::new();

    c.bench_function("move_list_opening", |b| {
        b.iter(|| MoveList::new(black_box(&board), black_box(Color::Dark)))
    });
}

fn bench_move_list_midgame(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("move_list_midgame", |b| {
        b.iter(|| MoveList::new(black_box(&board), black_box(Color::Light)))
    });
}

fn bench_probe(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("capture_probe", |b| {
        b.iter(|| {
            capture::probe(
                black_box(&board),
                black_box(Square::H3),
                black_box(Color::Light),
            )
        })
    });
}

fn bench_has_legal_moves(c: &mut Criterion) {
    let board = midgame_board();

    c.bench_function("has_legal_moves", |b| {
        b.iter(|| black_box(&board).has_legal_moves(black_box(Color::Dark)))
    });
}

criterion_group!(
    benches,
    bench_move_list_opening,
    bench_move_list_midgame,
    bench_probe,
    bench_has_legal_moves
);
criterion_main!(benches);
