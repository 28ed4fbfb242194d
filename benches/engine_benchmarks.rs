//! Benchmarks for move generation and game-state detection.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::board::{AttackMap, Board, PieceColor};

/// Italian opening after 1.e4 e5 2.Nf3 Nc6 3.Bc4 Nf6, White to move.
fn middlegame() -> Board {
    let mut board = Board::new();
    for text in ["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6"] {
        board.make_move_str(text).expect("opening line is legal");
    }
    board
}

/// Scholar's mate, Black to move and mated.
fn mated() -> Board {
    let mut board = Board::new();
    for text in ["e2e4", "e7e5", "f1c4", "b8c6", "d1h5", "g8f6", "h5f7"] {
        board.make_move_str(text).expect("mating line is legal");
    }
    board
}

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let board = Board::new();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| board.perft(PieceColor::White, black_box(depth)))
        });
    }

    let middlegame = middlegame();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("middlegame", depth), &depth, |b, &depth| {
            b.iter(|| middlegame.perft(PieceColor::White, black_box(depth)))
        });
    }

    group.finish();
}

fn bench_movegen(c: &mut Criterion) {
    let mut group = c.benchmark_group("movegen");

    let startpos = Board::new();
    group.bench_function("startpos", |b| {
        b.iter(|| black_box(startpos.legal_moves(PieceColor::White)))
    });

    let middlegame = middlegame();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves(PieceColor::White)))
    });

    group.bench_function("clone", |b| b.iter(|| black_box(middlegame.clone())));

    group.finish();
}

fn bench_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("detection");

    let positions = [
        ("startpos", Board::new(), PieceColor::White),
        ("middlegame", middlegame(), PieceColor::White),
        ("checkmate", mated(), PieceColor::Black),
    ];

    for (name, board, color) in &positions {
        group.bench_with_input(BenchmarkId::new("status", name), board, |b, board| {
            b.iter(|| black_box(board.status(*color)))
        });
        group.bench_with_input(BenchmarkId::new("attack_map", name), board, |b, board| {
            b.iter(|| black_box(AttackMap::new(board)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_perft, bench_movegen, bench_detection);
criterion_main!(benches);
