//! Benchmarks for move generation and game-state evaluation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_rules::Position;

const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

fn bench_perft(c: &mut Criterion) {
    let mut group = c.benchmark_group("perft");

    let start = Position::starting();
    for depth in 1..=3 {
        group.bench_with_input(BenchmarkId::new("startpos", depth), &depth, |b, &depth| {
            b.iter(|| start.perft(black_box(depth)))
        });
    }

    let kiwipete = Position::from_fen(KIWIPETE).unwrap();
    for depth in 1..=2 {
        group.bench_with_input(BenchmarkId::new("kiwipete", depth), &depth, |b, &depth| {
            b.iter(|| kiwipete.perft(black_box(depth)))
        });
    }

    group.finish();
}

fn bench_legal_moves(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_moves");

    let startpos = Position::starting();
    group.bench_function("startpos", |b| b.iter(|| black_box(startpos.legal_moves())));

    let middlegame =
        Position::from_fen("r1bqkb1r/pppp1ppp/2n2n2/4p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    group.bench_function("middlegame", |b| {
        b.iter(|| black_box(middlegame.legal_moves()))
    });

    let kiwipete = Position::from_fen(KIWIPETE).unwrap();
    group.bench_function("kiwipete", |b| b.iter(|| black_box(kiwipete.legal_moves())));

    group.finish();
}

fn bench_game_state(c: &mut Criterion) {
    let kiwipete = Position::from_fen(KIWIPETE).unwrap();
    c.bench_function("game_state/kiwipete", |b| {
        b.iter(|| black_box(kiwipete.game_state()))
    });
}

criterion_group!(benches, bench_perft, bench_legal_moves, bench_game_state);
criterion_main!(benches);
