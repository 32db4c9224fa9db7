use std::hint::black_box;
use std::time::Duration;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use sable_chess::game_state::game_state::GameState;
use sable_chess::search::board_scoring::{BoardScorer, PieceSquareScorer};
use sable_chess::search::negamax::{find_best_move_greedy, search_bounded, SearchConfig};

const POSITIONS: &[(&str, &str)] = &[
    ("startpos", "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
    ("kiwipete", "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1"),
    ("endgame", "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1"),
];

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("negamax");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(5));
    group.sample_size(10);

    for (name, fen) in POSITIONS {
        let mut game = GameState::from_fen(fen).expect("benchmark FEN should parse");
        let moves = game.legal_moves();

        for depth in [2u8, 3] {
            let config = SearchConfig { depth };
            group.bench_with_input(BenchmarkId::new(*name, depth), &config, |b, config| {
                b.iter(|| {
                    let result = search_bounded(
                        black_box(&mut game),
                        black_box(&moves),
                        config,
                        &PieceSquareScorer,
                        None,
                    );
                    black_box(result.best_move)
                });
            });
        }

        group.bench_function(BenchmarkId::new(*name, "greedy"), |b| {
            b.iter(|| black_box(find_best_move_greedy(black_box(&mut game), black_box(&moves))));
        });
    }

    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let game = GameState::from_fen(POSITIONS[1].1).expect("benchmark FEN should parse");
    c.bench_function("evaluate_kiwipete", |b| {
        b.iter(|| black_box(PieceSquareScorer.score(black_box(&game))));
    });
}

criterion_group!(search_benches, bench_search, bench_evaluate);
criterion_main!(search_benches);
