use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use chess_core::game_state::chess_types::{Position, NO_MOVE};
use chess_core::search::iterative_deepening::{iterative_deepening_search, SearchConfig};

#[derive(Clone, Copy)]
struct SearchCase {
    name: &'static str,
    fen: &'static str,
}

const CASES: &[SearchCase] = &[
    SearchCase {
        name: "startpos",
        fen: "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    },
    SearchCase {
        name: "classical_mid",
        fen: "r4rk1/1pp1qppp/p1np1n2/2b1p1B1/2B1P1b1/P1NP1N2/1PP1QPPP/R4RK1 w - - 0 10",
    },
    SearchCase {
        name: "tactical",
        fen: "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    },
    SearchCase {
        name: "end_krk",
        fen: "8/8/8/4k3/8/8/8/R3K3 w - - 0 1",
    },
];

fn bench_search(c: &mut Criterion) {
    let depth = match std::env::var("CHESS_BENCH_SUITE") {
        Ok(value) if value.eq_ignore_ascii_case("standard") => 5,
        _ => 3,
    };

    let mut group = c.benchmark_group(format!("search_d{depth}"));
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(4));
    group.sample_size(10);

    for case in CASES {
        let position = Position::from_fen(case.fen).expect("benchmark FEN should parse");
        let config = SearchConfig {
            max_depth: depth,
            ..SearchConfig::default()
        };

        group.bench_with_input(BenchmarkId::new(case.name, format!("d{depth}")), &position, |b, position| {
            b.iter(|| {
                let result = iterative_deepening_search(black_box(position), config)
                    .expect("search benchmark run should succeed");
                assert_ne!(result.best_move, NO_MOVE);
                black_box(result.nodes)
            });
        });
    }

    group.finish();
}

criterion_group!(search_benches, bench_search);
criterion_main!(search_benches);
