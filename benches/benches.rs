use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use deep_chess_engine::{perft, Game};

const MIDDLEGAME: &str = r#"[
    {"from":"e2","to":"e4"},{"from":"e7","to":"e5"},
    {"from":"g1","to":"f3"},{"from":"b8","to":"c6"},
    {"from":"f1","to":"b5"},{"from":"g8","to":"f6"},
    {"from":"e1","to":"g1"},{"from":"f8","to":"e7"}
]"#;

fn bench_perft(c: &mut Criterion) {
    let game = Game::new();
    c.bench_function("perft 3", |b| {
        b.iter(|| assert_eq!(perft(black_box(&game), 3), 8902))
    });
}

fn bench_generate_moves(c: &mut Criterion) {
    let game = Game::from_history(MIDDLEGAME).expect("legal history");
    c.bench_function("generate moves", |b| b.iter(|| black_box(&game).moves().len()));
}

fn bench_replay(c: &mut Criterion) {
    c.bench_function("replay history", |b| {
        b.iter(|| Game::from_history(black_box(MIDDLEGAME)).expect("legal history"))
    });
}

criterion_group!(benches, bench_perft, bench_generate_moves, bench_replay);
criterion_main!(benches);
