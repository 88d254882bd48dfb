//! Benchmarks for full game playouts and session snapshots.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tessera::cards::{Card, CardId, Powers};
use tessera::core::{GameConfig, PlayerId};
use tessera::session::{GameSession, GameSessionBuilder};

fn deck(start: u32) -> Vec<Arc<Card>> {
    (0..10u32)
        .map(|i| {
            let p = (i % 10 + 1) as u8;
            Arc::new(Card::new(CardId::new(start + i), "bench", Powers::new(p, 11 - p, (p + 3) % 10 + 1, 5)))
        })
        .collect()
}

fn new_session(seed: u64) -> GameSession {
    GameSessionBuilder::new(GameConfig::default())
        .deck(PlayerId::ONE, deck(1))
        .deck(PlayerId::TWO, deck(101))
        .build(seed)
        .unwrap()
}

fn playout(mut session: GameSession) -> GameSession {
    let mut pick = 0usize;
    loop {
        let moves = session.legal_moves();
        if moves.is_empty() {
            return session;
        }
        pick = (pick * 7 + 3) % moves.len();
        session.apply_move(moves[pick]).unwrap();
    }
}

fn bench_playout(c: &mut Criterion) {
    c.bench_function("full_playout", |b| {
        let mut seed = 0u64;
        b.iter(|| {
            seed += 1;
            black_box(playout(new_session(seed)))
        })
    });

    let base = new_session(42);
    c.bench_function("playout_from_clone", |b| {
        b.iter(|| black_box(playout(base.clone())))
    });
}

fn bench_snapshot(c: &mut Criterion) {
    let mut session = new_session(7);
    for _ in 0..4 {
        let mv = session.legal_moves()[0];
        session.apply_move(mv).unwrap();
    }

    c.bench_function("snapshot_to_bytes", |b| b.iter(|| black_box(session.to_bytes().unwrap())));

    let bytes = session.to_bytes().unwrap();
    c.bench_function("snapshot_from_bytes", |b| {
        b.iter(|| black_box(GameSession::from_bytes(&bytes).unwrap()))
    });
}

criterion_group!(benches, bench_playout, bench_snapshot);
criterion_main!(benches);
