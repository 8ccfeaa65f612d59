//! Transition throughput: full single-player games and win checks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use tictactoe_engine::core::{Board, GameRng, GameState, Mode};
use tictactoe_engine::rules::{apply_move, has_win_at};
use tictactoe_engine::{EngineConfig, GameEngine, Player, RandomOpponent};

fn bench_full_game(c: &mut Criterion) {
    let mut engine = GameEngine::new(EngineConfig::new().with_seed(42)).unwrap();

    c.bench_function("single_player_game_3x3", |b| {
        b.iter(|| {
            engine.reset();
            while !engine.state().is_over() {
                let cell = engine.state().board().empty_cells()[0];
                black_box(engine.apply_move(cell));
            }
        })
    });
}

fn bench_transition(c: &mut Criterion) {
    let state = GameState::new(5);
    let mut rng = GameRng::new(7);

    c.bench_function("apply_move_5x5", |b| {
        b.iter(|| {
            apply_move(
                black_box(&state),
                black_box(12),
                Mode::SinglePlayer,
                &RandomOpponent,
                &mut rng,
            )
        })
    });
}

fn bench_win_check(c: &mut Criterion) {
    let mut engine = GameEngine::new(
        EngineConfig::new()
            .with_side_length(8)
            .with_two_players(true)
            .with_seed(0),
    )
    .unwrap();
    for cell in [0, 8, 9, 16, 18, 24, 27] {
        engine.apply_move(cell);
    }
    let board: Board = engine.state().board().clone();

    c.bench_function("has_win_at_8x8", |b| {
        b.iter(|| has_win_at(black_box(&board), black_box(27), Player::One))
    });
}

criterion_group!(benches, bench_full_game, bench_transition, bench_win_check);
criterion_main!(benches);
