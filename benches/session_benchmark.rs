//! Performance benchmarks for the session engine
//!
//! Measures scripted playthrough throughput and the cost of rewinding a
//! long run of reversible moves through the undo log.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use gumshoe_rs::game::{script::demo_script, GameState, Session, VerbosityLevel};
use gumshoe_rs::undo::UndoLog;

fn silent_session() -> GameState {
    let mut game = GameState::new("Bench");
    game.logger.set_verbosity(VerbosityLevel::Silent);
    game
}

fn bench_demo_script(c: &mut Criterion) {
    let script = demo_script();

    c.bench_function("demo_script", |b| {
        b.iter(|| {
            let mut game = silent_session();
            let summary = Session::new(&mut game).run_script(black_box(&script));
            black_box(summary.final_points)
        })
    });
}

fn bench_demo_script_disabled_log(c: &mut Criterion) {
    let script = demo_script();

    c.bench_function("demo_script_disabled_log", |b| {
        b.iter(|| {
            let mut game = silent_session();
            game.undo_log = UndoLog::disabled();
            let summary = Session::new(&mut game).run_script(black_box(&script));
            black_box(summary.final_points)
        })
    });
}

fn bench_grab_undo_rewind(c: &mut Criterion) {
    c.bench_function("grab_undo_rewind_100", |b| {
        b.iter(|| {
            let mut game = silent_session();
            for _ in 0..100 {
                game.grab(black_box("magnifying glass"));
            }
            while !game.undo_log.is_empty() {
                game.undo();
            }
            black_box(game.overall_points())
        })
    });
}

criterion_group!(
    benches,
    bench_demo_script,
    bench_demo_script_disabled_log,
    bench_grab_undo_rewind
);
criterion_main!(benches);
