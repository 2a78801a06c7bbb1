use std::time::Duration;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use attack_heatmap::game_state::chess_types::Side;
use attack_heatmap::rules_engine::board_rules_engine::BoardRulesEngine;
use attack_heatmap::visualizer::attack_map::compute_attack_map;
use attack_heatmap::visualizer::interaction_controller::{InputEvent, InteractionController};

#[derive(Clone, Copy)]
struct BenchCase {
    name: &'static str,
    fen: &'static str,
    /// Total attacker count over all squares, white then black.
    expected_totals: [u32; 2],
}

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const CASES: &[BenchCase] = &[
    BenchCase {
        name: "startpos",
        fen: STARTPOS_FEN,
        expected_totals: [38, 38],
    },
    BenchCase {
        name: "bare_kings",
        fen: "7k/8/8/8/8/8/8/K7 w - - 0 1",
        expected_totals: [3, 3],
    },
    BenchCase {
        name: "queens_centre",
        fen: "4k3/8/8/3q4/3Q4/8/8/4K3 w - - 0 1",
        expected_totals: [29, 29],
    },
];

fn bench_attack_maps(c: &mut Criterion) {
    let mut group = c.benchmark_group("attack_maps");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let engine = BoardRulesEngine::from_fen(case.fen).expect("benchmark FEN should parse");

        // Correctness guard before benchmarking.
        for side in Side::BOTH {
            assert_eq!(
                compute_attack_map(&engine, side).total(),
                case.expected_totals[side.index()],
                "attack total mismatch for {} {:?}",
                case.name,
                side
            );
        }

        group.bench_with_input(BenchmarkId::from_parameter(case.name), &engine, |b, engine| {
            b.iter(|| {
                let white = compute_attack_map(black_box(engine), Side::White);
                let black = compute_attack_map(black_box(engine), Side::Black);
                black_box((white, black))
            });
        });
    }

    group.finish();
}

fn bench_compose_scene(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose_scene");
    group.warm_up_time(Duration::from_secs(1));
    group.measurement_time(Duration::from_secs(3));

    for case in CASES {
        let engine = BoardRulesEngine::from_fen(case.fen).expect("benchmark FEN should parse");
        let mut controller = InteractionController::new(engine);
        // Select the white king so target highlights are part of the frame.
        let king = controller
            .engine()
            .position()
            .king_square(Side::White)
            .expect("benchmark positions have a white king");
        let (x, y) = controller.layout().square_rect(king).center();
        controller.handle_event(InputEvent::PointerDown { x, y });

        group.bench_function(BenchmarkId::from_parameter(case.name), |b| {
            b.iter(|| black_box(controller.compose_scene()));
        });
    }

    group.finish();
}

criterion_group!(frame_benches, bench_attack_maps, bench_compose_scene);
criterion_main!(frame_benches);
