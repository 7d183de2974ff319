//! Search benchmarks.
//!
//! Run with: `cargo bench`
//!
//! Measures full searches at several iteration budgets, searches from
//! different game phases, and the fixed-point primitives on their own.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use grid_mcts::core::Player;
use grid_mcts::fixed::{self, Fixed};
use grid_mcts::games::tictactoe::{Grid, TicTacToe};
use grid_mcts::mcts::{UctConfig, UctSearch};

fn bench_search_iterations(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_iterations");

    for iterations in [100u32, 400, 1_600] {
        group.throughput(Throughput::Elements(u64::from(iterations)));
        group.bench_with_input(
            BenchmarkId::new("empty_board", iterations),
            &iterations,
            |b, &iterations| {
                let config = UctConfig::default()
                    .with_iterations(iterations)
                    .with_seed(42);
                let mut search = UctSearch::new(TicTacToe, config);
                let board = Grid::empty();

                b.iter(|| black_box(search.select_move(&board, Player::X).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_game_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_phases");
    let config = UctConfig::default().with_iterations(400).with_seed(42);

    group.bench_function("opening", |b| {
        let mut search = UctSearch::new(TicTacToe, config.clone());
        let board = Grid::empty();
        b.iter(|| black_box(search.select_move(&board, Player::X).unwrap()));
    });

    group.bench_function("midgame", |b| {
        let mut search = UctSearch::new(TicTacToe, config.clone());
        let board = Grid::from_rows(["X.X", ".O.", "O.."]);
        b.iter(|| black_box(search.select_move(&board, Player::X).unwrap()));
    });

    group.bench_function("near_terminal", |b| {
        let mut search = UctSearch::new(TicTacToe, config.clone());
        let board = Grid::from_rows(["XX.", "OO.", "..."]);
        b.iter(|| black_box(search.select_move(&board, Player::X).unwrap()));
    });

    group.finish();
}

fn bench_fixed_point(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_point");

    group.bench_function("log", |b| {
        b.iter(|| black_box(fixed::log(black_box(1_000))));
    });

    group.bench_function("sqrt", |b| {
        b.iter(|| black_box(fixed::sqrt(black_box(Fixed::from_int(1_000)))));
    });

    group.bench_function("power_16", |b| {
        b.iter(|| black_box(fixed::power(black_box(Fixed::from_int(3)), 16)));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_search_iterations,
    bench_game_phases,
    bench_fixed_point,
);

criterion_main!(benches);
