use criterion::{criterion_group, criterion_main, Criterion};
use kinarow::eval::evaluate;
use kinarow::search::{generate_moves, Searcher, TimeControl};
use kinarow::{Board, Piece, Pos};
use std::hint::black_box;
use std::time::Duration;

/// Connect Four midgame, columns dropped alternately
fn connect_four_midgame() -> Board {
    let mut board = Board::new(7, 6);
    let mut piece = Piece::Opponent;
    for col in [3, 3, 2, 4, 4, 2, 5, 1, 3, 0] {
        if let Some(pos) = board.drop_cell(col) {
            board.place_stone(pos, piece);
            piece = piece.opponent();
        }
    }
    board
}

/// Gomoku opening cluster around the centre
fn gomoku_opening() -> Board {
    let mut board = Board::new(15, 15);
    let stones = [(7, 7), (8, 8), (7, 8), (6, 6), (8, 7), (9, 6)];
    for (i, (col, row)) in stones.into_iter().enumerate() {
        let piece = if i % 2 == 0 { Piece::Opponent } else { Piece::Player };
        board.place_stone(Pos::new(col, row), piece);
    }
    board
}

fn bench_evaluate(c: &mut Criterion) {
    let c4 = connect_four_midgame();
    let gomoku = gomoku_opening();

    let mut group = c.benchmark_group("evaluate");
    group.bench_function("connect_four", |b| b.iter(|| evaluate(black_box(&c4), 4)));
    group.bench_function("gomoku", |b| b.iter(|| evaluate(black_box(&gomoku), 5)));
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("fixed_depth_search");
    group.sample_size(20);
    group.measurement_time(Duration::from_secs(5));

    let mut c4 = connect_four_midgame();
    let c4_moves = generate_moves(&c4, true, &[]);
    for depth in [4, 6] {
        group.bench_function(format!("connect_four_d{depth}"), |b| {
            b.iter(|| {
                let mut searcher = Searcher::new(4, true, TimeControl::unlimited());
                let result = searcher.search_root(&mut c4, &c4_moves, depth, c4_moves[0]);
                black_box(result.score)
            })
        });
    }

    let mut gomoku = gomoku_opening();
    let gomoku_moves = generate_moves(&gomoku, false, &[]);
    group.bench_function("gomoku_d2", |b| {
        b.iter(|| {
            let mut searcher = Searcher::new(5, false, TimeControl::unlimited());
            let result = searcher.search_root(&mut gomoku, &gomoku_moves, 2, gomoku_moves[0]);
            black_box(result.score)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_search);
criterion_main!(benches);
