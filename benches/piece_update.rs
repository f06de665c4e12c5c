use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tetro_control::core::{ActivePiece, GridBoard, PieceDefinition, PieceTiming};
use tetro_control::types::{InputSnapshot, ShapeKind};

fn bench_update(c: &mut Criterion) {
    let mut board = GridBoard::new(10, 20);
    let mut piece = ActivePiece::spawn(
        PieceDefinition::of(ShapeKind::T),
        (4, 17),
        PieceTiming::default(),
        0.0,
    );
    let input = InputSnapshot::default();

    c.bench_function("update_16ms_frame", |b| {
        b.iter(|| {
            piece.update(&mut board, black_box(&input), 0.016, 0.016);
        })
    });
}

fn bench_try_move(c: &mut Criterion) {
    let board = GridBoard::new(10, 20);
    let mut piece = ActivePiece::spawn(
        PieceDefinition::of(ShapeKind::T),
        (4, 17),
        PieceTiming::default(),
        0.0,
    );

    c.bench_function("try_move", |b| {
        b.iter(|| {
            piece.try_move(&board, black_box((1, 0)), 0.016);
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let board = GridBoard::new(10, 20);
    let mut piece = ActivePiece::spawn(
        PieceDefinition::of(ShapeKind::T),
        (4, 17),
        PieceTiming::default(),
        0.0,
    );

    c.bench_function("rotate", |b| {
        b.iter(|| {
            piece.rotate(&board, black_box(1), 0.016);
        })
    });
}

fn bench_hard_drop(c: &mut Criterion) {
    let definition = PieceDefinition::of(ShapeKind::I);
    let mut piece = ActivePiece::spawn(definition, (4, 17), PieceTiming::default(), 0.0);

    c.bench_function("hard_drop", |b| {
        b.iter(|| {
            let mut board = GridBoard::new(10, 20);
            piece.initialize(definition, (4, 17), 0.0);
            piece.hard_drop(&mut board, 0.0);
        })
    });
}

criterion_group!(
    benches,
    bench_update,
    bench_try_move,
    bench_rotate,
    bench_hard_drop
);
criterion_main!(benches);
