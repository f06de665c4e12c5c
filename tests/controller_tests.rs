//! End-to-end controller tests: input latch -> snapshot -> per-frame update.

use tetro_control::core::{ActivePiece, GridBoard, PieceDefinition, PieceStatus, PieceTiming};
use tetro_control::input::InputLatch;
use tetro_control::types::{Button, InputSnapshot, ShapeKind};

fn spawn(kind: ShapeKind, position: (i32, i32)) -> (GridBoard, ActivePiece) {
    let board = GridBoard::new(10, 20);
    let piece = ActivePiece::spawn(
        PieceDefinition::of(kind),
        position,
        PieceTiming::default(),
        0.0,
    );
    (board, piece)
}

#[test]
fn held_direction_repeats_with_initial_delay() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let mut latch = InputLatch::new();
    latch.button_down(Button::MoveLeft);

    // Press frame: the move timer has not elapsed yet, nothing moves.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.05, 0.05);
    assert_eq!(piece.position(), (4, 17));

    // First accepted move; arms the extra repeat delay.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.15, 0.10);
    assert_eq!(piece.position(), (3, 17));

    // Still inside the repeat delay: held but no movement.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.30, 0.15);
    assert_eq!(piece.position(), (3, 17));

    // Repeat delay elapsed; from here on only the move delay gates.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.40, 0.10);
    assert_eq!(piece.position(), (2, 17));

    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.55, 0.15);
    assert_eq!(piece.position(), (1, 17));
}

#[test]
fn releasing_the_direction_stops_repeats() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let mut latch = InputLatch::new();
    latch.button_down(Button::MoveRight);

    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.15, 0.15);
    assert_eq!(piece.position(), (5, 17));

    latch.button_up(Button::MoveRight);
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.40, 0.25);
    assert_eq!(piece.position(), (5, 17));
    assert_eq!(piece.repeat_delay(), 0.0, "release resets the repeat delay");
}

#[test]
fn soft_drop_rearms_gravity() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let mut latch = InputLatch::new();
    latch.button_down(Button::SoftDrop);

    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.2, 0.2);
    assert_eq!(piece.position(), (4, 16));

    // The soft drop pushed the gravity mark past the original 1.0s, so
    // this frame moves exactly one more row, not two.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 1.05, 0.85);
    assert_eq!(piece.position(), (4, 15));
}

#[test]
fn rotate_left_wins_when_both_are_latched() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let mut latch = InputLatch::new();
    latch.button_down(Button::RotateLeft);
    latch.button_down(Button::RotateRight);

    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.05, 0.05);
    assert_eq!(piece.rotation_index(), 3);
}

#[test]
fn hard_drop_locks_within_the_frame() {
    let (mut board, mut piece) = spawn(ShapeKind::I, (4, 10));
    let mut latch = InputLatch::new();
    latch.button_down(Button::HardDrop);

    let input = latch.snapshot();
    let status = piece.update(&mut board, &input, 0.05, 0.05);

    assert_eq!(status, PieceStatus::Locked);
    assert!(piece.is_locked());
    assert_eq!(board.clear_lines_calls(), 1);
    assert_eq!(board.spawn_requests(), 1);
    for x in 3..7 {
        assert!(board.occupied(x, 0), "({x}, 0) should be stamped");
    }
}

#[test]
fn footprint_follows_the_piece() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let mut latch = InputLatch::new();

    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.016, 0.016);
    assert!(board.occupied(4, 18));
    assert!(board.occupied(3, 17) && board.occupied(4, 17) && board.occupied(5, 17));

    latch.button_down(Button::MoveLeft);
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.15, 0.134);

    assert_eq!(piece.position(), (3, 17));
    assert!(board.occupied(3, 18));
    assert!(board.occupied(2, 17) && board.occupied(3, 17) && board.occupied(4, 17));
    assert!(!board.occupied(5, 17), "old footprint is cleared");
    assert!(!board.occupied(4, 18), "old footprint is cleared");
}

#[test]
fn gravity_steps_one_row_per_interval() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 17));
    let input = InputSnapshot::default();

    piece.update(&mut board, &input, 0.9, 0.9);
    assert_eq!(piece.position(), (4, 17));

    piece.update(&mut board, &input, 1.1, 0.2);
    assert_eq!(piece.position(), (4, 16));

    // Next mark sits one full step past the frame that moved.
    piece.update(&mut board, &input, 2.0, 0.9);
    assert_eq!(piece.position(), (4, 16));

    piece.update(&mut board, &input, 2.2, 0.2);
    assert_eq!(piece.position(), (4, 15));
}

#[test]
fn landed_piece_locks_after_the_lock_delay() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 0));
    let input = InputSnapshot::default();

    let status = piece.update(&mut board, &input, 1.1, 1.1);

    assert_eq!(status, PieceStatus::Locked);
    assert!(board.occupied(4, 1));
    assert!(board.occupied(3, 0) && board.occupied(4, 0) && board.occupied(5, 0));
    assert_eq!(board.spawn_requests(), 1);

    // The host rebinds the controller to the next piece.
    piece.initialize(PieceDefinition::of(ShapeKind::O), (4, 17), 1.1);
    let status = piece.update(&mut board, &input, 1.2, 0.1);
    assert_eq!(status, PieceStatus::Falling);
    assert_eq!(piece.position(), (4, 17));
    assert_eq!(piece.rotation_index(), 0);
}

#[test]
fn adjusting_a_landed_piece_postpones_the_lock() {
    let (mut board, mut piece) = spawn(ShapeKind::T, (4, 0));
    let mut latch = InputLatch::new();

    // Land-ish state: resting on the floor, lock timer running.
    let input = latch.snapshot();
    piece.update(&mut board, &input, 0.3, 0.3);
    assert_eq!(piece.position(), (4, 0));

    // A sideways move resets the lock timer.
    latch.button_down(Button::MoveLeft);
    let input = latch.snapshot();
    let status = piece.update(&mut board, &input, 0.45, 0.15);
    assert_eq!(status, PieceStatus::Falling);
    assert_eq!(piece.position(), (3, 0));
    assert_eq!(piece.lock_time(), 0.0);

    // With no further moves the next gravity step locks it.
    latch.button_up(Button::MoveLeft);
    let input = latch.snapshot();
    let status = piece.update(&mut board, &input, 1.1, 0.65);
    assert_eq!(status, PieceStatus::Locked);
}
