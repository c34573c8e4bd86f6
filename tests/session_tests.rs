//! Session tests - intents, gravity and the lock cycle through the facade

use pocket_tetris::core::{Board, Tetromino};
use pocket_tetris::session::GameState;
use pocket_tetris::types::{GameAction, PieceKind, Rotation};

fn started(seed: u64) -> GameState {
    let mut game = GameState::new(seed);
    game.start();
    game
}

/// Board whose bottom row is full except column 0, plus a vertical I above the hole
fn set_up_single_clear(game: &mut GameState) {
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::J, &[0]);
    game.set_board(board);
    game.set_active(Tetromino::new(PieceKind::I).rotated_to(Rotation::West).at(-1, 0));
}

#[test]
fn test_hard_drop_then_gravity_locks() {
    let mut game = started(1);
    game.set_active(Tetromino::new(PieceKind::T));
    game.set_next(Tetromino::new(PieceKind::S));

    assert!(game.apply_action(GameAction::HardDrop));
    assert_eq!(game.active().map(|p| p.y), Some(18));
    assert_eq!(game.board().filled_count(), 0);

    let interval = game.drop_interval_ms();
    let outcome = game.tick(interval).expect("resting piece locks");
    assert!(outcome.cleared_rows.is_empty());
    assert_eq!(outcome.score_gained, 0);
    assert!(!outcome.game_over);
    assert_eq!(game.board().filled_count(), 4);
    assert_eq!(game.active(), Some(Tetromino::new(PieceKind::S)));
    assert_eq!(game.last_lock(), Some(&outcome));
}

#[test]
fn test_line_clear_scores() {
    let mut game = started(2);
    set_up_single_clear(&mut game);

    game.apply_action(GameAction::HardDrop);
    let outcome = game.step_down().expect("lock");

    assert_eq!(outcome.cleared_rows.as_slice(), &[19]);
    assert_eq!(outcome.score_gained, 40);
    assert_eq!(game.score(), 40);
    assert_eq!(game.lines(), 1);
    assert_eq!(game.level(), 0);
    assert_eq!(game.board().filled_count(), 3);
}

#[test]
fn test_ten_lines_level_up() {
    let mut game = started(3);
    for _ in 0..10 {
        set_up_single_clear(&mut game);
        game.apply_action(GameAction::HardDrop);
        let outcome = game.step_down().expect("lock");
        assert_eq!(outcome.cleared_rows.len(), 1);
    }

    // Each clear is scored at the level it happened on
    assert_eq!(game.score(), 400);
    assert_eq!(game.lines(), 10);
    assert_eq!(game.level(), 1);
    assert_eq!(game.drop_interval_ms(), 950);

    set_up_single_clear(&mut game);
    game.apply_action(GameAction::HardDrop);
    assert_eq!(game.step_down().map(|o| o.score_gained), Some(80));
}

#[test]
fn test_soft_drop_and_gravity_share_the_floor() {
    let mut game = started(4);
    game.set_active(Tetromino::new(PieceKind::O));

    let mut moves = 0;
    while game.apply_action(GameAction::SoftDrop) {
        moves += 1;
    }
    assert_eq!(moves, 18);
    // Soft drop never locks on its own
    assert_eq!(game.board().filled_count(), 0);
    assert!(game.step_down().is_some());
}

#[test]
fn test_pause_freezes_intents_and_gravity() {
    let mut game = started(5);
    game.set_active(Tetromino::new(PieceKind::L));
    let before = game.active();

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.paused());
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::Rotate));
    assert_eq!(game.tick(10_000), None);
    assert_eq!(game.active(), before);

    assert!(game.apply_action(GameAction::Pause));
    assert!(game.apply_action(GameAction::MoveLeft));
}

#[test]
fn test_game_over_and_restart() {
    let mut game = started(6);
    let mut board = Board::new();
    for y in 2..20 {
        board.fill_row_except(y, PieceKind::Z, &[9]);
    }
    // Block the T spawn cells without completing rows 0 or 1
    board.set(5, 0, Some(PieceKind::Z));
    for x in 4..=6 {
        board.set(x, 1, Some(PieceKind::Z));
    }
    game.set_board(board);
    game.set_active(Tetromino::new(PieceKind::O).at(0, 0));
    game.set_next(Tetromino::new(PieceKind::T));

    let outcome = game.step_down().expect("lock");
    assert!(outcome.game_over);
    assert!(game.game_over());
    assert_eq!(game.active(), None);
    assert_eq!(game.next_piece(), Tetromino::new(PieceKind::T));
    assert!(!game.apply_action(GameAction::MoveLeft));
    assert!(!game.apply_action(GameAction::Pause));
    assert_eq!(game.tick(5_000), None);

    assert!(game.apply_action(GameAction::Restart));
    assert!(!game.game_over());
    assert!(game.playable());
    assert_eq!(game.score(), 0);
    assert_eq!(game.board().filled_count(), 0);
    assert!(game.active().is_some());
}

#[test]
fn test_snapshot_tracks_state() {
    let mut game = started(7);
    game.set_active(Tetromino::new(PieceKind::I));
    let snap = game.snapshot();

    assert!(snap.playable());
    assert_eq!(snap.active, game.active());
    assert_eq!(snap.ghost.map(|g| g.y), Some(18));
    assert_eq!(snap.next, game.next_piece());
    assert_eq!(snap.drop_interval_ms, 1000);
}

#[test]
fn test_same_seed_replays_identically() {
    let script = [
        GameAction::MoveLeft,
        GameAction::Rotate,
        GameAction::HardDrop,
        GameAction::MoveRight,
        GameAction::MoveRight,
        GameAction::HardDrop,
    ];

    let run = |seed: u64| {
        let mut game = started(seed);
        for action in script {
            game.apply_action(action);
            game.tick(1000);
        }
        game.snapshot()
    };

    assert_eq!(run(42), run(42));
}
