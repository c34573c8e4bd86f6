//! Rendering tests - game snapshots drawn into a framebuffer

use pocket_tetris::core::{Board, Tetromino};
use pocket_tetris::session::GameState;
use pocket_tetris::term::{
    encode_diff_into, encode_full_into, FrameBuffer, GameView, Rgb, Viewport,
};
use pocket_tetris::types::{GameAction, PieceKind, Rotation};

fn find(fb: &FrameBuffer, needle: &str) -> bool {
    (0..fb.height()).any(|y| fb.row_text(y).contains(needle))
}

fn count_painted(fb: &FrameBuffer, ch: char, fg: Rgb) -> usize {
    (0..fb.height())
        .flat_map(|y| (0..fb.width()).map(move |x| (x, y)))
        .filter_map(|(x, y)| fb.get(x, y))
        .filter(|cell| cell.ch == ch && cell.style.fg == fg)
        .count()
}

#[test]
fn test_locked_cells_use_piece_colour() {
    let mut game = GameState::new(11);
    game.start();
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::Z, &[0, 1, 2, 3, 4, 5]);
    game.set_board(board);
    game.set_active(Tetromino::new(PieceKind::T));
    game.set_next(Tetromino::new(PieceKind::I));

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));

    // 4 locked cells, two columns each
    assert_eq!(count_painted(&fb, '█', Rgb::of_piece(PieceKind::Z)), 8);
    assert_eq!(count_painted(&fb, '█', Rgb::of_piece(PieceKind::T)), 8);
    // Ghost sits on the floor away from the active piece
    assert_eq!(count_painted(&fb, '░', Rgb::new(120, 120, 130)), 8);
}

#[test]
fn test_side_panel_shows_score() {
    let mut game = GameState::new(12);
    game.start();
    let mut board = Board::new();
    board.fill_row_except(19, PieceKind::J, &[0]);
    game.set_board(board);
    game.set_active(Tetromino::new(PieceKind::I).rotated_to(Rotation::West).at(-1, 0));
    game.apply_action(GameAction::HardDrop);
    game.step_down();

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));
    assert!(find(&fb, "SCORE"));
    assert!(find(&fb, "40"));
    assert!(find(&fb, "NEXT"));
}

#[test]
fn test_pause_overlay() {
    let mut game = GameState::new(13);
    game.start();
    game.apply_action(GameAction::Pause);

    let fb = GameView::default().render(&game.snapshot(), Viewport::new(60, 24));
    assert!(find(&fb, "PAUSED"));
}

#[test]
fn test_diff_only_touches_changed_cells() {
    let mut game = GameState::new(14);
    game.start();
    let view = GameView::default();
    let viewport = Viewport::new(60, 24);

    let before = view.render(&game.snapshot(), viewport);
    let mut full = Vec::new();
    encode_full_into(&before, &mut full).unwrap();

    let mut unchanged = Vec::new();
    encode_diff_into(&before, &before, &mut unchanged).unwrap();
    assert!(unchanged.len() < full.len() / 10);

    game.apply_action(GameAction::MoveLeft);
    let after = view.render(&game.snapshot(), viewport);
    let mut diff = Vec::new();
    encode_diff_into(&before, &after, &mut diff).unwrap();
    assert!(diff.len() > unchanged.len());
    assert!(diff.len() < full.len());
}
