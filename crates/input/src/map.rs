//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Letter bindings, matched case-insensitively: arrows-as-letters for vim
/// (hjkl) and WASD hands, plus `x` as a second rotate key.
const LETTER_BINDINGS: [(char, GameAction); 12] = [
    ('h', GameAction::MoveLeft),
    ('a', GameAction::MoveLeft),
    ('l', GameAction::MoveRight),
    ('d', GameAction::MoveRight),
    ('j', GameAction::SoftDrop),
    ('s', GameAction::SoftDrop),
    ('k', GameAction::Rotate),
    ('w', GameAction::Rotate),
    ('x', GameAction::Rotate),
    (' ', GameAction::HardDrop),
    ('p', GameAction::Pause),
    ('r', GameAction::Restart),
];

/// Map a key press to a game action.
///
/// Release and repeat events are ignored; each press is one intent.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press || should_quit(key) {
        return None;
    }

    match key.code {
        KeyCode::Left => Some(GameAction::MoveLeft),
        KeyCode::Right => Some(GameAction::MoveRight),
        KeyCode::Down => Some(GameAction::SoftDrop),
        KeyCode::Up => Some(GameAction::Rotate),
        KeyCode::Esc => Some(GameAction::Pause),
        KeyCode::Enter => Some(GameAction::Restart),
        KeyCode::Char(ch) => lookup_letter(ch),
        _ => None,
    }
}

fn lookup_letter(ch: char) -> Option<GameAction> {
    let ch = ch.to_ascii_lowercase();
    LETTER_BINDINGS
        .iter()
        .find(|(key, _)| *key == ch)
        .map(|(_, action)| *action)
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&'q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
