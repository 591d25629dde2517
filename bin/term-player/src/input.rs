//! Translation of crossterm key events into key names understood by the keymap.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Quit,
    Key(String),
}

/// Names a key the way the keymap does: `ArrowLeft`, `Space`, `KeyJ`, `Digit1`, ...
pub fn key_name(code: KeyCode) -> Option<String> {
    let name = match code {
        KeyCode::Up => "ArrowUp".into(),
        KeyCode::Down => "ArrowDown".into(),
        KeyCode::Left => "ArrowLeft".into(),
        KeyCode::Right => "ArrowRight".into(),
        KeyCode::Enter => "Enter".into(),
        KeyCode::Tab => "Tab".into(),
        KeyCode::Backspace => "Backspace".into(),
        KeyCode::Esc => "Escape".into(),
        KeyCode::Char(' ') => "Space".into(),
        KeyCode::Char(c) if c.is_ascii_alphabetic() => format!("Key{}", c.to_ascii_uppercase()),
        KeyCode::Char(c) if c.is_ascii_digit() => format!("Digit{c}"),
        _ => return None,
    };
    Some(name)
}

/// Returns `None` for key releases and keys with no name.
pub fn command(ev: &KeyEvent) -> Option<Command> {
    if ev.kind == KeyEventKind::Release {
        return None;
    }
    match ev.code {
        KeyCode::Esc | KeyCode::Char('q') => return Some(Command::Quit),
        KeyCode::Char('c') if ev.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Command::Quit)
        }
        _ => {}
    }
    key_name(ev.code).map(Command::Key)
}
