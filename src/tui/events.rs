use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Everything a key press can mean. Navigation keys get their own variants
/// because their effect depends on which pane is focused; anything else is
/// passed through to the focused widget as an edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Copy,
    Reset,
    CursorStyle,
    FocusNext,
    FocusPrevious,
    Up,
    Down,
    Left,
    Right,
    Confirm,
    Edit(KeyEvent),
}

/// Ordered bindings shown in the help bar. This list is the documentation;
/// nothing is derived from the handlers.
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("ctrl+c", "copy"),
    ("ctrl+r", "reset"),
    ("ctrl+y", "cursor style"),
    ("esc", "quit"),
    ("←", "decrease weight"),
    ("→", "increase weight"),
];

pub fn map_key(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => return Action::Copy,
            KeyCode::Char('r') => return Action::Reset,
            KeyCode::Char('y') => return Action::CursorStyle,
            _ => {}
        }
    }

    match key.code {
        KeyCode::Esc => Action::Quit,
        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrevious,
        KeyCode::Up => Action::Up,
        KeyCode::Down => Action::Down,
        KeyCode::Left => Action::Left,
        KeyCode::Right => Action::Right,
        KeyCode::Enter => Action::Confirm,
        _ => Action::Edit(key),
    }
}
