use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by one PageUp/PageDown press.
pub const PAGE_SCROLL_ROWS: u16 = 5;

/// What a key press asks the chat loop to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit,
    Reset,
    NewLine,
    ScrollUp,
    ScrollDown,
    /// Anything else goes to the composer.
    Edit,
    Ignore,
}

pub fn map_key(key: &KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') | KeyCode::Char('d') if ctrl => KeyAction::Quit,
        KeyCode::Char('n') if ctrl => KeyAction::Reset,
        KeyCode::Enter
            if key
                .modifiers
                .intersects(KeyModifiers::ALT | KeyModifiers::SHIFT) =>
        {
            KeyAction::NewLine
        }
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::PageUp => KeyAction::ScrollUp,
        KeyCode::PageDown => KeyAction::ScrollDown,
        _ => KeyAction::Edit,
    }
}
