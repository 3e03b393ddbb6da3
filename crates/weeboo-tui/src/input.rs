use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::action::Action;
use crate::app::InputMode;
use crate::model::panes::Pane;

/// Map a crossterm terminal event to a TUI action, respecting input mode.
pub fn map_event(event: &Event, input_mode: &InputMode) -> Action {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            // Ctrl+C always quits regardless of mode
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Action::Quit;
            }

            match input_mode {
                InputMode::Normal => map_key_normal(key),
                InputMode::Search => map_key_search(key),
            }
        }
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(w, h) => Action::Resize(*w, *h),
        _ => Action::None,
    }
}

fn map_mouse(mouse: &MouseEvent) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::MoveDown,
        MouseEventKind::ScrollUp => Action::MoveUp,
        MouseEventKind::Down(MouseButton::Left) => Action::ClickAt(mouse.column, mouse.row),
        _ => Action::None,
    }
}

fn map_key_normal(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,
        KeyCode::Char('j') | KeyCode::Down => Action::MoveDown,
        KeyCode::Char('k') | KeyCode::Up => Action::MoveUp,
        KeyCode::Char('J') => Action::ScrollDetailDown,
        KeyCode::Char('K') => Action::ScrollDetailUp,
        KeyCode::Enter => Action::SelectHighlighted,
        KeyCode::Char('g') | KeyCode::Home => Action::GoTop,
        KeyCode::Char('G') | KeyCode::End => Action::GoBottom,
        KeyCode::Char('d') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageDown,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::PageUp,
        KeyCode::PageDown => Action::PageDown,
        KeyCode::PageUp => Action::PageUp,
        KeyCode::Char('/') | KeyCode::Tab => Action::FocusSearch,
        KeyCode::Char('1') => Action::TogglePane(Pane::List),
        KeyCode::Char('2') => Action::TogglePane(Pane::Detail),
        KeyCode::Char('?') => Action::ToggleHelp,
        KeyCode::Esc => Action::FocusList,
        _ => Action::None,
    }
}

fn map_key_search(key: &KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Action::FocusList,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::QueryClear,
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Action::QueryInput(c)
        }
        KeyCode::Backspace => Action::QueryBackspace,
        KeyCode::Down => Action::MoveDown,
        KeyCode::Up => Action::MoveUp,
        _ => Action::None,
    }
}
