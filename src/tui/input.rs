//! Terminal events to widget actions.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::view::hit_test;
use crate::controller::{MAX_LENGTH, MIN_LENGTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    LengthBy(i64),
    LengthTo(usize),
    ToggleDigits,
    ToggleSymbols,
    Copy,
    Reset,
    Regenerate,
    ToggleTheme,
    Pointer(u16, u16),
    PointerLeft,
    Redraw,
    Quit,
}

pub fn map_event(event: &Event) -> Option<Action> {
    match event {
        Event::Key(key) => map_key(key),
        Event::Mouse(mouse) => map_mouse(mouse),
        Event::Resize(_, _) => Some(Action::Redraw),
        Event::FocusLost => Some(Action::PointerLeft),
        _ => None,
    }
}

fn map_key(key: &KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    let action = match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Esc | KeyCode::Char('q') => Action::Quit,
        KeyCode::Left | KeyCode::Down | KeyCode::Char('-') => Action::LengthBy(-1),
        KeyCode::Right | KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('=') => {
            Action::LengthBy(1)
        }
        KeyCode::PageDown => Action::LengthBy(-5),
        KeyCode::PageUp => Action::LengthBy(5),
        KeyCode::Home => Action::LengthTo(MIN_LENGTH),
        KeyCode::End => Action::LengthTo(MAX_LENGTH),
        KeyCode::Char('d') | KeyCode::Char('n') => Action::ToggleDigits,
        KeyCode::Char('s') => Action::ToggleSymbols,
        KeyCode::Char('c') | KeyCode::Enter => Action::Copy,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('g') | KeyCode::Char(' ') => Action::Regenerate,
        KeyCode::Char('t') => Action::ToggleTheme,
        _ => return None,
    };
    Some(action)
}

fn map_mouse(mouse: &MouseEvent) -> Option<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            hit_test(mouse.column, mouse.row).or(Some(Action::Pointer(mouse.column, mouse.row)))
        }
        MouseEventKind::Drag(MouseButton::Left) => match hit_test(mouse.column, mouse.row) {
            Some(Action::LengthTo(n)) => Some(Action::LengthTo(n)),
            _ => Some(Action::Pointer(mouse.column, mouse.row)),
        },
        MouseEventKind::Moved => Some(Action::Pointer(mouse.column, mouse.row)),
        _ => None,
    }
}
