use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::Result;
use crate::snake::Direction;
use crate::state::Screen;

/// What the player wants, independent of the key that was pressed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    ConfirmSelect,
    NavigatePrev,
    NavigateNext,
}

impl Intent {
    pub fn direction(self) -> Option<Direction> {
        match self {
            Intent::MoveUp => Some(Direction::Up),
            Intent::MoveDown => Some(Direction::Down),
            Intent::MoveLeft => Some(Direction::Left),
            Intent::MoveRight => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Where the host loop gets its raw events from.
pub trait EventSource {
    /// Waits up to `timeout`; `None` means nothing arrived.
    fn next_event(&mut self, timeout: Duration) -> Result<Option<Event>>;
}

/// Translates key presses into intents for the screen being shown.
pub struct InputRouter;

impl InputRouter {
    pub fn route(key: &KeyEvent, screen: Screen) -> Option<Intent> {
        if is_confirm(key.code) {
            return Some(Intent::ConfirmSelect);
        }

        match screen {
            // The menu lists its options vertically.
            Screen::Menu => match key.code {
                KeyCode::Up => Some(Intent::NavigatePrev),
                KeyCode::Down => Some(Intent::NavigateNext),
                _ => None,
            },
            // YES / NO sit side by side.
            Screen::GameOver => match key.code {
                KeyCode::Left => Some(Intent::NavigatePrev),
                KeyCode::Right => Some(Intent::NavigateNext),
                _ => None,
            },
            Screen::Playing => match key.code {
                KeyCode::Char('w') | KeyCode::Up => Some(Intent::MoveUp),
                KeyCode::Char('a') | KeyCode::Left => Some(Intent::MoveLeft),
                KeyCode::Char('s') | KeyCode::Down => Some(Intent::MoveDown),
                KeyCode::Char('d') | KeyCode::Right => Some(Intent::MoveRight),
                _ => None,
            },
        }
    }
}

fn is_confirm(code: KeyCode) -> bool {
    matches!(code, KeyCode::Char(' ') | KeyCode::Enter)
}

/// Ctrl+C stands in for closing the window.
pub fn is_ctrl_c(ev: &KeyEvent) -> bool {
    matches!(ev, KeyEvent { code: KeyCode::Char('c'), modifiers: KeyModifiers::CONTROL })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn menu_uses_vertical_navigation() {
        assert_eq!(InputRouter::route(&key(KeyCode::Up), Screen::Menu), Some(Intent::NavigatePrev));
        assert_eq!(InputRouter::route(&key(KeyCode::Down), Screen::Menu), Some(Intent::NavigateNext));
        assert_eq!(InputRouter::route(&key(KeyCode::Left), Screen::Menu), None);
    }

    #[test]
    fn restart_prompt_uses_horizontal_navigation() {
        assert_eq!(InputRouter::route(&key(KeyCode::Left), Screen::GameOver), Some(Intent::NavigatePrev));
        assert_eq!(InputRouter::route(&key(KeyCode::Right), Screen::GameOver), Some(Intent::NavigateNext));
        assert_eq!(InputRouter::route(&key(KeyCode::Up), Screen::GameOver), None);
    }

    #[test]
    fn playing_maps_arrows_and_wasd() {
        let cases = [
            (KeyCode::Up, Intent::MoveUp),
            (KeyCode::Char('w'), Intent::MoveUp),
            (KeyCode::Down, Intent::MoveDown),
            (KeyCode::Char('s'), Intent::MoveDown),
            (KeyCode::Left, Intent::MoveLeft),
            (KeyCode::Char('a'), Intent::MoveLeft),
            (KeyCode::Right, Intent::MoveRight),
            (KeyCode::Char('d'), Intent::MoveRight),
        ];

        for (code, intent) in cases.iter() {
            assert_eq!(InputRouter::route(&key(*code), Screen::Playing), Some(*intent));
        }
    }

    #[test]
    fn space_and_enter_confirm_everywhere() {
        for screen in [Screen::Menu, Screen::Playing, Screen::GameOver].iter() {
            assert_eq!(InputRouter::route(&key(KeyCode::Char(' ')), *screen), Some(Intent::ConfirmSelect));
            assert_eq!(InputRouter::route(&key(KeyCode::Enter), *screen), Some(Intent::ConfirmSelect));
        }
    }

    #[test]
    fn unknown_keys_are_dropped() {
        assert_eq!(InputRouter::route(&key(KeyCode::Char('q')), Screen::Playing), None);
        assert_eq!(InputRouter::route(&key(KeyCode::Esc), Screen::Menu), None);
    }

    #[test]
    fn ctrl_c_is_recognised() {
        assert!(is_ctrl_c(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_ctrl_c(&key(KeyCode::Char('c'))));
    }
}
