// Game over screen input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;
use crate::game::input::{is_left_click, key_matches};
use crate::menu::AppState;

/// How long the card ignores input after it appears, so flaps aimed at
/// the finished round do not retry straight away
pub const INPUT_GRACE: Duration = Duration::from_millis(400);

pub fn accepts_input(shown_for: Duration) -> bool {
    shown_for >= INPUT_GRACE
}

/// Wait briefly for input; `Some` carries the screen to switch to.
/// Events read while `accepting` is false are dropped.
pub fn handle_game_over_input(bindings: &KeyBindings, accepting: bool) -> io::Result<Option<AppState>> {
    if event::poll(Duration::from_millis(100))? {
        let event = event::read()?;
        if !accepting {
            return Ok(None);
        }
        if is_left_click(&event) {
            return Ok(Some(AppState::Playing));
        }
        if let Event::Key(key) = event {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(bindings, key.code));
            }
        }
    }

    Ok(None)
}

pub fn handle_key_press(bindings: &KeyBindings, code: KeyCode) -> Option<AppState> {
    if key_matches(&bindings.retry, code)
        || key_matches(&bindings.menu_select, code)
        || key_matches(&bindings.flap, code)
    {
        Some(AppState::Playing)
    } else if key_matches(&bindings.menu, code) || key_matches(&bindings.menu_back, code) {
        Some(AppState::Menu)
    } else if key_matches(&bindings.quit, code) {
        Some(AppState::Exiting)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(handle_key_press(&bindings, KeyCode::Char('r')), Some(AppState::Playing));
        assert_eq!(handle_key_press(&bindings, KeyCode::Enter), Some(AppState::Playing));
        assert_eq!(handle_key_press(&bindings, KeyCode::Char(' ')), Some(AppState::Playing));
        assert_eq!(handle_key_press(&bindings, KeyCode::Char('M')), Some(AppState::Menu));
        assert_eq!(handle_key_press(&bindings, KeyCode::Esc), Some(AppState::Menu));
        assert_eq!(handle_key_press(&bindings, KeyCode::Char('q')), Some(AppState::Exiting));
        assert_eq!(handle_key_press(&bindings, KeyCode::Up), None);
    }

    #[test]
    fn test_card_ignores_input_at_first() {
        assert!(!accepts_input(Duration::ZERO));
        assert!(!accepts_input(Duration::from_millis(399)));
        assert!(accepts_input(INPUT_GRACE));
        assert!(accepts_input(Duration::from_secs(2)));
    }
}
