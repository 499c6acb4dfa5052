use crossterm::event::{self, Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputAction {
    Flap,
    Menu,
    Quit,
}

/// Turn a key name from the config file into a key code.
/// Names are case-insensitive; single characters map to themselves.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.trim().to_lowercase();
    let code = match lower.as_str() {
        "space" => KeyCode::Char(' '),
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        _ => {
            if let Some(n) = lower.strip_prefix('f').and_then(|n| n.parse::<u8>().ok()) {
                return (1..=12).contains(&n).then_some(KeyCode::F(n));
            }
            let mut chars = lower.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

/// Whether a pressed key is the one bound under `binding`
pub fn key_matches(binding: &str, code: KeyCode) -> bool {
    let pressed = match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    };
    parse_key(binding) == Some(pressed)
}

/// Key names for on-screen hints, e.g. "Space / Up". Blank and repeated
/// bindings are skipped.
pub fn key_list(bindings: &[&str]) -> String {
    let mut names: Vec<&str> = Vec::new();
    for name in bindings.iter().map(|name| name.trim()) {
        if !name.is_empty() && !names.iter().any(|seen| seen.eq_ignore_ascii_case(name)) {
            names.push(name);
        }
    }
    names.join(" / ")
}

/// Whether an event is a left mouse button press
pub fn is_left_click(event: &Event) -> bool {
    matches!(
        event,
        Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left)
    )
}

/// Map one terminal event to an in-game action
pub fn map_event(event: &Event, bindings: &KeyBindings) -> Option<InputAction> {
    if is_left_click(event) {
        return Some(InputAction::Flap);
    }

    let Event::Key(key) = event else {
        return None;
    };
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key_matches(&bindings.flap, key.code) || key_matches(&bindings.flap_alt, key.code) {
        Some(InputAction::Flap)
    } else if key_matches(&bindings.menu_back, key.code) {
        Some(InputAction::Menu)
    } else if key_matches(&bindings.quit, key.code) {
        Some(InputAction::Quit)
    } else {
        None
    }
}

/// Drain every pending terminal event into actions without blocking
pub fn poll_input(bindings: &KeyBindings) -> io::Result<Vec<InputAction>> {
    let mut actions = Vec::new();

    while event::poll(Duration::ZERO)? {
        let event = event::read()?;
        if let Some(action) = map_event(&event, bindings) {
            actions.push(action);
        }
    }

    Ok(actions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers, MouseEvent};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column: 10,
            row: 5,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!(parse_key("Space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("ESC"), Some(KeyCode::Esc));
        assert_eq!(parse_key("Q"), Some(KeyCode::Char('q')));
        assert_eq!(parse_key("f5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key("F13"), None);
        assert_eq!(parse_key("nonsense"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_key_matches_ignores_case() {
        assert!(key_matches("Q", KeyCode::Char('Q')));
        assert!(key_matches("q", KeyCode::Char('q')));
        assert!(!key_matches("Q", KeyCode::Char('w')));
    }

    #[test]
    fn test_key_list_skips_blanks_and_repeats() {
        assert_eq!(key_list(&["Space", "Up"]), "Space / Up");
        assert_eq!(key_list(&["R", " ", "r", "Enter"]), "R / Enter");
        assert_eq!(key_list(&[]), "");
    }

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::default();
        assert_eq!(map_event(&press(KeyCode::Char(' ')), &bindings), Some(InputAction::Flap));
        assert_eq!(map_event(&press(KeyCode::Up), &bindings), Some(InputAction::Flap));
        assert_eq!(map_event(&press(KeyCode::Esc), &bindings), Some(InputAction::Menu));
        assert_eq!(map_event(&press(KeyCode::Char('q')), &bindings), Some(InputAction::Quit));
        assert_eq!(map_event(&press(KeyCode::Char('x')), &bindings), None);
    }

    #[test]
    fn test_left_click_flaps() {
        let bindings = KeyBindings::default();
        assert_eq!(
            map_event(&mouse(MouseEventKind::Down(MouseButton::Left)), &bindings),
            Some(InputAction::Flap)
        );
        assert_eq!(map_event(&mouse(MouseEventKind::Down(MouseButton::Right)), &bindings), None);
        assert_eq!(map_event(&mouse(MouseEventKind::Moved), &bindings), None);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(map_event(&Event::Key(key), &KeyBindings::default()), None);
    }

    #[test]
    fn test_rebound_flap_key() {
        let bindings = KeyBindings {
            flap: "W".to_string(),
            ..KeyBindings::default()
        };
        assert_eq!(map_event(&press(KeyCode::Char('W')), &bindings), Some(InputAction::Flap));
        assert_eq!(map_event(&press(KeyCode::Char(' ')), &bindings), None);
    }
}
