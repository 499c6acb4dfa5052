// Menu input handling

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::io;
use std::time::Duration;

use crate::config::KeyBindings;
use crate::game::input::key_matches;

use super::state::{AppState, MenuState};

/// Menu action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Stay in the menu
    None,
    /// Leave the menu for another screen
    Goto(AppState),
}

/// Wait briefly for a key and apply it to the menu
pub fn handle_menu_input(menu_state: &mut MenuState, bindings: &KeyBindings) -> io::Result<MenuAction> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                return Ok(handle_key_press(menu_state, bindings, key.code));
            }
        }
    }

    Ok(MenuAction::None)
}

pub fn handle_key_press(menu_state: &mut MenuState, bindings: &KeyBindings, code: KeyCode) -> MenuAction {
    if key_matches(&bindings.menu_up, code) || code == KeyCode::Char('k') {
        menu_state.select_previous();
        MenuAction::None
    } else if key_matches(&bindings.menu_down, code) || code == KeyCode::Char('j') {
        menu_state.select_next();
        MenuAction::None
    } else if key_matches(&bindings.menu_select, code) || code == KeyCode::Char(' ') {
        MenuAction::Goto(menu_state.selected_item().target())
    } else if key_matches(&bindings.quit, code) || key_matches(&bindings.menu_back, code) {
        MenuAction::Goto(AppState::Exiting)
    } else {
        MenuAction::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_and_select() {
        let bindings = KeyBindings::default();
        let mut menu = MenuState::new(0);

        assert_eq!(
            handle_key_press(&mut menu, &bindings, KeyCode::Enter),
            MenuAction::Goto(AppState::Playing)
        );

        assert_eq!(handle_key_press(&mut menu, &bindings, KeyCode::Down), MenuAction::None);
        assert_eq!(
            handle_key_press(&mut menu, &bindings, KeyCode::Char(' ')),
            MenuAction::Goto(AppState::Exiting)
        );
    }

    #[test]
    fn test_quit_keys_exit() {
        let bindings = KeyBindings::default();
        let mut menu = MenuState::new(0);

        for code in [KeyCode::Char('q'), KeyCode::Char('Q'), KeyCode::Esc] {
            assert_eq!(
                handle_key_press(&mut menu, &bindings, code),
                MenuAction::Goto(AppState::Exiting)
            );
        }
        assert_eq!(handle_key_press(&mut menu, &bindings, KeyCode::Char('x')), MenuAction::None);
    }
}
