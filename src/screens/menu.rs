use ratatui::{backend::Backend, Terminal};

use crate::config::Config;
use crate::menu::{handle_menu_input, render_menu, AppState, MenuAction, MenuState};

/// Show the title screen until an item is picked
pub fn run_menu<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    best_score: u32,
) -> anyhow::Result<AppState> {
    let mut menu_state = MenuState::new(best_score);

    loop {
        terminal.draw(|f| render_menu(f, &menu_state, &config.keybindings))?;

        if let MenuAction::Goto(next) = handle_menu_input(&mut menu_state, &config.keybindings)? {
            return Ok(next);
        }
    }
}
