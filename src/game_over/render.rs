// Score card rendering

use ratatui::Frame;

use crate::config::KeyBindings;
use crate::game::input::key_list;
use crate::game::GameState;
use crate::ui::{render_game, render_overlay, OverlayMessage};

use super::state::GameOverState;

/// Text shown in the score card
pub fn score_card(state: &GameOverState, bindings: &KeyBindings) -> OverlayMessage {
    let mut lines = vec![
        format!("Score: {}", state.score),
        format!("Best: {}", state.best),
        format!("Medal: {}", state.medal.display_text()),
    ];
    if state.new_best {
        lines.push("NEW BEST!".to_string());
    }
    lines.push(String::new());
    lines.push(controls_line(bindings));

    let message = if state.new_best {
        OverlayMessage::success(lines)
    } else {
        OverlayMessage::info(lines)
    };
    message.with_title("GAME OVER")
}

fn controls_line(bindings: &KeyBindings) -> String {
    let retry = key_list(&[
        bindings.retry.as_str(),
        bindings.menu_select.as_str(),
        bindings.flap.as_str(),
    ]);
    let menu = key_list(&[bindings.menu.as_str(), bindings.menu_back.as_str()]);
    format!("{} / click: Retry  {}: Menu  {}: Quit", retry, menu, bindings.quit)
}

/// Draw the frozen field of the finished round with the score card over it
pub fn render_game_over(
    frame: &mut Frame,
    state: &GameOverState,
    bindings: &KeyBindings,
    round: Option<&GameState>,
) {
    let card = score_card(state, bindings);
    match round {
        Some(game) => render_game(frame, game, Some(&card)),
        None => {
            let area = frame.area();
            render_overlay(frame, &card, area);
        }
    }
}
