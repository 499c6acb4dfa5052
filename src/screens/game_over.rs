use std::path::Path;
use std::time::Instant;

use ratatui::{backend::Backend, Terminal};

use crate::config::Config;
use crate::game::GameState;
use crate::game_over::input::accepts_input;
use crate::game_over::{handle_game_over_input, load_highscore, record_score, render_game_over, GameOverState};
use crate::menu::AppState;

/// Record the score, then show the score card until the player moves on
pub fn run_game_over<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    score: u32,
    round: Option<&GameState>,
    highscore_path: &Path,
) -> anyhow::Result<AppState> {
    // Failing to save the best score should not end the session
    let (best, new_best) = record_score(highscore_path, score).unwrap_or_else(|e| {
        tracing::warn!(path = %highscore_path.display(), error = %e, "could not save high score");
        let stored = load_highscore(highscore_path).best;
        (stored.max(score), score > stored)
    });

    let state = GameOverState::new(score, best, new_best);
    let shown_at = Instant::now();

    loop {
        terminal.draw(|f| render_game_over(f, &state, &config.keybindings, round))?;

        if let Some(next) = handle_game_over_input(&config.keybindings, accepts_input(shown_at.elapsed()))? {
            return Ok(next);
        }
    }
}
