use std::rc::Rc;
use std::time::Instant;

use ratatui::{backend::Backend, Terminal};

use crate::assets::AssetManager;
use crate::audio::AudioOutput;
use crate::config::{Config, KeyBindings};
use crate::game::input::key_list;
use crate::game::{self, poll_input, GameState, InputAction, Phase};
use crate::menu::AppState;
use crate::ui::{self, OverlayMessage};

use super::common::{frame_duration, limit_frame_rate};

fn ready_message(bindings: &KeyBindings) -> OverlayMessage {
    OverlayMessage::info(vec![
        format!("{} / click: Flap", key_list(&[bindings.flap.as_str(), bindings.flap_alt.as_str()])),
        String::new(),
        format!("{}: Menu  {}: Quit", bindings.menu_back, bindings.quit),
    ])
    .with_title("GET READY")
}

/// Run one round, returning the next screen and the round as it ended
pub fn run_game<B: Backend>(
    terminal: &mut Terminal<B>,
    config: &Config,
    assets: &mut AssetManager,
    audio: Rc<dyn AudioOutput>,
) -> anyhow::Result<(AppState, GameState)> {
    let mut state = GameState::init(assets, config, audio);
    let mut rng = rand::thread_rng();

    // Fixed timestep: one simulation step per frame
    let frame_duration = frame_duration(config.display.target_fps);
    let dt = frame_duration.as_secs_f32();
    let ready = ready_message(&config.keybindings);

    tracing::info!(fps = config.display.target_fps, "round started");

    loop {
        let frame_start = Instant::now();

        for action in poll_input(&config.keybindings)? {
            match action {
                InputAction::Quit => return Ok((AppState::Exiting, state)),
                InputAction::Menu => return Ok((AppState::Menu, state)),
                InputAction::Flap => state.handle_input(action),
            }
        }

        let events = game::update(&mut state, dt, &mut rng);
        if events.show_game_over {
            tracing::info!(score = state.score, "round over");
            return Ok((AppState::GameOver { score: state.score }, state));
        }

        let overlay = (state.phase == Phase::Ready).then_some(&ready);
        terminal.draw(|f| ui::render_game(f, &state, overlay))?;

        limit_frame_rate(frame_start, frame_duration);
    }
}
