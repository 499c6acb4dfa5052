use std::rc::Rc;

use crate::assets::AssetManager;
use crate::audio::{self, AudioOutput, SoundEffect, Sounds};
use crate::config::{Config, PhysicsConfig};
use crate::ui::{BrailleCanvas, Rgb, Viewport};

use super::bird::Bird;
use super::flash::Flash;
use super::hud::Hud;
use super::input::InputAction;
use super::land::Land;
use super::pipe::{Pipe, PipeTextures};
use super::sprite::Sprite;

// Texture names and the files they load from
pub const GAME_BACKGROUND: (&str, &str) = ("Game Background", "background.txt");
pub const PIPE_UP: (&str, &str) = ("Pipe Up", "pipe_up.txt");
pub const PIPE_DOWN: (&str, &str) = ("Pipe Down", "pipe_down.txt");
pub const LAND: (&str, &str) = ("Land", "land.txt");
pub const SCORING_PIPE: (&str, &str) = ("Scoring Pipe", "scoring_pipe.txt");
pub const BIRD_FRAMES: [(&str, &str); 4] = [
    ("Bird Frame 1", "bird_1.txt"),
    ("Bird Frame 2", "bird_2.txt"),
    ("Bird Frame 3", "bird_3.txt"),
    ("Bird Frame 4", "bird_4.txt"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Ready,
    Playing,
    GameOver,
}

/// The in-play game: phase, score and the objects on the field
pub struct GameState {
    pub phase: Phase,
    pub score: u32,
    pub clock: f32, // Seconds since the last pipe spawn or phase change
    pub background: Sprite,
    pub bird: Bird,
    pub pipe: Pipe,
    pub land: Land,
    pub hud: Hud,
    pub flash: Flash,
    pub sounds: Sounds,
    pub sky_color: Rgb,
    pub tuning: PhysicsConfig,
}

/// Load every texture and sound the game needs (cached, so calling this
/// ahead of `GameState::init` just moves the disk work earlier)
pub fn preload_assets(assets: &mut AssetManager) {
    for (name, file) in [GAME_BACKGROUND, PIPE_UP, PIPE_DOWN, LAND, SCORING_PIPE]
        .into_iter()
        .chain(BIRD_FRAMES)
    {
        assets.load_texture(name, file);
    }
    audio::load_sounds(assets);
}

impl GameState {
    pub fn init(assets: &mut AssetManager, config: &Config, output: Rc<dyn AudioOutput>) -> Self {
        preload_assets(assets);

        let physics = &config.physics;
        let display = &config.display;

        // Background art is stretched to the field width
        let background_texture = assets.texture(GAME_BACKGROUND.0);
        let mut background = Sprite::new(
            background_texture.clone(),
            Rgb::from_array(display.skyline_color),
        );
        let background_width = background_texture.size().0;
        if background_width > 0.0 {
            background.set_scale(physics.field_width / background_width);
        }

        let land = Land::new(assets.texture(LAND.0), Rgb::from_array(display.land_color), physics);

        let pipe = Pipe::new(
            PipeTextures {
                up: assets.texture(PIPE_UP.0),
                down: assets.texture(PIPE_DOWN.0),
                scoring: assets.texture(SCORING_PIPE.0),
            },
            Rgb::from_array(display.pipe_color),
            land.height(),
            physics,
        );

        let frames = BIRD_FRAMES.iter().map(|(name, _)| assets.texture(name)).collect();
        let bird = Bird::new(frames, Rgb::from_array(display.bird_color), physics);

        let mut hud = Hud::new(Rgb::from_array(display.score_color));
        hud.update_score(0);

        tracing::debug!("game state initialized");

        Self {
            phase: Phase::Ready,
            score: 0,
            clock: 0.0,
            background,
            bird,
            pipe,
            land,
            hud,
            flash: Flash::new(physics.flash_speed),
            sounds: Sounds::new(assets, output),
            sky_color: Rgb::from_array(display.sky_color),
            tuning: physics.clone(),
        }
    }

    /// React to one drained input action
    pub fn handle_input(&mut self, action: InputAction) {
        if action != InputAction::Flap || self.phase == Phase::GameOver {
            return;
        }

        if self.phase == Phase::Ready {
            tracing::info!("game started");
            self.phase = Phase::Playing;
        }

        self.bird.tap();
        self.sounds.play(SoundEffect::Wing);
    }

    /// Draw the field back to front
    pub fn draw(&self, canvas: &mut BrailleCanvas, view: &Viewport) {
        canvas.fill_background(self.sky_color);
        self.background.draw(canvas, view);

        self.pipe.draw(canvas, view);
        self.land.draw(canvas, view);
        self.bird.draw(canvas, view);

        self.flash.draw(canvas);

        self.hud.draw(canvas);
    }
}
