use std::rc::Rc;

use rand::Rng;

use crate::assets::Texture;
use crate::config::PhysicsConfig;
use crate::ui::{BrailleCanvas, Rgb, Viewport};

use super::sprite::Sprite;

/// Textures a pipe group is built from
pub struct PipeTextures {
    pub up: Rc<Texture>,      // Bottom pipe, cap on top
    pub down: Rc<Texture>,    // Top pipe, cap underneath
    pub scoring: Rc<Texture>, // Invisible trigger strip
}

/// Scrolling pipe pairs plus the scoring strips between them
pub struct Pipe {
    pipe_sprites: Vec<Sprite>,
    scoring_sprites: Vec<Sprite>,
    textures: PipeTextures,
    color: Rgb,
    field_width: f32,
    field_height: f32,
    land_height: f32,
    spawn_y_offset: f32,
    speed: f32,
}

impl Pipe {
    pub fn new(textures: PipeTextures, color: Rgb, land_height: f32, physics: &PhysicsConfig) -> Self {
        Self {
            pipe_sprites: Vec::new(),
            scoring_sprites: Vec::new(),
            textures,
            color,
            field_width: physics.field_width,
            field_height: physics.field_height,
            land_height,
            spawn_y_offset: 0.0,
            speed: physics.pipe_movement_speed,
        }
    }

    /// Bottom pipe, just off the right edge, lifted by the current offset
    pub fn spawn_bottom_pipe(&mut self) {
        let height = self.textures.up.size().1;
        let sprite = Sprite::new(self.textures.up.clone(), self.color).with_position(
            self.field_width,
            self.field_height - height - self.spawn_y_offset,
        );
        self.pipe_sprites.push(sprite);
    }

    /// Top pipe, hanging from above the field by the current offset
    pub fn spawn_top_pipe(&mut self) {
        let sprite = Sprite::new(self.textures.down.clone(), self.color)
            .with_position(self.field_width, -self.spawn_y_offset);
        self.pipe_sprites.push(sprite);
    }

    pub fn spawn_scoring_pipe(&mut self) {
        let mut sprite = Sprite::new(self.textures.scoring.clone(), self.color)
            .with_position(self.field_width, 0.0);
        sprite.visible = false;
        self.scoring_sprites.push(sprite);
    }

    /// Pick a new vertical offset in whole units from 0 to the land height
    pub fn randomise_offset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let max = self.land_height.max(0.0) as u32;
        self.spawn_y_offset = rng.gen_range(0..=max) as f32;
    }

    /// Scroll everything left and drop sprites that are fully off screen
    pub fn move_pipes(&mut self, dt: f32) {
        let distance = self.speed * dt;

        for sprite in self.pipe_sprites.iter_mut().chain(self.scoring_sprites.iter_mut()) {
            sprite.move_by(-distance, 0.0);
        }

        let on_screen = |sprite: &Sprite| sprite.x >= -sprite.global_bounds().width;
        self.pipe_sprites.retain(on_screen);
        self.scoring_sprites.retain(on_screen);
    }

    /// Remove every scoring sprite matching `scored`, returning how many went
    pub fn remove_scoring<F>(&mut self, mut scored: F) -> u32
    where
        F: FnMut(&Sprite) -> bool,
    {
        let before = self.scoring_sprites.len();
        self.scoring_sprites.retain(|sprite| !scored(sprite));
        (before - self.scoring_sprites.len()) as u32
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.pipe_sprites
    }

    #[cfg(test)]
    pub fn scoring_sprites(&self) -> &[Sprite] {
        &self.scoring_sprites
    }

    pub fn spawn_y_offset(&self) -> f32 {
        self.spawn_y_offset
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas, view: &Viewport) {
        for sprite in &self.pipe_sprites {
            sprite.draw(canvas, view);
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn pipe() -> Pipe {
        let textures = PipeTextures {
            up: Rc::new(Texture::filled(26, 76, 4.0)),
            down: Rc::new(Texture::filled(26, 76, 4.0)),
            scoring: Rc::new(Texture::filled(1, 192, 4.0)),
        };
        Pipe::new(textures, Rgb::WHITE, 112.0, &PhysicsConfig::default())
    }

    #[test]
    fn test_spawn_positions_follow_offset() {
        let mut pipe = pipe();
        pipe.spawn_y_offset = 40.0;
        pipe.spawn_bottom_pipe();
        pipe.spawn_top_pipe();
        pipe.spawn_scoring_pipe();

        let bottom = &pipe.sprites()[0];
        let top = &pipe.sprites()[1];
        assert_eq!((bottom.x, bottom.y), (1024.0, 768.0 - 304.0 - 40.0));
        assert_eq!((top.x, top.y), (1024.0, -40.0));

        // The gap between the pair does not depend on the offset
        let gap = bottom.global_bounds().top - top.global_bounds().bottom();
        assert_eq!(gap, 768.0 - 2.0 * 304.0);

        let scoring = &pipe.scoring_sprites()[0];
        assert_eq!((scoring.x, scoring.y), (1024.0, 0.0));
        assert!(!scoring.visible);
    }

    #[test]
    fn test_offset_stays_within_land_height() {
        let mut pipe = pipe();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            pipe.randomise_offset(&mut rng);
            let offset = pipe.spawn_y_offset();
            assert!((0.0..=112.0).contains(&offset));
            assert_eq!(offset.fract(), 0.0);
        }
    }

    #[test]
    fn test_pipes_scroll_and_leave() {
        let mut pipe = pipe();
        pipe.spawn_bottom_pipe();
        pipe.spawn_scoring_pipe();

        pipe.move_pipes(1.0);
        assert_eq!(pipe.sprites()[0].x, 824.0);
        assert_eq!(pipe.scoring_sprites()[0].x, 824.0);

        // The 104 unit wide pipe is gone once it passes x = -104
        pipe.move_pipes(5.0);
        assert_eq!(pipe.sprites().len(), 0);
        assert_eq!(pipe.scoring_sprites().len(), 0);
    }

    #[test]
    fn test_remove_scoring_counts_removed() {
        let mut pipe = pipe();
        pipe.spawn_scoring_pipe();
        pipe.move_pipes(1.0);
        pipe.spawn_scoring_pipe();

        let removed = pipe.remove_scoring(|sprite| sprite.x < 1000.0);
        assert_eq!(removed, 1);
        assert_eq!(pipe.scoring_sprites().len(), 1);
        assert_eq!(pipe.scoring_sprites()[0].x, 1024.0);
    }
}
