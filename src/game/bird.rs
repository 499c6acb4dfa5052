use std::rc::Rc;

use crate::assets::Texture;
use crate::config::PhysicsConfig;
use crate::ui::{BrailleCanvas, Rgb, Viewport};

use super::sprite::Sprite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirdState {
    Still,
    Flying,
    Falling,
}

#[derive(Debug, Clone)]
pub struct Bird {
    sprite: Sprite,
    frames: Vec<Rc<Texture>>,
    frame_index: usize,
    animation_timer: f32,
    movement_timer: f32,
    state: BirdState,

    gravity: f32,
    flying_speed: f32,
    flying_duration: f32,
    rotation_speed: f32,
    max_rotation: f32,
    animation_duration: f32,
}

impl Bird {
    /// Place the bird a quarter of the way across, vertically centered
    pub fn new(frames: Vec<Rc<Texture>>, color: Rgb, physics: &PhysicsConfig) -> Self {
        let first = frames
            .first()
            .cloned()
            .unwrap_or_else(|| Rc::new(Texture::empty(physics.texel_size)));

        let mut sprite = Sprite::new(first, color)
            .with_position(physics.field_width / 4.0, physics.field_height / 2.0);
        sprite.center_origin();

        Self {
            sprite,
            frames,
            frame_index: 0,
            animation_timer: 0.0,
            movement_timer: 0.0,
            state: BirdState::Still,
            gravity: physics.gravity,
            flying_speed: physics.flying_speed,
            flying_duration: physics.flying_duration,
            rotation_speed: physics.rotation_speed,
            max_rotation: physics.max_rotation,
            animation_duration: physics.bird_animation_duration,
        }
    }

    /// Flap the wings through the animation frames
    pub fn animate(&mut self, dt: f32) {
        if self.frames.is_empty() {
            return;
        }

        self.animation_timer += dt;
        if self.animation_timer > self.animation_duration / self.frames.len() as f32 {
            self.frame_index = (self.frame_index + 1) % self.frames.len();
            self.sprite.set_texture(self.frames[self.frame_index].clone());
            self.animation_timer = 0.0;
        }
    }

    /// Advance flight: rise while flying, fall under gravity otherwise
    pub fn update(&mut self, dt: f32) {
        match self.state {
            BirdState::Falling => {
                self.sprite.move_by(0.0, self.gravity * dt);
                let rotation = (self.sprite.rotation() + self.rotation_speed * dt).min(self.max_rotation);
                self.sprite.set_rotation(rotation);
            }
            BirdState::Flying => {
                self.sprite.move_by(0.0, -self.flying_speed * dt);
                let rotation = (self.sprite.rotation() - self.rotation_speed * dt).max(-self.max_rotation);
                self.sprite.set_rotation(rotation);
            }
            BirdState::Still => {}
        }

        // No flying out over the top of the pipes
        let half_height = self.sprite.local_size().1 * self.sprite.scale() / 2.0;
        if self.sprite.y < half_height {
            self.sprite.y = half_height;
        }

        self.movement_timer += dt;
        if self.movement_timer > self.flying_duration {
            self.movement_timer = 0.0;
            self.state = BirdState::Falling;
        }
    }

    pub fn tap(&mut self) {
        self.movement_timer = 0.0;
        self.state = BirdState::Flying;
    }

    pub fn state(&self) -> BirdState {
        self.state
    }

    #[cfg(test)]
    pub fn frame_index(&self) -> usize {
        self.frame_index
    }

    pub fn sprite(&self) -> &Sprite {
        &self.sprite
    }

    #[cfg(test)]
    pub fn sprite_mut(&mut self) -> &mut Sprite {
        &mut self.sprite
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas, view: &Viewport) {
        self.sprite.draw(canvas, view);
    }
}
