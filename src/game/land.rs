use std::rc::Rc;

use crate::assets::Texture;
use crate::config::PhysicsConfig;
use crate::ui::{BrailleCanvas, Rgb, Viewport};

use super::sprite::Sprite;

/// Ground strip tiled across the bottom of the field, scrolling with the pipes
pub struct Land {
    sprites: Vec<Sprite>,
    tile_width: f32,
    height: f32,
    speed: f32,
}

impl Land {
    pub fn new(texture: Rc<Texture>, color: Rgb, physics: &PhysicsConfig) -> Self {
        let (tile_width, height) = texture.size();

        // Enough tiles to cover the field plus one scrolling in from the right
        let count = if tile_width > 0.0 {
            (physics.field_width / tile_width).ceil() as usize + 1
        } else {
            1
        };

        let sprites = (0..count)
            .map(|i| {
                Sprite::new(texture.clone(), color)
                    .with_position(i as f32 * tile_width, physics.field_height - height)
            })
            .collect();

        Self {
            sprites,
            tile_width,
            height,
            speed: physics.pipe_movement_speed,
        }
    }

    pub fn move_land(&mut self, dt: f32) {
        let distance = self.speed * dt;
        for sprite in &mut self.sprites {
            sprite.move_by(-distance, 0.0);
        }

        if self.tile_width <= 0.0 {
            return;
        }

        // Tiles that scrolled off the left re-enter behind the rightmost one
        for i in 0..self.sprites.len() {
            if self.sprites[i].x < -self.tile_width {
                let rightmost = self
                    .sprites
                    .iter()
                    .map(|sprite| sprite.x)
                    .fold(f32::NEG_INFINITY, f32::max);
                self.sprites[i].x = rightmost + self.tile_width;
            }
        }
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas, view: &Viewport) {
        for sprite in &self.sprites {
            sprite.draw(canvas, view);
        }
    }
}
