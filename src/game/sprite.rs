use std::rc::Rc;

use crate::assets::Texture;
use crate::ui::{BrailleCanvas, Rgb, Viewport};

use super::collision::Bounds;

/// A textured, positioned, optionally rotated quad in virtual coordinates.
///
/// `x`/`y` place the sprite's origin. The origin is given in local
/// (unscaled) virtual units from the texture's top-left corner; scale and
/// rotation are applied around it.
#[derive(Debug, Clone)]
pub struct Sprite {
    texture: Rc<Texture>,
    pub x: f32,
    pub y: f32,
    origin: (f32, f32),
    scale: f32,
    rotation: f32, // Degrees, clockwise on screen
    pub visible: bool,
    pub color: Rgb,
}

impl Sprite {
    pub fn new(texture: Rc<Texture>, color: Rgb) -> Self {
        Self {
            texture,
            x: 0.0,
            y: 0.0,
            origin: (0.0, 0.0),
            scale: 1.0,
            rotation: 0.0,
            visible: true,
            color,
        }
    }

    pub fn with_position(mut self, x: f32, y: f32) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn set_texture(&mut self, texture: Rc<Texture>) {
        self.texture = texture;
    }

    /// Unscaled, unrotated size in virtual units
    pub fn local_size(&self) -> (f32, f32) {
        self.texture.size()
    }

    pub fn center_origin(&mut self) {
        let (w, h) = self.local_size();
        self.origin = (w / 2.0, h / 2.0);
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.rotation = degrees;
    }

    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.x += dx;
        self.y += dy;
    }

    /// Axis-aligned bounds in virtual coordinates
    pub fn global_bounds(&self) -> Bounds {
        self.bounds_with_scale(1.0)
    }

    /// Axis-aligned bounds with the sprite's scale multiplied by `factor`
    pub fn bounds_with_scale(&self, factor: f32) -> Bounds {
        let (w, h) = self.local_size();
        let scale = self.scale * factor;
        let corners = [(0.0, 0.0), (w, 0.0), (0.0, h), (w, h)];

        let mut left = f32::INFINITY;
        let mut top = f32::INFINITY;
        let mut right = f32::NEG_INFINITY;
        let mut bottom = f32::NEG_INFINITY;
        for (lx, ly) in corners {
            let (x, y) = self.local_to_world(lx, ly, scale);
            left = left.min(x);
            top = top.min(y);
            right = right.max(x);
            bottom = bottom.max(y);
        }

        Bounds::new(left, top, right - left, bottom - top)
    }

    fn local_to_world(&self, lx: f32, ly: f32, scale: f32) -> (f32, f32) {
        let dx = (lx - self.origin.0) * scale;
        let dy = (ly - self.origin.1) * scale;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        (self.x + dx * cos - dy * sin, self.y + dx * sin + dy * cos)
    }

    /// Texel under a world point, if the point lies on the texture
    pub fn texel_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        if self.scale <= 0.0 {
            return None;
        }

        let dx = x - self.x;
        let dy = y - self.y;
        let (sin, cos) = self.rotation.to_radians().sin_cos();
        let lx = (dx * cos + dy * sin) / self.scale + self.origin.0;
        let ly = (-dx * sin + dy * cos) / self.scale + self.origin.1;

        let (w, h) = self.local_size();
        if lx < 0.0 || ly < 0.0 || lx >= w || ly >= h {
            return None;
        }

        let texel_size = self.texture.texel_size();
        Some(((lx / texel_size) as usize, (ly / texel_size) as usize))
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas, view: &Viewport) {
        if !self.visible || self.texture.is_empty() {
            return;
        }

        let bounds = self.global_bounds();
        let (left, top) = view.to_pixel(bounds.left, bounds.top);
        let (right, bottom) = view.to_pixel(bounds.right(), bounds.bottom());

        let x0 = left.floor().max(0.0) as usize;
        let y0 = top.floor().max(0.0) as usize;
        let x1 = right.ceil().clamp(0.0, canvas.pixel_width() as f32) as usize;
        let y1 = bottom.ceil().clamp(0.0, canvas.pixel_height() as f32) as usize;

        // Sample at pixel centers through the inverse transform
        for py in y0..y1 {
            for px in x0..x1 {
                let (vx, vy) = view.to_virtual(px as f32 + 0.5, py as f32 + 0.5);
                if let Some((tx, ty)) = self.texel_at(vx, vy) {
                    if self.texture.is_opaque(tx, ty) {
                        canvas.set_pixel(px, py, self.color);
                    }
                }
            }
        }
    }
}
