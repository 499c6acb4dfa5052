use super::sprite::Sprite;

/// Axis-aligned rectangle in virtual coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// True when the overlap has positive area; touching edges don't count
    pub fn intersects(&self, other: &Bounds) -> bool {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        left < right && top < bottom
    }
}

/// Check two sprites for overlap, each with its scale multiplied by the
/// given factor (a factor below 1.0 shrinks the hitbox around the origin)
pub fn check_sprite_collision(a: &Sprite, scale_a: f32, b: &Sprite, scale_b: f32) -> bool {
    a.bounds_with_scale(scale_a)
        .intersects(&b.bounds_with_scale(scale_b))
}
