// Mapping between the virtual field and Braille pixels
// Physics runs in fixed virtual units; every terminal size sees the whole field

use super::braille::BrailleCanvas;

#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scale_x: f32, // Braille pixels per virtual unit
    scale_y: f32,
}

impl Viewport {
    pub fn new(canvas: &BrailleCanvas, field_width: f32, field_height: f32) -> Self {
        Self {
            scale_x: canvas.pixel_width() as f32 / field_width,
            scale_y: canvas.pixel_height() as f32 / field_height,
        }
    }

    pub fn to_pixel(&self, x: f32, y: f32) -> (f32, f32) {
        (x * self.scale_x, y * self.scale_y)
    }

    pub fn to_virtual(&self, pixel_x: f32, pixel_y: f32) -> (f32, f32) {
        (pixel_x / self.scale_x, pixel_y / self.scale_y)
    }
}
