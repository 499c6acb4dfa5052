use crate::ui::{BrailleCanvas, Rgb};

/// Score display at the top center of the field
pub struct Hud {
    score: u32,
    color: Rgb,
}

impl Hud {
    pub fn new(color: Rgb) -> Self {
        Self { score: 0, color }
    }

    pub fn update_score(&mut self, score: u32) {
        self.score = score;
    }

    #[cfg(test)]
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn draw(&self, canvas: &mut BrailleCanvas) {
        // Digits grow with the terminal, one glyph pixel per 32 rows of dots
        let scale = (canvas.pixel_height() / 32).max(1);
        let y = canvas.pixel_height() / 16;
        canvas.draw_number(self.score, canvas.pixel_width() / 2, y, scale, self.color);
    }
}
