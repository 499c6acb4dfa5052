// Braille canvas for high-resolution terminal rendering
// Each terminal cell contains a 2×4 grid of Braille dots
// This gives us 2× horizontal and 4× vertical resolution
// Color is tracked per cell: the last color drawn into a cell wins

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    pub fn from_array(rgb: [u8; 3]) -> Self {
        Rgb(rgb[0], rgb[1], rgb[2])
    }

    /// Blend toward `other` by `t` (0.0 = self, 1.0 = other)
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb(mix(self.0, other.0), mix(self.1, other.1), mix(self.2, other.2))
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.0, self.1, self.2)
    }
}

// 3x5 bitmap digits
#[rustfmt::skip]
const DIGITS: [[u8; 15]; 10] = [
    [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1], // 0
    [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1], // 1
    [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1], // 2
    [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1], // 3
    [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1], // 4
    [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1], // 5
    [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1], // 6
    [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0], // 7
    [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1], // 8
    [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1], // 9
];

const DIGIT_WIDTH: usize = 3;
const DIGIT_HEIGHT: usize = 5;

pub struct BrailleCanvas {
    width: usize,  // Width in terminal cells
    height: usize, // Height in terminal cells
    dots: Vec<Vec<u8>>, // 2D array of dot patterns (0-255)
    fg: Vec<Vec<Rgb>>,
    bg: Vec<Vec<Rgb>>,
}

impl BrailleCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            dots: vec![vec![0; width]; height],
            fg: vec![vec![Rgb::WHITE; width]; height],
            bg: vec![vec![Rgb::BLACK; width]; height],
        }
    }

    /// Clear all dots and paint every cell's background
    pub fn fill_background(&mut self, color: Rgb) {
        for row in &mut self.dots {
            row.fill(0);
        }
        for row in &mut self.bg {
            row.fill(color);
        }
    }

    /// Set a dot at pixel coordinates
    /// pixel_x: 0 to (width * 2 - 1)
    /// pixel_y: 0 to (height * 4 - 1)
    pub fn set_pixel(&mut self, pixel_x: usize, pixel_y: usize, color: Rgb) {
        let cell_x = pixel_x / 2;
        let cell_y = pixel_y / 4;

        if cell_x >= self.width || cell_y >= self.height {
            return;
        }

        let dot_x = pixel_x % 2; // 0 or 1 (left or right column)
        let dot_y = pixel_y % 4; // 0, 1, 2, or 3 (row within cell)

        // Braille dot numbering:
        // 1 4
        // 2 5
        // 3 6
        // 7 8
        let dot_index = match (dot_x, dot_y) {
            (0, 0) => 0, // dot 1
            (0, 1) => 1, // dot 2
            (0, 2) => 2, // dot 3
            (0, 3) => 6, // dot 7
            (1, 0) => 3, // dot 4
            (1, 1) => 4, // dot 5
            (1, 2) => 5, // dot 6
            (1, 3) => 7, // dot 8
            _ => unreachable!(),
        };

        self.dots[cell_y][cell_x] |= 1 << dot_index;
        self.fg[cell_y][cell_x] = color;
    }

    /// Fill a rectangle with pixels
    pub fn fill_rect(&mut self, x: usize, y: usize, width: usize, height: usize, color: Rgb) {
        for py in y..(y + height) {
            for px in x..(x + width) {
                self.set_pixel(px, py, color);
            }
        }
    }

    /// Blend every cell toward `color` by `amount` (0.0 - 1.0)
    pub fn tint(&mut self, color: Rgb, amount: f32) {
        for row in self.fg.iter_mut().chain(self.bg.iter_mut()) {
            for cell in row {
                *cell = cell.lerp(color, amount);
            }
        }
    }

    /// Draw one 3×5 digit, each glyph pixel `scale` dots wide
    pub fn draw_digit(&mut self, digit: u8, x: usize, y: usize, scale: usize, color: Rgb) {
        let Some(glyph) = DIGITS.get(digit as usize) else {
            return;
        };

        for row in 0..DIGIT_HEIGHT {
            for col in 0..DIGIT_WIDTH {
                if glyph[row * DIGIT_WIDTH + col] == 1 {
                    self.fill_rect(x + col * scale, y + row * scale, scale, scale, color);
                }
            }
        }
    }

    /// Draw `value` horizontally centered on `center_x`
    pub fn draw_number(&mut self, value: u32, center_x: usize, y: usize, scale: usize, color: Rgb) {
        let text = value.to_string();
        let advance = (DIGIT_WIDTH + 1) * scale;
        let total_width = text.len() * advance - scale;
        let start_x = center_x.saturating_sub(total_width / 2);

        for (i, ch) in text.bytes().enumerate() {
            self.draw_digit(ch - b'0', start_x + i * advance, y, scale, color);
        }
    }

    /// Convert dot pattern to Braille character
    /// Braille Unicode: U+2800 + dot pattern
    pub fn to_char(&self, cell_x: usize, cell_y: usize) -> char {
        if cell_x >= self.width || cell_y >= self.height {
            return ' ';
        }

        match self.dots[cell_y][cell_x] {
            0 => ' ',
            pattern => char::from_u32(0x2800 + pattern as u32).unwrap_or(' '),
        }
    }

    /// Foreground and background color of a cell
    pub fn cell_colors(&self, cell_x: usize, cell_y: usize) -> (Rgb, Rgb) {
        if cell_x >= self.width || cell_y >= self.height {
            return (Rgb::WHITE, Rgb::BLACK);
        }
        (self.fg[cell_y][cell_x], self.bg[cell_y][cell_x])
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get width in pixels (2 per cell)
    pub fn pixel_width(&self) -> usize {
        self.width * 2
    }

    /// Get height in pixels (4 per cell)
    pub fn pixel_height(&self) -> usize {
        self.height * 4
    }
}
