// Text-art textures and raw sound buffers

use std::sync::Arc;

/// A texel mask parsed from a text file.
///
/// One character per texel: `.` and space are transparent, anything else is
/// opaque. Lines starting with `;` are comments. Rows shorter than the widest
/// row are padded with transparent texels.
#[derive(Debug, Clone, PartialEq)]
pub struct Texture {
    width: usize,
    height: usize,
    texels: Vec<bool>,
    texel_size: f32, // Virtual units per texel
}

impl Texture {
    /// A texture with no texels (what a failed load leaves behind)
    pub fn empty(texel_size: f32) -> Self {
        Self {
            width: 0,
            height: 0,
            texels: Vec::new(),
            texel_size,
        }
    }

    pub fn parse(source: &str, texel_size: f32) -> Self {
        let rows: Vec<&str> = source
            .lines()
            .filter(|line| !line.starts_with(';'))
            .map(|line| line.trim_end_matches('\r'))
            .collect();

        // Trailing blank lines are not part of the art
        let height = rows
            .iter()
            .rposition(|row| !row.trim().is_empty())
            .map_or(0, |last| last + 1);
        let rows = &rows[..height];

        let width = rows.iter().map(|row| row.chars().count()).max().unwrap_or(0);

        let mut texels = vec![false; width * height];
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                texels[y * width + x] = !matches!(ch, '.' | ' ');
            }
        }

        Self {
            width,
            height,
            texels,
            texel_size,
        }
    }

    /// Fully opaque block, handy for tests
    #[cfg(test)]
    pub fn filled(width: usize, height: usize, texel_size: f32) -> Self {
        Self {
            width,
            height,
            texels: vec![true; width * height],
            texel_size,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn texel_size(&self) -> f32 {
        self.texel_size
    }

    /// Size in virtual units
    pub fn size(&self) -> (f32, f32) {
        (
            self.width as f32 * self.texel_size,
            self.height as f32 * self.texel_size,
        )
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn is_opaque(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.texels[y * self.width + x]
    }
}

/// Encoded audio data (WAV) as read from disk
#[derive(Debug, Clone, PartialEq)]
pub struct SoundBuffer(Arc<[u8]>);

impl SoundBuffer {
    pub fn bytes(&self) -> &Arc<[u8]> {
        &self.0
    }
}

impl From<Vec<u8>> for SoundBuffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes.into())
    }
}
