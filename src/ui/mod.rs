pub mod braille;
pub mod overlay;
pub mod render;
pub mod viewport;

pub use braille::{BrailleCanvas, Rgb};
pub use overlay::{render_overlay, OverlayMessage};
pub use render::render_game;
pub use viewport::Viewport;
