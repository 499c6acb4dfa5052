// Asset module for Flapterm
// Text-art textures and sound buffers, loaded by name from the asset directory

pub mod manager;
pub mod texture;

pub use manager::AssetManager;
pub use texture::{SoundBuffer, Texture};
