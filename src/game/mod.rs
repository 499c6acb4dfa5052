pub mod bird;
pub mod collision;
pub mod flash;
pub mod hud;
pub mod input;
pub mod land;
pub mod physics;
pub mod pipe;
pub mod sprite;
pub mod state;

pub use input::{poll_input, InputAction};
pub use physics::update;
pub use state::{preload_assets, GameState, Phase};
