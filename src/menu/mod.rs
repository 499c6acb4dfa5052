// Title screen for Flapterm
// Handles the main menu UI and the app-level state machine

pub mod input;
pub mod render;
pub mod state;

pub use input::{handle_menu_input, MenuAction};
pub use render::render_menu;
pub use state::{AppState, MenuState};
