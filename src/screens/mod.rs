mod common;
mod game_over;
mod menu;
mod play;

pub use game_over::run_game_over;
pub use menu::run_menu;
pub use play::run_game;
