// Score card shown after each round, plus best score persistence

pub mod highscore;
pub mod input;
pub mod render;
pub mod state;

pub use highscore::{get_highscore_path, load_highscore, record_score};
pub use input::handle_game_over_input;
pub use render::render_game_over;
pub use state::GameOverState;
