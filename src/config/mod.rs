// Configuration module for Flapterm
// Handles loading and managing game configuration from TOML file

pub mod loader;
pub mod types;

pub use loader::{load_config, load_config_from};
pub use types::{Config, KeyBindings, PhysicsConfig};
