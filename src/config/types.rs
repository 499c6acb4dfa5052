// Flapterm configuration types
// All settings with defaults matching the classic game feel

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Assets checked in next to the sources, found when running from a checkout
const SOURCE_ASSETS_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets");

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub keybindings: KeyBindings,
    #[serde(default)]
    pub physics: PhysicsConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct KeyBindings {
    // Flap (mouse left click always flaps too)
    pub flap: String,
    pub flap_alt: String,

    // Game controls
    pub quit: String,
    pub retry: String,
    pub menu: String,

    // Menu controls
    pub menu_up: String,
    pub menu_down: String,
    pub menu_select: String,
    pub menu_back: String,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            flap: "Space".to_string(),
            flap_alt: "Up".to_string(),
            quit: "Q".to_string(),
            retry: "R".to_string(),
            menu: "M".to_string(),
            menu_up: "Up".to_string(),
            menu_down: "Down".to_string(),
            menu_select: "Enter".to_string(),
            menu_back: "Esc".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // Virtual field dimensions (all other distances are in these units)
    pub field_width: f32,
    pub field_height: f32,

    // Virtual units covered by one texture character
    pub texel_size: f32,

    // Bird motion, units per second
    pub gravity: f32,
    pub flying_speed: f32,

    // Seconds the bird keeps rising after a flap
    pub flying_duration: f32,

    // Bird tilt, degrees per second and maximum tilt in degrees
    pub rotation_speed: f32,
    pub max_rotation: f32,

    // Seconds for one full wing cycle
    pub bird_animation_duration: f32,

    // Pipe and land scroll speed, units per second
    pub pipe_movement_speed: f32,

    // Seconds between pipe groups
    pub pipe_spawn_frequency: f32,

    // Bird hitbox scale used in collision checks (1.0 = full sprite)
    pub detection_scale: f32,

    // Flash alpha change per second (alpha runs 0-255)
    pub flash_speed: f32,

    // Seconds between the crash and the game over screen
    pub time_before_game_over: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            field_width: 1024.0,
            field_height: 768.0,
            texel_size: 4.0,
            gravity: 350.0,
            flying_speed: 350.0,
            flying_duration: 0.25,
            rotation_speed: 100.0,
            max_rotation: 25.0,
            bird_animation_duration: 0.4,
            pipe_movement_speed: 200.0,
            pipe_spawn_frequency: 1.5,
            detection_scale: 0.8,
            flash_speed: 1500.0,
            time_before_game_over: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DisplayConfig {
    // Target frames per second
    pub target_fps: u64,

    // Colors (RGB values 0-255)
    pub sky_color: [u8; 3],
    pub skyline_color: [u8; 3],
    pub pipe_color: [u8; 3],
    pub land_color: [u8; 3],
    pub bird_color: [u8; 3],
    pub score_color: [u8; 3],
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            target_fps: 60,
            sky_color: [78, 192, 202],
            skyline_color: [160, 220, 200],
            pipe_color: [115, 191, 46],
            land_color: [222, 216, 149],
            bird_color: [245, 200, 66],
            score_color: [255, 255, 255],
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AssetsConfig {
    // Directory holding textures (*.txt) and sounds (*.wav).
    // Unset: "assets" next to the executable, then the user data dir,
    // then the source checkout
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl AssetsConfig {
    /// The directory assets are read from
    pub fn resolve_directory(&self) -> PathBuf {
        match &self.directory {
            Some(dir) => PathBuf::from(dir),
            None => first_existing(&default_asset_dirs()),
        }
    }
}

fn default_asset_dirs() -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|exe| exe.parent().map(PathBuf::from)) {
        candidates.push(exe_dir.join("assets"));
    }
    if let Some(data_dir) = dirs::data_dir() {
        candidates.push(data_dir.join("flapterm").join("assets"));
    }
    candidates.push(PathBuf::from(SOURCE_ASSETS_DIR));
    candidates
}

/// First candidate that is a directory; the first one when none is, so
/// failures point at the preferred location
fn first_existing(candidates: &[PathBuf]) -> PathBuf {
    candidates
        .iter()
        .find(|dir| dir.is_dir())
        .or_else(|| candidates.first())
        .cloned()
        .unwrap_or_else(|| PathBuf::from(SOURCE_ASSETS_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_directory_wins() {
        let config: Config = toml::from_str("[assets]\ndirectory = \"/opt/flapterm/art\"").unwrap();
        assert_eq!(config.assets.resolve_directory(), PathBuf::from("/opt/flapterm/art"));
    }

    #[test]
    fn test_default_directory_is_not_written_out() {
        let text = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(!text.contains("directory"));
        assert!(!text.contains(env!("CARGO_MANIFEST_DIR")));
    }

    #[test]
    fn test_first_existing_directory_is_picked() {
        let root = std::env::temp_dir().join(format!("flapterm-assetdirs-{}", std::process::id()));
        let missing = root.join("missing");
        let present = root.join("present");
        std::fs::create_dir_all(&present).unwrap();

        assert_eq!(first_existing(&[missing.clone(), present.clone()]), present);
        assert_eq!(first_existing(&[missing.clone()]), missing);
        assert_eq!(first_existing(&[]), PathBuf::from(SOURCE_ASSETS_DIR));

        std::fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_source_checkout_is_the_last_resort() {
        let dirs = default_asset_dirs();
        assert_eq!(dirs.last(), Some(&PathBuf::from(SOURCE_ASSETS_DIR)));
        assert!(AssetsConfig::default().resolve_directory().is_dir());
    }
}
