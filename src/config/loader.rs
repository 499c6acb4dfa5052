// Configuration file loading and creation

use super::types::Config;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Get the path to the configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("flapterm");

    // Create config directory if it doesn't exist
    fs::create_dir_all(&path).ok();

    path.push("config.toml");
    path
}

/// Load configuration from the default location, creating it if missing
pub fn load_config() -> Result<Config, io::Error> {
    load_config_from(&get_config_path())
}

/// Load configuration from `path`, or create a default file there
pub fn load_config_from(path: &Path) -> Result<Config, io::Error> {
    if path.exists() {
        let contents = fs::read_to_string(path)?;
        match toml::from_str(&contents) {
            Ok(config) => Ok(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file: {}", e);
                eprintln!("Using default configuration");
                tracing::warn!(path = %path.display(), error = %e, "config parse failed");
                Ok(Config::default())
            }
        }
    } else {
        create_default_config(path)?;
        Ok(Config::default())
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<(), io::Error> {
    let config = Config::default();
    let toml_string =
        toml::to_string_pretty(&config).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    let commented_toml = format!(
        "# Flapterm Configuration File\n\
         # Edit this file to customize game behavior\n\
         # After editing, restart the game for changes to take effect\n\
         #\n\
         # Key binding format: \"Space\", \"Up\", \"Down\", \"Enter\", \"Esc\"\n\
         #                     or single characters like \"W\", \"Q\", etc.\n\
         #\n\
         # Colors: RGB values from 0-255\n\n\
         {}",
        toml_string
    );

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, commented_toml)?;
    println!("Created default config file at: {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serialization() {
        let config = Config::default();
        let toml_string = toml::to_string_pretty(&config).unwrap();

        let parsed: Config = toml::from_str(&toml_string).unwrap();

        assert_eq!(parsed.physics.gravity, config.physics.gravity);
        assert_eq!(
            parsed.physics.pipe_spawn_frequency,
            config.physics.pipe_spawn_frequency
        );
        assert_eq!(parsed.keybindings.flap, config.keybindings.flap);
        assert_eq!(parsed.display.target_fps, config.display.target_fps);
        assert_eq!(parsed.assets.directory, config.assets.directory);
    }

    #[test]
    fn test_partial_config_with_defaults() {
        let partial_toml = r#"
            [physics]
            gravity = 500.0
        "#;

        let config: Config = toml::from_str(partial_toml).unwrap();

        // Custom value
        assert_eq!(config.physics.gravity, 500.0);

        // Defaults fill the rest, within and across sections
        assert_eq!(config.physics.flying_speed, 350.0);
        assert_eq!(config.physics.detection_scale, 0.8);
        assert_eq!(config.keybindings.flap, "Space");
        assert_eq!(config.display.target_fps, 60);
    }

    #[test]
    fn test_missing_file_is_created_with_defaults() {
        let dir = std::env::temp_dir().join(format!("flapterm-cfg-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.physics.field_width, 1024.0);
        assert!(path.exists());

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("# Flapterm Configuration File"));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unparseable_file_falls_back_to_defaults() {
        let dir = std::env::temp_dir().join(format!("flapterm-badcfg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        fs::write(&path, "[physics\ngravity = ").unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.physics.gravity, 350.0);

        fs::remove_dir_all(&dir).ok();
    }
}
