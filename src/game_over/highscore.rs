// Best score persistence

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct HighScore {
    #[serde(default)]
    pub best: u32,
}

/// Get the path to the high score file
pub fn get_highscore_path() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("flapterm");
    path.push("highscore.toml");
    path
}

/// Read the best score; a missing or unreadable file counts as no score yet
pub fn load_highscore(path: &Path) -> HighScore {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            if e.kind() != io::ErrorKind::NotFound {
                tracing::warn!(path = %path.display(), error = %e, "high score unreadable");
            }
            return HighScore::default();
        }
    };

    toml::from_str(&contents).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "high score parse failed");
        HighScore::default()
    })
}

pub fn save_highscore(path: &Path, score: HighScore) -> io::Result<()> {
    let toml_string =
        toml::to_string(&score).map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, toml_string)
}

/// Fold a finished round into the stored best.
/// Returns the best score after the round and whether this round set it.
pub fn record_score(path: &Path, score: u32) -> io::Result<(u32, bool)> {
    let stored = load_highscore(path);
    if score > stored.best {
        save_highscore(path, HighScore { best: score })?;
        tracing::info!(score, previous = stored.best, "new best score");
        Ok((score, true))
    } else {
        Ok((stored.best, false))
    }
}
