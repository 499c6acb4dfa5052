// Named, cached texture and sound loading

use std::collections::HashMap;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::rc::Rc;

use super::texture::{SoundBuffer, Texture};

/// A failed asset load, kept so it can be reported before the TUI starts
#[derive(Debug, Clone)]
pub struct LoadFailure {
    pub name: String,
    pub path: PathBuf,
    pub reason: String,
}

impl std::fmt::Display for LoadFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Error loading {} from {}: {}",
            self.name,
            self.path.display(),
            self.reason
        )
    }
}

/// Loads textures and sounds by name from one asset directory.
///
/// Loads are cached: asking for a name that is already loaded does not touch
/// the disk again. A failed load is logged and recorded but never fatal; the
/// name then resolves to an empty texture or to no sound at all.
pub struct AssetManager {
    directory: PathBuf,
    texel_size: f32,
    textures: HashMap<String, Rc<Texture>>,
    sounds: HashMap<String, SoundBuffer>,
    failures: Vec<LoadFailure>,
}

impl AssetManager {
    pub fn new(directory: impl Into<PathBuf>, texel_size: f32) -> Self {
        Self {
            directory: directory.into(),
            texel_size,
            textures: HashMap::new(),
            sounds: HashMap::new(),
            failures: Vec::new(),
        }
    }

    pub fn load_texture(&mut self, name: &str, file: &str) {
        if self.textures.contains_key(name) {
            return;
        }

        let path = self.directory.join(file);
        let texture = match fs::read_to_string(&path) {
            Ok(source) => {
                let texture = Texture::parse(&source, self.texel_size);
                tracing::debug!(
                    name,
                    width = texture.width(),
                    height = texture.height(),
                    "texture loaded"
                );
                texture
            }
            Err(e) => {
                self.record_failure(name, path, e);
                Texture::empty(self.texel_size)
            }
        };

        self.textures.insert(name.to_string(), Rc::new(texture));
    }

    pub fn load_sound(&mut self, name: &str, file: &str) {
        if self.sounds.contains_key(name) {
            return;
        }

        let path = self.directory.join(file);
        match fs::read(&path) {
            Ok(bytes) => {
                tracing::debug!(name, bytes = bytes.len(), "sound loaded");
                self.sounds.insert(name.to_string(), SoundBuffer::from(bytes));
            }
            Err(e) => self.record_failure(name, path, e),
        }
    }

    /// Texture registered under `name`, or an empty one if it never loaded
    pub fn texture(&self, name: &str) -> Rc<Texture> {
        self.textures
            .get(name)
            .cloned()
            .unwrap_or_else(|| Rc::new(Texture::empty(self.texel_size)))
    }

    pub fn sound(&self, name: &str) -> Option<SoundBuffer> {
        self.sounds.get(name).cloned()
    }

    /// Register an in-memory texture under `name`
    #[cfg(test)]
    pub fn insert_texture(&mut self, name: &str, texture: Texture) {
        self.textures.insert(name.to_string(), Rc::new(texture));
    }

    /// Register an in-memory sound under `name`
    #[cfg(test)]
    pub fn insert_sound(&mut self, name: &str, sound: SoundBuffer) {
        self.sounds.insert(name.to_string(), sound);
    }

    pub fn failures(&self) -> &[LoadFailure] {
        &self.failures
    }

    /// Write one line per failed load, then where assets were looked for
    pub fn report_failures(&self, out: &mut impl Write) -> io::Result<()> {
        if self.failures.is_empty() {
            return Ok(());
        }
        for failure in &self.failures {
            writeln!(out, "{}", failure)?;
        }
        writeln!(out, "Assets are read from {}", self.directory.display())
    }

    fn record_failure(&mut self, name: &str, path: PathBuf, error: io::Error) {
        tracing::warn!(name, path = %path.display(), error = %error, "asset load failed");
        self.failures.push(LoadFailure {
            name: name.to_string(),
            path,
            reason: error.to_string(),
        });
    }
}
