// Sound effects: loaded buffers plus the output they are played on

use std::collections::HashMap;
use std::rc::Rc;

use crate::assets::{AssetManager, SoundBuffer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    Wing,
    Hit,
    Point,
}

impl SoundEffect {
    /// Asset name the effect's buffer is registered under
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Wing => "Wing Sound",
            SoundEffect::Hit => "Hit Sound",
            SoundEffect::Point => "Point Sound",
        }
    }

    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Wing => "wing.wav",
            SoundEffect::Hit => "hit.wav",
            SoundEffect::Point => "point.wav",
        }
    }

    pub fn all() -> [SoundEffect; 3] {
        [SoundEffect::Wing, SoundEffect::Hit, SoundEffect::Point]
    }
}

/// Something that can play an encoded sound buffer
pub trait AudioOutput {
    fn play(&self, effect: SoundEffect, buffer: &SoundBuffer);
}

/// Output used when no audio backend is compiled in or available
pub struct SilentOutput;

impl AudioOutput for SilentOutput {
    fn play(&self, effect: SoundEffect, buffer: &SoundBuffer) {
        tracing::trace!(?effect, bytes = buffer.bytes().len(), "sound (silent)");
    }
}

#[cfg(feature = "sound")]
pub use rodio_output::RodioOutput;

#[cfg(feature = "sound")]
mod rodio_output {
    use std::io::Cursor;

    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::{AudioOutput, SoundEffect};
    use crate::assets::SoundBuffer;

    pub struct RodioOutput {
        _stream: OutputStream,
        handle: OutputStreamHandle,
    }

    impl RodioOutput {
        pub fn new() -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            Ok(Self {
                _stream: stream,
                handle,
            })
        }
    }

    impl AudioOutput for RodioOutput {
        fn play(&self, effect: SoundEffect, buffer: &SoundBuffer) {
            let source = match Decoder::new(Cursor::new(buffer.bytes().clone())) {
                Ok(source) => source,
                Err(e) => {
                    tracing::warn!(?effect, error = %e, "sound decode failed");
                    return;
                }
            };

            if let Ok(sink) = Sink::try_new(&self.handle) {
                sink.append(source);
                sink.detach();
            }
        }
    }
}

/// Pick the best available output for this build
pub fn default_output() -> Rc<dyn AudioOutput> {
    #[cfg(feature = "sound")]
    {
        match RodioOutput::new() {
            Ok(output) => return Rc::new(output),
            Err(e) => tracing::warn!(error = %e, "no audio device, falling back to silence"),
        }
    }

    Rc::new(SilentOutput)
}

/// Register every sound effect file with the asset manager
pub fn load_sounds(assets: &mut AssetManager) {
    for effect in SoundEffect::all() {
        assets.load_sound(effect.asset_name(), effect.file_name());
    }
}

/// The game's sound effects bound to an output
pub struct Sounds {
    buffers: HashMap<SoundEffect, SoundBuffer>,
    output: Rc<dyn AudioOutput>,
}

impl Sounds {
    pub fn new(assets: &AssetManager, output: Rc<dyn AudioOutput>) -> Self {
        let buffers = SoundEffect::all()
            .into_iter()
            .filter_map(|effect| assets.sound(effect.asset_name()).map(|b| (effect, b)))
            .collect();

        Self { buffers, output }
    }

    /// Play `effect`; a sound that never loaded is silently skipped
    pub fn play(&self, effect: SoundEffect) {
        if let Some(buffer) = self.buffers.get(&effect) {
            self.output.play(effect, buffer);
        }
    }
}

/// Output that remembers what it was asked to play
#[cfg(test)]
#[derive(Default)]
pub struct RecordingOutput {
    pub played: std::cell::RefCell<Vec<SoundEffect>>,
}

#[cfg(test)]
impl AudioOutput for RecordingOutput {
    fn play(&self, effect: SoundEffect, _buffer: &SoundBuffer) {
        self.played.borrow_mut().push(effect);
    }
}
