//! Sound-effect seam
//!
//! The simulation decides *when* a sound happens; playback itself is an
//! external collaborator behind [`AudioSink`]. Cues are fire-and-forget, and
//! a restart stops everything that is still playing.

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// The cat caught a mouse
    MouseEaten,
    /// All mice eaten - the player won
    Victory,
    /// A dog caught the cat - the player lost
    Defeat,
}

/// Outgoing audio cues from the transition engine
pub trait AudioSink {
    /// Trigger a sound effect (fire-and-forget)
    fn play(&mut self, effect: SoundEffect);

    /// Stop every playing sound (used on restart)
    fn stop_all(&mut self);
}

/// Sink for headless runs: logs cues instead of playing them
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("audio cue: {effect:?}");
    }

    fn stop_all(&mut self) {
        log::debug!("audio stopped");
    }
}

/// Records cues so tests can assert on the exact sequence.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingAudio {
    pub played: Vec<SoundEffect>,
    pub stops: usize,
}

#[cfg(test)]
impl AudioSink for RecordingAudio {
    fn play(&mut self, effect: SoundEffect) {
        self.played.push(effect);
    }

    fn stop_all(&mut self) {
        self.stops += 1;
    }
}
