//! Audio cue sink
//!
//! The engine only decides *which* cue a lock produces; playing it is up to
//! the frontend.

use crate::types::AudioCue;

/// Something that can play an [`AudioCue`]
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

impl<S: AudioSink + ?Sized> AudioSink for &mut S {
    fn play(&mut self, cue: AudioCue) {
        (**self).play(cue)
    }
}

/// Silent sink
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Records every cue it is asked to play
#[derive(Debug, Clone, Default)]
pub struct RecordingAudio {
    pub played: Vec<AudioCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.played.push(cue);
    }
}
