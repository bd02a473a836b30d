//! Terminal bell as an audio sink.

use crate::core::AudioSink;
use crate::types::AudioCue;

/// Collects cues during a frame; the frontend rings the bell once per frame
/// if anything was played.
#[derive(Debug, Clone, Copy)]
pub struct BellAudio {
    enabled: bool,
    pending: bool,
}

impl BellAudio {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pending: false,
        }
    }

    /// Whether the bell should ring, clearing the request
    pub fn take_pending(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl AudioSink for BellAudio {
    fn play(&mut self, _cue: AudioCue) {
        // The bell has one sound; every cue rings it.
        if self.enabled {
            self.pending = true;
        }
    }
}
