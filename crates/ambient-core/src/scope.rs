//! Chooses where the scope's samples come from each frame.

use crate::ghost::GhostWaveform;

/// Audio output availability. Browsers refuse to start audio until a user
/// gesture, so a session starts `Locked` and moves to `Unlocked` once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioGate {
    #[default]
    Locked,
    Unlocked,
}

impl AudioGate {
    /// Returns true only on the transition.
    pub fn unlock(&mut self) -> bool {
        let was_locked = *self == AudioGate::Locked;
        *self = AudioGate::Unlocked;
        was_locked
    }

    #[inline]
    pub fn is_unlocked(self) -> bool {
        self == AudioGate::Unlocked
    }

    #[inline]
    pub fn wave_source(self) -> WaveSource {
        match self {
            AudioGate::Locked => WaveSource::Ghost,
            AudioGate::Unlocked => WaveSource::Live,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveSource {
    Ghost,
    Live,
}

#[derive(Debug)]
pub struct ScopeFrame<'a> {
    pub samples: &'a [u8],
    pub source: WaveSource,
}

impl ScopeFrame<'_> {
    #[inline]
    pub fn use_ghost(&self) -> bool {
        self.source == WaveSource::Ghost
    }
}

/// Owns the sample buffer handed to the renderer.
pub struct ScopeFeed {
    ghost: GhostWaveform,
    samples: Vec<u8>,
}

impl ScopeFeed {
    /// `len` is clamped to at least one sample.
    pub fn new(len: usize, ghost: GhostWaveform) -> Self {
        Self {
            ghost,
            samples: vec![128; len.max(1)],
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Refill the buffer for this frame. `read_live` is only called when the
    /// gate is unlocked; otherwise the ghost generator fills the buffer.
    pub fn refresh<F>(&mut self, gate: AudioGate, read_live: F) -> ScopeFrame<'_>
    where
        F: FnOnce(&mut [u8]),
    {
        let source = gate.wave_source();
        match source {
            WaveSource::Ghost => self.ghost.fill(&mut self.samples),
            WaveSource::Live => read_live(&mut self.samples),
        }
        ScopeFrame {
            samples: &self.samples,
            source,
        }
    }
}
