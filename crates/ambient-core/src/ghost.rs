//! Synthetic placeholder waveform shown before live audio exists.

use crate::constants::{GHOST_PHASE_JITTER, GHOST_PHASE_STEP};
use rand::prelude::*;
use std::f64::consts::TAU;

// (phase multiplier, cycles across the buffer, weight)
const HARMONICS: [(f64, f64, f64); 3] = [(1.6, 1.8, 1.0), (0.9, 3.2, 0.6), (2.4, 5.1, 0.28)];
const OUTPUT_SCALE: f64 = 0.3;
const LFO_RATE: f64 = 0.08;
const LFO_CENTER: f64 = 0.6;
const LFO_SPAN: f64 = 0.4;

pub struct GhostWaveform {
    phase: f64,
    amplitude_lfo: f64,
    rng: StdRng,
}

impl GhostWaveform {
    pub fn new(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            phase: 0.0,
            amplitude_lfo: LFO_CENTER,
            rng,
        }
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Envelope used by the most recent fill, in [0.2, 1.0].
    #[inline]
    pub fn amplitude_lfo(&self) -> f64 {
        self.amplitude_lfo
    }

    /// Fill `buffer` with byte samples centred at 128, then advance the phase
    /// by a fixed step plus a small random jitter.
    pub fn fill(&mut self, buffer: &mut [u8]) {
        let len = buffer.len() as f64;
        let phase = self.phase;
        self.amplitude_lfo = LFO_CENTER + (phase * LFO_RATE).sin() * LFO_SPAN;

        for (i, sample) in buffer.iter_mut().enumerate() {
            let t = i as f64 / len;
            let combined: f64 = HARMONICS
                .iter()
                .map(|&(rate, cycles, weight)| (phase * rate + t * TAU * cycles).sin() * weight)
                .sum();
            let v = (combined * OUTPUT_SCALE * self.amplitude_lfo * 127.0 + 128.0).round();
            *sample = v.clamp(0.0, 255.0) as u8;
        }

        self.phase += GHOST_PHASE_STEP + self.rng.gen::<f64>() * GHOST_PHASE_JITTER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_advances_within_step_bounds() {
        let mut g = GhostWaveform::new(7);
        let mut buf = [0u8; 32];
        let before = g.phase();
        g.fill(&mut buf);
        let step = g.phase() - before;
        assert!(step >= GHOST_PHASE_STEP);
        assert!(step < GHOST_PHASE_STEP + GHOST_PHASE_JITTER);
    }

    #[test]
    fn empty_buffer_still_advances() {
        let mut g = GhostWaveform::new(1);
        g.fill(&mut []);
        assert!(g.phase() > 0.0);
    }
}
