//! Boundary to the oscillator graph that actually makes sound.

use crate::config::RampTimes;

/// Parameter sink for the two-oscillator FM graph.
///
/// Each call hands over a new target; the engine approaches it with its own
/// exponential ramp of the given time constant, underneath the frame-rate
/// smoothing done by the control state machine.
pub trait SynthesisEngine {
    fn set_carrier_frequency(&mut self, hz: f64, time_constant_sec: f64);
    fn set_modulation_depth(&mut self, depth: f64, time_constant_sec: f64);
    fn set_master_gain(&mut self, gain: f64, time_constant_sec: f64);
}

/// Parameters pushed to the engine for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthFrame {
    pub frequency_hz: f64,
    pub mod_depth: f64,
    pub gain: f64,
}

impl SynthFrame {
    pub fn push_to<E: SynthesisEngine + ?Sized>(&self, engine: &mut E, ramps: &RampTimes) {
        engine.set_carrier_frequency(self.frequency_hz, ramps.frequency_sec);
        engine.set_modulation_depth(self.mod_depth, ramps.mod_depth_sec);
        engine.set_master_gain(self.gain, ramps.gain_sec);
    }
}
