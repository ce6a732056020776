//! Session configuration.
//!
//! Everything here is constant for the lifetime of a session. Defaults come
//! from `constants.rs`; callers override individual fields and then run
//! [`ControlConfig::validate`] once before handing the config to a session.

use crate::constants::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{name} must be finite and within [{min}, {max}], got {value}")]
    OutOfRange {
        name: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    #[error("scale table is empty")]
    EmptyScale,
    #[error("scale entry {index} ({value} Hz) is not a positive finite frequency")]
    InvalidPitch { index: usize, value: f64 },
    #[error("scale table is not strictly ascending at entry {index}")]
    UnsortedScale { index: usize },
}

fn check(name: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value >= min && value <= max {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

/// Maps a measured input speed to frequency and modulation-depth targets.
#[derive(Clone, Debug, PartialEq)]
pub struct MotionMapping {
    pub speed_scale: f64,
    pub base_frequency: f64,
    pub frequency_per_speed: f64,
    pub mod_depth_per_speed: f64,
    pub max_mod_depth: f64,
    pub min_dt_ms: f64,
}

impl Default for MotionMapping {
    fn default() -> Self {
        Self {
            speed_scale: SPEED_SCALE,
            base_frequency: BASE_FREQUENCY_HZ,
            frequency_per_speed: FREQUENCY_PER_SPEED,
            mod_depth_per_speed: MOD_DEPTH_PER_SPEED,
            max_mod_depth: MAX_MOD_DEPTH,
            min_dt_ms: MIN_DT_MS,
        }
    }
}

impl MotionMapping {
    /// Speed in mapping units for a displacement of `distance` pixels over
    /// `dt_ms`. The denominator is floored at `min_dt_ms`; a non-finite
    /// distance counts as no motion.
    #[inline]
    pub fn speed(&self, distance: f64, dt_ms: f64) -> f64 {
        if !distance.is_finite() {
            return 0.0;
        }
        distance.abs() / self.floor_dt(dt_ms) * self.speed_scale
    }

    #[inline]
    pub fn floor_dt(&self, dt_ms: f64) -> f64 {
        if dt_ms.is_finite() {
            dt_ms.max(self.min_dt_ms)
        } else {
            self.min_dt_ms
        }
    }

    /// `(target_frequency, target_mod_depth)` for a speed, with the depth
    /// clamped to `max_mod_depth`.
    #[inline]
    pub fn targets(&self, speed: f64) -> (f64, f64) {
        let frequency = self.base_frequency + speed * self.frequency_per_speed;
        let depth = (speed * self.mod_depth_per_speed).clamp(0.0, self.max_mod_depth);
        (frequency, depth)
    }
}

/// Rest values and convergence rates for the active/idle regimes.
#[derive(Clone, Debug, PartialEq)]
pub struct IdlePolicy {
    pub idle_threshold_ms: f64,
    pub idle_frequency: f64,
    pub idle_mod_depth: f64,
    pub quiet_gain: f64,
    pub active_gain: f64,
    /// Master gain before the first tick.
    pub initial_gain: f64,
    pub smoothing_active: f64,
    pub smoothing_idle: f64,
    pub idle_decay: f64,
    pub gain_release: f64,
    pub gain_attack: f64,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            idle_threshold_ms: IDLE_THRESHOLD_MS,
            idle_frequency: IDLE_FREQUENCY_HZ,
            idle_mod_depth: IDLE_MOD_DEPTH,
            quiet_gain: QUIET_GAIN,
            active_gain: ACTIVE_GAIN,
            initial_gain: INITIAL_GAIN,
            smoothing_active: SMOOTHING_ACTIVE,
            smoothing_idle: SMOOTHING_IDLE,
            idle_decay: IDLE_DECAY,
            gain_release: GAIN_RELEASE,
            gain_attack: GAIN_ATTACK,
        }
    }
}

/// Engine-side exponential ramp time constants, in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct RampTimes {
    pub frequency_sec: f64,
    pub mod_depth_sec: f64,
    pub gain_sec: f64,
}

impl Default for RampTimes {
    fn default() -> Self {
        Self {
            frequency_sec: FREQUENCY_RAMP_SEC,
            mod_depth_sec: MOD_DEPTH_RAMP_SEC,
            gain_sec: GAIN_RAMP_SEC,
        }
    }
}

/// Slow sinusoidal vibrato added on top of the snapped carrier frequency.
#[derive(Clone, Debug, PartialEq)]
pub struct IdleWobble {
    pub step_per_frame: f64,
    pub depth_hz: f64,
}

impl Default for IdleWobble {
    fn default() -> Self {
        Self {
            step_per_frame: WOBBLE_STEP_PER_FRAME,
            depth_hz: WOBBLE_DEPTH_HZ,
        }
    }
}

/// Continuous bias from where the page is scrolled to.
///
/// A normalized position `p` in [0, 1] yields the targets
/// `idle_frequency + p * frequency_span` and `idle_mod_depth + p * mod_depth_span`,
/// blended into the live targets by `weight` every tick.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollPositionInfluence {
    pub weight: f64,
    pub frequency_span: f64,
    pub mod_depth_span: f64,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlConfig {
    pub motion: MotionMapping,
    pub idle: IdlePolicy,
    pub ramps: RampTimes,
    pub wobble: IdleWobble,
    pub scroll_position: Option<ScrollPositionInfluence>,
}

impl ControlConfig {
    pub fn with_scroll_position(mut self, influence: ScrollPositionInfluence) -> Self {
        self.scroll_position = Some(influence);
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        check("speed_scale", m.speed_scale, 0.0, f64::MAX)?;
        check("base_frequency", m.base_frequency, f64::MIN_POSITIVE, f64::MAX)?;
        check("frequency_per_speed", m.frequency_per_speed, 0.0, f64::MAX)?;
        check("mod_depth_per_speed", m.mod_depth_per_speed, 0.0, f64::MAX)?;
        check("max_mod_depth", m.max_mod_depth, 0.0, f64::MAX)?;
        check("min_dt_ms", m.min_dt_ms, f64::MIN_POSITIVE, f64::MAX)?;

        let i = &self.idle;
        check("idle_threshold_ms", i.idle_threshold_ms, 0.0, f64::MAX)?;
        check("idle_frequency", i.idle_frequency, f64::MIN_POSITIVE, f64::MAX)?;
        check("idle_mod_depth", i.idle_mod_depth, 0.0, m.max_mod_depth)?;
        check("quiet_gain", i.quiet_gain, 0.0, 1.0)?;
        check("active_gain", i.active_gain, 0.0, 1.0)?;
        check("initial_gain", i.initial_gain, 0.0, 1.0)?;
        check("smoothing_active", i.smoothing_active, f64::MIN_POSITIVE, 1.0)?;
        check("smoothing_idle", i.smoothing_idle, f64::MIN_POSITIVE, 1.0)?;
        check("idle_decay", i.idle_decay, f64::MIN_POSITIVE, 1.0)?;
        check("gain_release", i.gain_release, f64::MIN_POSITIVE, 1.0)?;
        check("gain_attack", i.gain_attack, f64::MIN_POSITIVE, 1.0)?;

        let r = &self.ramps;
        check("frequency_ramp_sec", r.frequency_sec, 0.0, f64::MAX)?;
        check("mod_depth_ramp_sec", r.mod_depth_sec, 0.0, f64::MAX)?;
        check("gain_ramp_sec", r.gain_sec, 0.0, f64::MAX)?;

        check("wobble_step", self.wobble.step_per_frame, 0.0, f64::MAX)?;
        check("wobble_depth_hz", self.wobble.depth_hz, 0.0, f64::MAX)?;

        if let Some(s) = &self.scroll_position {
            check("scroll_position_weight", s.weight, 0.0, 1.0)?;
            check("scroll_frequency_span", s.frequency_span, 0.0, f64::MAX)?;
            check("scroll_mod_depth_span", s.mod_depth_span, 0.0, f64::MAX)?;
        }
        Ok(())
    }
}
