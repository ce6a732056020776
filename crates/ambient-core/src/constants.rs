/// Default tuning for the control loop.
///
/// All of these are starting points for `ControlConfig::default()`; none of
/// them are load-bearing and every one can be overridden per session.

// Motion -> target mapping
pub const SPEED_SCALE: f64 = 50.0; // px/ms -> audio-meaningful speed units
pub const BASE_FREQUENCY_HZ: f64 = 110.0;
pub const FREQUENCY_PER_SPEED: f64 = 15.0;
pub const MOD_DEPTH_PER_SPEED: f64 = 30.0;
pub const MAX_MOD_DEPTH: f64 = 120.0;
pub const MIN_DT_MS: f64 = 1.0; // floor for every elapsed-time denominator

// Idle policy
pub const IDLE_THRESHOLD_MS: f64 = 800.0;
pub const IDLE_FREQUENCY_HZ: f64 = 110.0;
pub const IDLE_MOD_DEPTH: f64 = 50.0;
pub const QUIET_GAIN: f64 = 0.005;
pub const ACTIVE_GAIN: f64 = 0.18;
pub const INITIAL_GAIN: f64 = 0.01;

// Per-tick smoothing coefficients (fraction of remaining distance)
pub const SMOOTHING_ACTIVE: f64 = 0.08;
pub const SMOOTHING_IDLE: f64 = 0.02;
pub const IDLE_DECAY: f64 = 0.03; // targets drift back to rest
pub const GAIN_RELEASE: f64 = 0.04; // toward QUIET_GAIN
pub const GAIN_ATTACK: f64 = 0.05; // toward ACTIVE_GAIN

// Engine-side ramp time constants (seconds)
pub const FREQUENCY_RAMP_SEC: f64 = 0.01;
pub const MOD_DEPTH_RAMP_SEC: f64 = 0.01;
pub const GAIN_RAMP_SEC: f64 = 0.05;

// Carrier wobble layered on the snapped frequency
pub const WOBBLE_STEP_PER_FRAME: f64 = 0.01;
pub const WOBBLE_DEPTH_HZ: f64 = 10.0;

// Ghost waveform
pub const GHOST_PHASE_STEP: f64 = 0.035;
pub const GHOST_PHASE_JITTER: f64 = 0.01;
pub const SCOPE_LEN: usize = 2048;

/// Ascending pitch set used by the quantizer, 65.41 Hz (C2) to 3520 Hz (A7).
pub const SCALE_FREQUENCIES: [f64; 70] = [
    65.41, 69.30, 73.42, 77.78, 82.41, 87.31, 92.50, 98.00,
    103.83, 110.00, 116.54, 123.47, 130.81, 138.59, 146.83,
    155.56, 164.81, 174.61, 185.00, 196.00, 207.65, 220.00,
    233.08, 246.94, 261.63, 277.18, 293.66, 311.13, 329.63,
    349.23, 369.99, 392.00, 415.30, 440.00, 466.16, 493.88,
    523.25, 554.37, 587.33, 622.25, 659.25, 698.46, 739.99,
    783.99, 830.61, 880.00, 932.33, 987.77, 1046.50, 1108.73,
    1174.66, 1244.51, 1318.51, 1396.91, 1479.98, 1567.98,
    1661.22, 1760.00, 1864.66, 1975.53, 2093.00, 2217.46,
    2349.32, 2489.02, 2637.02, 2793.83, 2959.96, 3135.96,
    3322.44, 3520.00,
];
