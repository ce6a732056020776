/// Web-side tuning for the audio graph, scope drawing and page wiring.
///
/// Control-loop tuning lives in `ambient_core::constants`; these only shape
/// how the browser side presents it.

// Audio graph
pub const MODULATOR_HZ: f32 = 5.0; // FM modulator rate
pub const REVERB_DRY: f32 = 0.5;
pub const REVERB_WET: f32 = 0.5;
pub const REVERB_TAIL_SEC: f32 = 3.5;
pub const REVERB_DECAY_SEC: f32 = 1.8; // e-folding time of the generated impulse
pub const ANALYSER_FFT_SIZE: u32 = 2048;

// Scope drawing
pub const SCOPE_LINE_WIDTH: f64 = 2.0;
pub const SCOPE_EDGE_COLOR: &str = "#EAAC59";
pub const SCOPE_MID_COLOR: &str = "#fff";
pub const GHOST_VERTICAL_SCALE: f64 = 0.15; // fraction of canvas height
pub const LIVE_VERTICAL_SCALE: f64 = 1.0 / 3.0;

// Continuous bias from page scroll position
pub const SCROLL_POSITION_WEIGHT: f64 = 0.01;
pub const SCROLL_FREQUENCY_SPAN: f64 = 330.0;
pub const SCROLL_MOD_DEPTH_SPAN: f64 = 40.0;

// DOM ids
pub const SCOPE_CANVAS_ID: &str = "oscilloscope";
pub const START_OVERLAY_ID: &str = "start-overlay";
