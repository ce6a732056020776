// Host-side tests for tuning constants and their relationships.
// The web crate is wasm-only, so its constants module is included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use ambient_core::constants as tuning;
use ambient_core::{ControlConfig, ScrollPositionInfluence};
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn analyser_matches_scope_buffer() {
    assert!(ANALYSER_FFT_SIZE.is_power_of_two());
    assert!((32..=32768).contains(&ANALYSER_FFT_SIZE));
    assert_eq!(ANALYSER_FFT_SIZE as usize, tuning::SCOPE_LEN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn scope_fits_the_canvas() {
    // full-scale samples must stay inside the canvas
    assert!(GHOST_VERTICAL_SCALE > 0.0 && GHOST_VERTICAL_SCALE <= 0.5);
    assert!(LIVE_VERTICAL_SCALE > 0.0 && LIVE_VERTICAL_SCALE <= 0.5);
    assert!(GHOST_VERTICAL_SCALE < LIVE_VERTICAL_SCALE);
    assert!(SCOPE_LINE_WIDTH > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn reverb_mix_is_bounded() {
    assert!(REVERB_DRY + REVERB_WET <= 1.0);
    assert!(REVERB_DECAY_SEC < REVERB_TAIL_SEC);
    assert!(MODULATOR_HZ > 0.0);
}

#[test]
fn web_scroll_bias_is_a_valid_config() {
    let cfg = ControlConfig::default().with_scroll_position(ScrollPositionInfluence {
        weight: SCROLL_POSITION_WEIGHT,
        frequency_span: SCROLL_FREQUENCY_SPAN,
        mod_depth_span: SCROLL_MOD_DEPTH_SPAN,
    });
    assert_eq!(cfg.validate(), Ok(()));
    assert!(tuning::IDLE_MOD_DEPTH + SCROLL_MOD_DEPTH_SPAN <= tuning::MAX_MOD_DEPTH);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn control_tuning_has_logical_relationships() {
    // faster pull while moving than while resting
    assert!(tuning::SMOOTHING_ACTIVE > tuning::SMOOTHING_IDLE);
    assert!(tuning::QUIET_GAIN < tuning::INITIAL_GAIN);
    assert!(tuning::INITIAL_GAIN < tuning::ACTIVE_GAIN);
    assert!(tuning::ACTIVE_GAIN <= 1.0);
    assert!(tuning::IDLE_MOD_DEPTH <= tuning::MAX_MOD_DEPTH);
    assert!(tuning::MIN_DT_MS > 0.0);
    let scale = &tuning::SCALE_FREQUENCIES;
    assert!(scale[0] <= tuning::IDLE_FREQUENCY_HZ);
    assert!(scale[scale.len() - 1] >= tuning::IDLE_FREQUENCY_HZ);
}
