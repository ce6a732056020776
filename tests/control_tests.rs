// Host-side tests for the control state machine.

use ambient_core::constants::*;
use ambient_core::{
    Activity, ControlConfig, ControlStateMachine, InfluenceChannel, ScrollPositionInfluence,
};

fn machine() -> ControlStateMachine {
    ControlStateMachine::new(ControlConfig::default())
}

#[test]
fn pointer_scenario_sets_targets() {
    let mut m = machine();
    let st = m.on_pointer_move(100.0, 0.0, 20.0, 1000.0);
    assert_eq!(st.speed, 250.0);
    assert_eq!(m.state().target_frequency, 3860.0);
    assert_eq!(m.state().target_mod_depth, 120.0);
    assert_eq!(m.state().last_input_ms, 1000.0);
}

#[test]
fn event_only_moves_targets_until_next_tick() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    assert_eq!(m.state().current_frequency, IDLE_FREQUENCY_HZ);
    let out = m.tick(16.0);
    // first tick after motion uses the active coefficient
    let expected = IDLE_FREQUENCY_HZ + (3860.0 - IDLE_FREQUENCY_HZ) * SMOOTHING_ACTIVE;
    assert!((out.frequency - expected).abs() < 1e-9);
    assert_eq!(m.activity(), Activity::Active);
}

#[test]
fn idle_decay_scenario() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    m.tick(2000.0);
    assert!((m.state().target_frequency - 3747.5).abs() < 1e-9);
    assert_eq!(m.activity(), Activity::Idle);
}

#[test]
fn current_converges_monotonically_without_overshoot() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    let target = m.state().target_frequency;
    let target_depth = m.state().target_mod_depth;
    let mut err = (target - m.state().current_frequency).abs();
    let mut depth_err = (target_depth - m.state().current_mod_depth).abs();
    for _ in 0..100 {
        let out = m.tick(0.0);
        assert_eq!(m.state().target_frequency, target);
        assert!(out.frequency <= target, "overshoot: {}", out.frequency);
        let e = (target - out.frequency).abs();
        assert!(e < err, "error did not shrink: {e} >= {err}");
        err = e;
        let de = (target_depth - out.mod_depth).abs();
        assert!(de < depth_err);
        depth_err = de;
    }
}

#[test]
fn idle_drives_targets_and_gain_to_rest_monotonically() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    for _ in 0..120 {
        m.tick(0.0);
    }
    assert!(m.state().base_gain > QUIET_GAIN);

    let mut prev = m.state().clone();
    for k in 0..600 {
        m.tick(1000.0 + k as f64 * 16.0);
        let s = m.state();
        assert!(s.target_frequency <= prev.target_frequency);
        assert!(s.target_frequency >= IDLE_FREQUENCY_HZ);
        assert!(s.target_mod_depth <= prev.target_mod_depth);
        assert!(s.target_mod_depth >= IDLE_MOD_DEPTH);
        assert!(s.base_gain <= prev.base_gain);
        assert!(s.base_gain >= QUIET_GAIN);
        prev = s.clone();
    }
    assert!((prev.target_frequency - IDLE_FREQUENCY_HZ).abs() < 0.01);
    assert!((prev.target_mod_depth - IDLE_MOD_DEPTH).abs() < 0.01);
    assert!((prev.base_gain - QUIET_GAIN).abs() < 1e-6);
}

#[test]
fn force_idle_then_tick_holds_quiet_gain_exactly() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    for i in 0..60 {
        m.tick(i as f64 * 16.0);
    }
    m.force_idle(5000.0);
    let out = m.tick(5000.0);
    assert_eq!(out.gain, QUIET_GAIN);
    assert_eq!(m.activity(), Activity::Held);
    assert_eq!(m.state().target_frequency, IDLE_FREQUENCY_HZ);
    assert_eq!(m.state().target_mod_depth, IDLE_MOD_DEPTH);
    assert_eq!(m.state().input_magnitude, 0.0);

    // still held well past the threshold
    let out = m.tick(5000.0 + IDLE_THRESHOLD_MS * 3.0);
    assert_eq!(out.gain, QUIET_GAIN);
    assert_eq!(m.activity(), Activity::Held);
}

#[test]
fn still_stimulus_releases_hold() {
    let mut m = machine();
    m.force_idle(500.0);
    m.tick(500.0);
    assert_eq!(m.activity(), Activity::Held);

    // an unchanged scroll offset is still a stimulus: zero speed, latch cleared
    let st = m.on_scroll(0.0, 16.0, 520.0);
    assert_eq!(st.speed, 0.0);
    assert_eq!(m.state().target_frequency, BASE_FREQUENCY_HZ);
    assert_eq!(m.state().target_mod_depth, 0.0);

    let out = m.tick(536.0);
    assert_eq!(m.activity(), Activity::Active);
    let expected = QUIET_GAIN + (ACTIVE_GAIN - QUIET_GAIN) * GAIN_ATTACK;
    assert!((out.gain - expected).abs() < 1e-12);
    assert!(out.gain > QUIET_GAIN);
}

#[test]
fn initial_gain_comes_from_config() {
    let mut cfg = ControlConfig::default();
    cfg.idle.initial_gain = 0.1;
    let m = ControlStateMachine::new(cfg);
    assert_eq!(m.state().base_gain, 0.1);
    assert_eq!(machine().state().base_gain, INITIAL_GAIN);
}

#[test]
fn forced_idle_switches_to_idle_smoothing() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    m.tick(0.0);
    let before = m.state().current_frequency;
    m.force_idle(10.0);
    let out = m.tick(10.0);
    let expected = before + (IDLE_FREQUENCY_HZ - before) * SMOOTHING_IDLE;
    assert!((out.frequency - expected).abs() < 1e-9);
}

#[test]
fn extreme_motion_is_clamped() {
    let mut m = machine();
    m.on_pointer_move(1.0e6, 1.0e6, 0.0, 0.0);
    assert_eq!(m.state().target_mod_depth, MAX_MOD_DEPTH);
    assert!(m.state().target_frequency.is_finite());

    let out = m.tick(0.0);
    assert!(out.mod_depth <= MAX_MOD_DEPTH);
    assert!((0.0..=1.0).contains(&out.gain));
}

#[test]
fn zero_and_negative_dt_are_floored() {
    let mut m = machine();
    let a = m.on_pointer_move(10.0, 0.0, 0.0, 0.0);
    let b = m.on_pointer_move(10.0, 0.0, -25.0, 0.0);
    let c = m.on_pointer_move(10.0, 0.0, MIN_DT_MS, 0.0);
    assert_eq!(a.speed, c.speed);
    assert_eq!(b.speed, c.speed);
    assert!(a.speed.is_finite());
}

#[test]
fn non_finite_motion_counts_as_still() {
    let mut m = machine();
    let st = m.on_pointer_move(f64::NAN, 3.0, 16.0, 0.0);
    assert_eq!(st.speed, 0.0);
    assert_eq!(st.direction, 0.0);
    assert_eq!(m.state().target_frequency, BASE_FREQUENCY_HZ);
}

#[test]
fn scroll_and_pointer_are_equivalent_channels() {
    let mut a = machine();
    let mut b = machine();
    a.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    let st = b.on_scroll(-100.0, 20.0, 0.0);
    assert_eq!(st.channel, InfluenceChannel::Scroll);
    assert_eq!(a.state().target_frequency, b.state().target_frequency);
    assert_eq!(a.state().target_mod_depth, b.state().target_mod_depth);
}

#[test]
fn most_recent_channel_wins() {
    let mut m = machine();
    m.on_pointer_move(100.0, 0.0, 20.0, 0.0);
    m.on_scroll(1.0, 50.0, 5.0);
    let speed = 1.0 / 50.0 * SPEED_SCALE;
    assert_eq!(
        m.state().target_frequency,
        BASE_FREQUENCY_HZ + speed * FREQUENCY_PER_SPEED
    );
    assert_eq!(
        m.last_stimulus().map(|s| s.channel),
        Some(InfluenceChannel::Scroll)
    );
    assert_eq!(m.state().last_input_ms, 5.0);
}

#[test]
fn scroll_position_biases_targets_each_tick() {
    let cfg = ControlConfig::default().with_scroll_position(ScrollPositionInfluence {
        weight: 0.5,
        frequency_span: 1000.0,
        mod_depth_span: 40.0,
    });
    let mut m = ControlStateMachine::new(cfg);
    m.set_scroll_position(Some(1.0));
    m.tick(0.0);
    assert!((m.state().target_frequency - 610.0).abs() < 1e-9);
    assert!((m.state().target_mod_depth - 70.0).abs() < 1e-9);

    // no bias while held after a forced idle
    m.force_idle(0.0);
    m.tick(0.0);
    assert_eq!(m.state().target_frequency, IDLE_FREQUENCY_HZ);
}

#[test]
fn scroll_position_without_influence_config_is_inert() {
    let mut m = machine();
    m.set_scroll_position(Some(1.0));
    m.tick(0.0);
    assert_eq!(m.state().target_frequency, IDLE_FREQUENCY_HZ);
}
