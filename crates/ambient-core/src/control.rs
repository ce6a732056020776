//! Control state machine: raw input events in, smoothed synthesis parameters out.
//!
//! Input handlers only move *targets*. The per-frame [`ControlStateMachine::tick`]
//! chases the targets with multiplicative smoothing, decays them back to rest
//! once input stops, and hands back the triple pushed to the synthesis engine.
//! Handlers and ticks run on one thread, strictly interleaved, so an event
//! between two ticks only shows up in the next tick.

use crate::config::ControlConfig;

/// Named stimulus source. Every channel drives the same targets; the most
/// recently applied stimulus wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InfluenceChannel {
    Pointer,
    Scroll,
}

/// One measured input event after velocity conversion.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stimulus {
    pub channel: InfluenceChannel,
    pub speed: f64,
    /// Signed horizontal (pointer) or vertical (scroll) rate, px per ms.
    pub direction: f64,
    pub at_ms: f64,
}

/// Regime chosen by a tick. `Active` and `Idle` are recomputed from elapsed
/// time on every tick; `Held` latches after a forced idle and clears on the
/// next stimulus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activity {
    Active,
    Idle,
    Held,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ControlState {
    pub current_frequency: f64,
    pub target_frequency: f64,
    pub current_mod_depth: f64,
    pub target_mod_depth: f64,
    pub base_gain: f64,
    pub last_input_ms: f64,
    pub input_magnitude: f64,
}

impl ControlState {
    fn at_rest(config: &ControlConfig) -> Self {
        let idle = &config.idle;
        Self {
            current_frequency: idle.idle_frequency,
            target_frequency: idle.idle_frequency,
            current_mod_depth: idle.idle_mod_depth,
            target_mod_depth: idle.idle_mod_depth,
            base_gain: idle.initial_gain.clamp(0.0, 1.0),
            last_input_ms: 0.0,
            input_magnitude: 0.0,
        }
    }
}

/// Values handed to the synthesis engine after a tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControlOutput {
    pub frequency: f64,
    pub mod_depth: f64,
    pub gain: f64,
}

pub struct ControlStateMachine {
    config: ControlConfig,
    state: ControlState,
    held: bool,
    scroll_position: Option<f64>,
    last_stimulus: Option<Stimulus>,
    activity: Activity,
}

#[inline]
fn approach(value: &mut f64, target: f64, coefficient: f64) {
    *value += (target - *value) * coefficient;
}

impl ControlStateMachine {
    /// Starts at rest with the input clock at 0 ms.
    pub fn new(config: ControlConfig) -> Self {
        let state = ControlState::at_rest(&config);
        Self {
            config,
            state,
            held: false,
            scroll_position: None,
            last_stimulus: None,
            activity: Activity::Active,
        }
    }

    #[inline]
    pub fn state(&self) -> &ControlState {
        &self.state
    }

    #[inline]
    pub fn config(&self) -> &ControlConfig {
        &self.config
    }

    /// Regime chosen by the most recent tick.
    #[inline]
    pub fn activity(&self) -> Activity {
        self.activity
    }

    #[inline]
    pub fn last_stimulus(&self) -> Option<Stimulus> {
        self.last_stimulus
    }

    pub fn on_pointer_move(&mut self, dx: f64, dy: f64, dt_ms: f64, now_ms: f64) -> Stimulus {
        let m = &self.config.motion;
        let dt = m.floor_dt(dt_ms);
        let distance = (dx * dx + dy * dy).sqrt();
        let direction = if dx.is_finite() { dx / dt } else { 0.0 };
        let stimulus = Stimulus {
            channel: InfluenceChannel::Pointer,
            speed: m.speed(distance, dt),
            direction,
            at_ms: now_ms,
        };
        self.apply(stimulus);
        stimulus
    }

    pub fn on_scroll(&mut self, scroll_delta: f64, dt_ms: f64, now_ms: f64) -> Stimulus {
        let m = &self.config.motion;
        let dt = m.floor_dt(dt_ms);
        let direction = if scroll_delta.is_finite() {
            scroll_delta / dt
        } else {
            0.0
        };
        let stimulus = Stimulus {
            channel: InfluenceChannel::Scroll,
            speed: m.speed(scroll_delta, dt),
            direction,
            at_ms: now_ms,
        };
        self.apply(stimulus);
        stimulus
    }

    /// Last-writer-wins merge of a stimulus into the shared targets.
    pub fn apply(&mut self, stimulus: Stimulus) {
        let (frequency, depth) = self.config.motion.targets(stimulus.speed);
        let s = &mut self.state;
        s.target_frequency = frequency;
        s.target_mod_depth = depth;
        s.input_magnitude = stimulus.speed;
        s.last_input_ms = stimulus.at_ms;
        self.held = false;
        self.last_stimulus = Some(stimulus);
    }

    /// Immediate switch to rest values. Gain drops to quiet without smoothing
    /// and stays there until the next stimulus.
    pub fn force_idle(&mut self, now_ms: f64) {
        let idle = &self.config.idle;
        let s = &mut self.state;
        s.target_frequency = idle.idle_frequency;
        s.target_mod_depth = idle.idle_mod_depth;
        s.base_gain = idle.quiet_gain;
        s.last_input_ms = now_ms;
        s.input_magnitude = 0.0;
        self.held = true;
        log::info!("[control] forced idle at {:.0}ms", now_ms);
    }

    /// Normalized page position in [0, 1]; `None` removes the bias.
    pub fn set_scroll_position(&mut self, position: Option<f64>) {
        self.scroll_position = position
            .filter(|p| p.is_finite())
            .map(|p| p.clamp(0.0, 1.0));
    }

    #[inline]
    pub fn scroll_position(&self) -> Option<f64> {
        self.scroll_position
    }

    pub fn tick(&mut self, now_ms: f64) -> ControlOutput {
        let idle = &self.config.idle;
        let s = &mut self.state;

        let smoothing = if s.input_magnitude > 0.0 {
            idle.smoothing_active
        } else {
            idle.smoothing_idle
        };
        approach(&mut s.current_frequency, s.target_frequency, smoothing);
        approach(&mut s.current_mod_depth, s.target_mod_depth, smoothing);

        let idle_elapsed = now_ms - s.last_input_ms;
        let activity = if self.held {
            Activity::Held
        } else if idle_elapsed > idle.idle_threshold_ms {
            Activity::Idle
        } else {
            Activity::Active
        };
        match activity {
            Activity::Held => s.base_gain = idle.quiet_gain,
            Activity::Idle => {
                approach(&mut s.target_frequency, idle.idle_frequency, idle.idle_decay);
                approach(&mut s.target_mod_depth, idle.idle_mod_depth, idle.idle_decay);
                approach(&mut s.base_gain, idle.quiet_gain, idle.gain_release);
            }
            Activity::Active => approach(&mut s.base_gain, idle.active_gain, idle.gain_attack),
        }

        if activity != Activity::Held {
            if let (Some(bias), Some(p)) = (&self.config.scroll_position, self.scroll_position) {
                let frequency = idle.idle_frequency + p * bias.frequency_span;
                let depth = idle.idle_mod_depth + p * bias.mod_depth_span;
                approach(&mut s.target_frequency, frequency, bias.weight);
                approach(&mut s.target_mod_depth, depth, bias.weight);
            }
        }

        s.target_mod_depth = s
            .target_mod_depth
            .clamp(0.0, self.config.motion.max_mod_depth);
        s.base_gain = s.base_gain.clamp(0.0, 1.0);

        if activity != self.activity {
            log::debug!("[control] {:?} -> {:?}", self.activity, activity);
            self.activity = activity;
        }

        ControlOutput {
            frequency: s.current_frequency,
            mod_depth: s.current_mod_depth,
            gain: s.base_gain,
        }
    }
}
