//! Page-lifetime context object.
//!
//! One `Session` exists per page. It is created by the page controller,
//! shared with the event handlers and the frame loop, and never torn down.

use crate::config::{ConfigError, ControlConfig};
use crate::constants::SCOPE_LEN;
use crate::control::{Activity, ControlOutput, ControlStateMachine, Stimulus};
use crate::engine::{SynthFrame, SynthesisEngine};
use crate::ghost::GhostWaveform;
use crate::input::{PointerTracker, ScrollTracker};
use crate::scale::ScaleTable;
use crate::scope::{AudioGate, ScopeFeed, ScopeFrame};
use glam::Vec2;

pub struct Session {
    control: ControlStateMachine,
    scale: ScaleTable,
    pointer: PointerTracker,
    scroll: ScrollTracker,
    scope: ScopeFeed,
    gate: AudioGate,
    wobble_phase: f64,
    last_output: Option<ControlOutput>,
}

impl Session {
    /// Session with the default scale, a `SCOPE_LEN` scope buffer and an
    /// entropy-seeded ghost generator. The input clock starts at 0 ms.
    pub fn new(config: ControlConfig) -> Result<Self, ConfigError> {
        Self::with_parts(
            config,
            ScaleTable::default(),
            ScopeFeed::new(SCOPE_LEN, GhostWaveform::from_entropy()),
        )
    }

    pub fn with_parts(
        config: ControlConfig,
        scale: ScaleTable,
        scope: ScopeFeed,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        log::info!(
            "[session] scale={} pitches scope={} samples scroll_bias={}",
            scale.len(),
            scope.len(),
            config.scroll_position.is_some()
        );
        Ok(Self {
            control: ControlStateMachine::new(config),
            scale,
            pointer: PointerTracker::new(0.0),
            scroll: ScrollTracker::new(0.0),
            scope,
            gate: AudioGate::Locked,
            wobble_phase: 0.0,
            last_output: None,
        })
    }

    #[inline]
    pub fn control(&self) -> &ControlStateMachine {
        &self.control
    }

    #[inline]
    pub fn scale(&self) -> &ScaleTable {
        &self.scale
    }

    #[inline]
    pub fn gate(&self) -> AudioGate {
        self.gate
    }

    #[inline]
    pub fn activity(&self) -> Activity {
        self.control.activity()
    }

    #[inline]
    pub fn last_output(&self) -> Option<ControlOutput> {
        self.last_output
    }

    pub fn pointer_moved(&mut self, pos: Vec2, now_ms: f64) -> Stimulus {
        let d = self.pointer.sample(pos, now_ms);
        self.control
            .on_pointer_move(d.delta.x as f64, d.delta.y as f64, d.dt_ms, now_ms)
    }

    pub fn scrolled(&mut self, offset: f64, now_ms: f64) -> Stimulus {
        let d = self.scroll.sample(offset, now_ms);
        self.control.on_scroll(d.delta, d.dt_ms, now_ms)
    }

    /// Normalized page position for the continuous scroll-position bias.
    pub fn set_scroll_position(&mut self, position: f64) {
        self.control.set_scroll_position(Some(position));
    }

    /// Blur, pointer leaving the page, or visibility change.
    pub fn force_idle(&mut self, now_ms: f64) {
        self.control.force_idle(now_ms);
        self.pointer.reset_clock(now_ms);
        self.scroll.reset_clock(now_ms);
    }

    /// Mark audio output as unlocked. Returns true the first time only.
    pub fn unlock(&mut self) -> bool {
        let changed = self.gate.unlock();
        if changed {
            log::info!("[session] audio unlocked, scope switches to live samples");
        }
        changed
    }

    /// Per-frame update: advance the control state, snap the carrier to the
    /// scale, add the wobble and push everything to `engine`.
    pub fn frame<E>(&mut self, now_ms: f64, engine: &mut E) -> SynthFrame
    where
        E: SynthesisEngine + ?Sized,
    {
        let out = self.control.tick(now_ms);
        self.last_output = Some(out);

        let wobble = &self.control.config().wobble;
        self.wobble_phase += wobble.step_per_frame;
        let vibrato = self.wobble_phase.sin() * wobble.depth_hz;
        let frame = SynthFrame {
            frequency_hz: self.scale.snap(out.frequency) + vibrato,
            mod_depth: out.mod_depth,
            gain: out.gain,
        };
        frame.push_to(engine, &self.control.config().ramps);
        frame
    }

    /// Samples for the scope this frame, ghost or live depending on the gate.
    pub fn scope<F>(&mut self, read_live: F) -> ScopeFrame<'_>
    where
        F: FnOnce(&mut [u8]),
    {
        self.scope.refresh(self.gate, read_live)
    }
}
