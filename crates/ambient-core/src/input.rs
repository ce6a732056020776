//! Turns absolute pointer positions and scroll offsets into deltas.

use glam::Vec2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerDelta {
    pub delta: Vec2,
    pub dt_ms: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollDelta {
    pub delta: f64,
    pub dt_ms: f64,
}

/// Remembers the previous pointer sample. The first sample reports zero
/// motion rather than a jump from the origin.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    last_pos: Option<Vec2>,
    last_ms: f64,
}

impl PointerTracker {
    pub fn new(origin_ms: f64) -> Self {
        Self {
            last_pos: None,
            last_ms: origin_ms,
        }
    }

    pub fn sample(&mut self, pos: Vec2, now_ms: f64) -> PointerDelta {
        let delta = match self.last_pos {
            Some(prev) if pos.is_finite() => pos - prev,
            _ => Vec2::ZERO,
        };
        let dt_ms = now_ms - self.last_ms;
        if pos.is_finite() {
            self.last_pos = Some(pos);
        }
        self.last_ms = now_ms;
        PointerDelta { delta, dt_ms }
    }

    /// Restart timing so the next sample does not see the gap as motion.
    #[inline]
    pub fn reset_clock(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }

    #[inline]
    pub fn last_position(&self) -> Option<Vec2> {
        self.last_pos
    }
}

#[derive(Clone, Debug, Default)]
pub struct ScrollTracker {
    last_offset: Option<f64>,
    last_ms: f64,
}

impl ScrollTracker {
    pub fn new(origin_ms: f64) -> Self {
        Self {
            last_offset: None,
            last_ms: origin_ms,
        }
    }

    pub fn sample(&mut self, offset: f64, now_ms: f64) -> ScrollDelta {
        let delta = match self.last_offset {
            Some(prev) if offset.is_finite() => offset - prev,
            _ => 0.0,
        };
        let dt_ms = now_ms - self.last_ms;
        if offset.is_finite() {
            self.last_offset = Some(offset);
        }
        self.last_ms = now_ms;
        ScrollDelta { delta, dt_ms }
    }

    #[inline]
    pub fn reset_clock(&mut self, now_ms: f64) {
        self.last_ms = now_ms;
    }
}

/// Scroll offset as a fraction of the scrollable range, clamped to [0, 1].
/// Pages that cannot scroll report 0.
#[inline]
pub fn normalized_scroll(offset: f64, content_height: f64, viewport_height: f64) -> f64 {
    let range = content_height - viewport_height;
    if !(range.is_finite() && range > 0.0) || !offset.is_finite() {
        return 0.0;
    }
    (offset / range).clamp(0.0, 1.0)
}
