use crate::constants::*;
use ambient_core::ScopeFrame;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct ScopeRenderer {
    ctx: web::CanvasRenderingContext2d,
}

impl ScopeRenderer {
    pub fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        Ok(Self { ctx })
    }

    /// Stroke one frame of byte samples (128 = centre line) across the canvas.
    pub fn draw(&self, width: f64, height: f64, frame: &ScopeFrame<'_>) {
        let ctx = &self.ctx;
        ctx.clear_rect(0.0, 0.0, width, height);
        let samples = frame.samples;
        if samples.is_empty() {
            return;
        }

        ctx.save();
        ctx.set_line_width(SCOPE_LINE_WIDTH);
        let gradient = ctx.create_linear_gradient(0.0, 0.0, width, height);
        _ = gradient.add_color_stop(0.0, SCOPE_EDGE_COLOR);
        _ = gradient.add_color_stop(0.5, SCOPE_MID_COLOR);
        _ = gradient.add_color_stop(1.0, SCOPE_EDGE_COLOR);
        #[allow(deprecated)]
        ctx.set_stroke_style(&JsValue::from(gradient));

        let mid_y = height / 2.0;
        let vertical_scale = height * vertical_scale(frame.use_ghost());
        let slice_w = width / samples.len() as f64;

        ctx.begin_path();
        for (i, &s) in samples.iter().enumerate() {
            let x = i as f64 * slice_w;
            let y = mid_y + sample_offset(s) * vertical_scale;
            if i == 0 {
                ctx.move_to(x, y);
            } else {
                ctx.line_to(x, y);
            }
        }
        ctx.stroke();
        ctx.restore();
    }
}

#[inline]
fn vertical_scale(use_ghost: bool) -> f64 {
    if use_ghost {
        GHOST_VERTICAL_SCALE
    } else {
        LIVE_VERTICAL_SCALE
    }
}

// byte sample -> [-1, 1)
#[inline]
fn sample_offset(s: u8) -> f64 {
    (s as f64 - 128.0) / 128.0
}
