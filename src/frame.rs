use crate::audio::FmGraph;
use crate::render::ScopeRenderer;
use ambient_core::Session;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Monotonic page clock in milliseconds since init.
#[derive(Clone, Copy)]
pub struct Clock {
    origin: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    #[inline]
    pub fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

pub struct FrameContext {
    pub session: Rc<RefCell<Session>>,
    pub graph: Rc<RefCell<FmGraph>>,
    pub canvas: web::HtmlCanvasElement,
    pub renderer: ScopeRenderer,
    pub clock: Clock,
    pub frames: u64,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = self.clock.now_ms();
        let mut session = self.session.borrow_mut();
        let mut graph = self.graph.borrow_mut();

        let pushed = session.frame(now, &mut *graph);
        self.frames += 1;
        if self.frames % 600 == 0 {
            log::debug!(
                "[frame] {} activity={:?} f={:.1}Hz depth={:.1} gain={:.3}",
                self.frames,
                session.activity(),
                pushed.frequency_hz,
                pushed.mod_depth,
                pushed.gain
            );
        }

        let scope = session.scope(|buf| graph.read_live(buf));
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.renderer.draw(w, h, &scope);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
