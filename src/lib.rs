#![cfg(target_arch = "wasm32")]
use ambient_core::{ControlConfig, ScrollPositionInfluence, Session};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod overlay;
mod render;

use constants::*;

fn wire_canvas_resize(window: &web::Window, canvas: &web::HtmlCanvasElement) {
    dom::sync_canvas_backing_size(canvas);
    let canvas_resize = canvas.clone();
    dom::listen(window, "resize", move |_: web::Event| {
        dom::sync_canvas_backing_size(&canvas_resize);
    });
}

fn session_config() -> ControlConfig {
    ControlConfig::default().with_scroll_position(ScrollPositionInfluence {
        weight: SCROLL_POSITION_WEIGHT,
        frequency_span: SCROLL_FREQUENCY_SPAN,
        mod_depth_span: SCROLL_MOD_DEPTH_SPAN,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("ambient-web starting");

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas = dom::scope_canvas(&document, SCOPE_CANVAS_ID)?;
    wire_canvas_resize(&window, &canvas);
    let renderer = render::ScopeRenderer::new(&canvas)?;

    let clock = frame::Clock::start();
    let session = Session::new(session_config())?;

    // The context starts suspended; the first gesture resumes it.
    let audio_ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let graph = audio::FmGraph::build(&audio_ctx, session.control().state())?;

    let session = Rc::new(RefCell::new(session));
    let graph = Rc::new(RefCell::new(graph));
    session
        .borrow_mut()
        .set_scroll_position(dom::scroll_fraction(&window));

    let wiring = events::EventWiring {
        session: session.clone(),
        graph: graph.clone(),
        clock,
    };
    events::wire_pointer_handlers(&wiring, &document);
    events::wire_page_handlers(&wiring, &window, &document);
    events::wire_unlock_gestures(&wiring, &document);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        session,
        graph,
        canvas,
        renderer,
        clock,
        frames: 0,
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
