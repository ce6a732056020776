use super::EventWiring;
use crate::{dom, overlay};
use web_sys as web;

pub fn wire_page_handlers(w: &EventWiring, window: &web::Window, document: &web::Document) {
    wire_scroll(w, window);
    wire_visibility(w, document);
    wire_blur(w, window);
}

fn wire_scroll(w: &EventWiring, window: &web::Window) {
    let w = w.clone();
    let win = window.clone();
    dom::listen(window, "scroll", move |_: web::Event| {
        let offset = win.scroll_y().unwrap_or(0.0);
        let now = w.clock.now_ms();
        let mut session = w.session.borrow_mut();
        session.scrolled(offset, now);
        session.set_scroll_position(dom::scroll_fraction(&win));
    });
}

// Hidden tabs suspend audio; either way stale velocity is dropped.
fn wire_visibility(w: &EventWiring, document: &web::Document) {
    let w = w.clone();
    let doc = document.clone();
    dom::listen(document, "visibilitychange", move |_: web::Event| {
        if doc.hidden() {
            w.graph.borrow().suspend();
        } else if w.session.borrow().gate().is_unlocked() {
            w.graph.borrow().resume();
        }
        w.force_idle("visibility change");
    });
}

fn wire_blur(w: &EventWiring, window: &web::Window) {
    let w = w.clone();
    dom::listen(window, "blur", move |_: web::Event| {
        w.force_idle("window blur");
    });
}

/// First click or touch resumes audio, starts the oscillators and switches
/// the scope to live samples. Later gestures do nothing.
pub fn wire_unlock_gestures(w: &EventWiring, document: &web::Document) {
    for event in ["click", "touchstart"] {
        let w = w.clone();
        let doc = document.clone();
        dom::listen(document, event, move |_: web::Event| {
            if !w.session.borrow_mut().unlock() {
                return;
            }
            let mut graph = w.graph.borrow_mut();
            graph.resume();
            graph.start();
            overlay::hide(&doc);
        });
    }
}
