use super::EventWiring;
use crate::dom;
use glam::Vec2;
use web_sys as web;

pub fn wire_pointer_handlers(w: &EventWiring, document: &web::Document) {
    wire_pointermove(w, document);
    wire_pointer_leave(w, document);
}

fn wire_pointermove(w: &EventWiring, document: &web::Document) {
    let w = w.clone();
    dom::listen(document, "pointermove", move |ev: web::PointerEvent| {
        let pos = Vec2::new(ev.client_x() as f32, ev.client_y() as f32);
        let now = w.clock.now_ms();
        w.session.borrow_mut().pointer_moved(pos, now);
    });
}

// Only a leave with no related target means the pointer left the page.
fn wire_pointer_leave(w: &EventWiring, document: &web::Document) {
    for event in ["mouseleave", "mouseout"] {
        let w = w.clone();
        dom::listen(document, event, move |ev: web::MouseEvent| {
            if ev.related_target().is_none() {
                w.force_idle("pointer left page");
            }
        });
    }
}
