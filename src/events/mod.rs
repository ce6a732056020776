use crate::audio::FmGraph;
use crate::frame::Clock;
use ambient_core::Session;
use std::cell::RefCell;
use std::rc::Rc;

mod page;
mod pointer;

pub use page::{wire_page_handlers, wire_unlock_gestures};
pub use pointer::wire_pointer_handlers;

/// Handles shared by every listener. Handlers run on the page thread,
/// interleaved with frames, so a `RefCell` borrow never overlaps a tick.
#[derive(Clone)]
pub struct EventWiring {
    pub session: Rc<RefCell<Session>>,
    pub graph: Rc<RefCell<FmGraph>>,
    pub clock: Clock,
}

impl EventWiring {
    fn force_idle(&self, reason: &str) {
        let now = self.clock.now_ms();
        log::debug!("[events] {} -> idle", reason);
        self.session.borrow_mut().force_idle(now);
    }
}
