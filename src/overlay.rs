use crate::constants::START_OVERLAY_ID;
use web_sys as web;

/// Hide the "tap to start" overlay once audio is unlocked.
#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(START_OVERLAY_ID) {
        let cl = el.class_list();
        _ = cl.add_1("hidden");
        // fallback for pages without the CSS class
        _ = el.set_attribute("style", "display:none");
    }
}
