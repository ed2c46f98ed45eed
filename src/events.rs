use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

use crate::core::{active_section, progress_from_metrics, ScrollSource, ScrollState, SharedScroll};
use crate::dom;

/// Measure the page and publish a fresh `ScrollState`. Skips silently
/// when the DOM is mid-teardown and a measurement is unavailable.
fn publish_current(shared: &SharedScroll) {
    let window = match web::window() {
        Some(w) => w,
        None => return,
    };
    let document = match window.document() {
        Some(d) => d,
        None => return,
    };
    let metrics = match dom::page_metrics(&window, &document) {
        Some(m) => m,
        None => return,
    };
    let tops = dom::section_tops(&document);

    let before = shared.current();
    let progress =
        progress_from_metrics(metrics.scroll_top, metrics.doc_height, metrics.viewport_height);
    let section = active_section(&tops, metrics.viewport_height, before.section);
    if section != before.section {
        log::debug!("[scroll] section {:?} -> {:?}", before.section, section);
    }
    shared.publish(ScrollState { progress, section });
}

/// Wire the scroll and resize listeners and prime the shared state once
/// so the first frame already sees real values.
///
/// The scroll listener is registered passive: this crate only reads the
/// page, it never calls preventDefault or otherwise blocks scrolling.
pub fn wire_scroll(window: &web::Window, shared: &SharedScroll) -> Result<(), JsValue> {
    publish_current(shared);

    let on_scroll = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move || publish_current(&shared)) as Box<dyn FnMut()>)
    };
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &opts,
    )?;
    on_scroll.forget();

    // Resizing moves section edges and changes the scrollable height, so
    // the pair is re-derived there too.
    let on_resize = {
        let shared = shared.clone();
        Closure::wrap(Box::new(move || publish_current(&shared)) as Box<dyn FnMut()>)
    };
    window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
    on_resize.forget();

    Ok(())
}
