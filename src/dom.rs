use smallvec::SmallVec;
use web_sys as web;

use crate::core::Section;

/// Page measurements the scroll tracker needs, taken in one pass so the
/// derived pair is internally consistent.
#[derive(Clone, Copy, Debug, Default)]
pub struct PageMetrics {
    pub scroll_top: f32,
    pub doc_height: f32,
    pub viewport_height: f32,
}

/// Match the canvas backing store to its CSS size at the device pixel
/// ratio. Never lets either dimension hit zero.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

/// Read scroll position and page extents. `None` when the browser
/// withholds a measurement (detached document, teardown).
pub fn page_metrics(window: &web::Window, document: &web::Document) -> Option<PageMetrics> {
    let scroll_top = window.scroll_y().ok()? as f32;
    let viewport_height = window.inner_height().ok()?.as_f64()? as f32;
    let doc_height = document.document_element()?.scroll_height() as f32;
    Some(PageMetrics {
        scroll_top,
        doc_height,
        viewport_height,
    })
}

/// Viewport-relative top edges of the section elements present in the
/// DOM, in document order. Sections the host page does not render are
/// skipped, not errors.
pub fn section_tops(document: &web::Document) -> SmallVec<[(Section, f32); 8]> {
    let mut tops = SmallVec::new();
    for section in Section::ALL {
        if let Some(el) = document.get_element_by_id(section.dom_id()) {
            tops.push((section, el.get_bounding_client_rect().top() as f32));
        }
    }
    tops
}
