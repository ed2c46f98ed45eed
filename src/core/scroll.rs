use std::cell::RefCell;
use std::rc::Rc;

use super::constants::SECTION_TRIGGER_FRACTION;

/// Page sections in document order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    About,
    Experience,
    Skills,
    Projects,
    Contact,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Hero,
        Section::About,
        Section::Experience,
        Section::Skills,
        Section::Projects,
        Section::Contact,
    ];

    /// The element id the host page gives this section.
    pub fn dom_id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Projects => "projects",
            Section::Contact => "contact",
        }
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::Hero
    }
}

/// Latest scroll-derived state, published whole so readers never see a
/// progress value paired with a stale section.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    pub progress: f32,
    pub section: Section,
}

/// Normalized page progress in [0, 1].
///
/// A page no taller than the viewport has nothing to scroll and reports
/// 0. Rubber-band overscroll clamps instead of escaping the range.
pub fn progress_from_metrics(scroll_top: f32, doc_height: f32, viewport_height: f32) -> f32 {
    let scrollable = doc_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable).clamp(0.0, 1.0)
}

/// Pick the active section from measured top edges (document order).
///
/// Scans bottom-up and takes the first section whose top has crossed the
/// viewport trigger line, so the lowest section that reached the middle
/// of the screen wins. When nothing has crossed yet (or `tops` is empty
/// because no section ids exist) the previous value is retained.
pub fn active_section(tops: &[(Section, f32)], viewport_height: f32, previous: Section) -> Section {
    let trigger = viewport_height * SECTION_TRIGGER_FRACTION;
    for &(section, top) in tops.iter().rev() {
        if top <= trigger {
            return section;
        }
    }
    previous
}

/// Where the frame loop gets its scroll input. The loop polls once per
/// frame; values published between frames are simply superseded.
pub trait ScrollSource {
    fn current(&self) -> ScrollState;
}

/// Single-threaded shared cell bridging the DOM listener (writer) and
/// the frame loop (reader).
#[derive(Clone, Default)]
pub struct SharedScroll {
    state: Rc<RefCell<ScrollState>>,
}

impl SharedScroll {
    pub fn publish(&self, next: ScrollState) {
        *self.state.borrow_mut() = next;
    }
}

impl ScrollSource for SharedScroll {
    fn current(&self) -> ScrollState {
        *self.state.borrow()
    }
}
