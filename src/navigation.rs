//! Cross-page section navigation.
//!
//! The booking page cannot scroll the landing page directly, so it parks the
//! wanted section in a [`SectionSlot`] and routes to the landing page, which
//! picks the section up once when it mounts.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

pub const SECTION_SCROLL_DELAY_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Services,
    Pricing,
    HowItWorks,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Services,
        Section::Pricing,
        Section::HowItWorks,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Services => "services",
            Section::Pricing => "pricing",
            Section::HowItWorks => "how-it-works",
        }
    }

    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}

/// Single-entry mailbox shared between pages through context.
#[derive(Clone, Default)]
pub struct SectionSlot(Rc<RefCell<Option<Section>>>);

impl SectionSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self, section: Section) {
        *self.0.borrow_mut() = Some(section);
    }

    pub fn take(&self) -> Option<Section> {
        self.0.borrow_mut().take()
    }

    pub fn peek(&self) -> Option<Section> {
        *self.0.borrow()
    }
}

impl PartialEq for SectionSlot {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SectionRequest {
    NavigateToLanding(Section),
    ScrollInPage(String),
}

/// Known landing sections are parked in `slot`; anything else is only
/// scrolled to on the current page.
pub fn request_section(slot: &SectionSlot, id: &str) -> SectionRequest {
    match Section::from_id(id) {
        Some(section) => {
            slot.store(section);
            log::info!("Parking section '{}' for the landing page", id);
            SectionRequest::NavigateToLanding(section)
        }
        None => {
            log::info!("Scrolling to '{}' in page", id);
            SectionRequest::ScrollInPage(id.to_string())
        }
    }
}

pub fn scroll_to_section(id: &str) {
    let element = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id));

    if let Some(element) = element {
        let mut options = ScrollIntoViewOptions::new();
        options.behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    } else {
        log::debug!("No element '{}' to scroll to", id);
    }
}

/// Consumes the parked section on mount and scrolls to it once layout settles.
#[hook]
pub fn use_pending_section_scroll() {
    let slot = use_context::<SectionSlot>();

    use_effect_with_deps(
        move |_| {
            let pending = slot.and_then(|slot| slot.take()).map(|section| {
                log::info!("Scrolling to parked section '{}'", section.id());
                Timeout::new(SECTION_SCROLL_DELAY_MS, move || {
                    scroll_to_section(section.id());
                })
            });
            move || drop(pending)
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_id(section.id()), Some(section));
        }
        assert_eq!(Section::from_id("footer"), None);
        assert_eq!(Section::from_id("Services"), None);
    }

    #[test]
    fn known_section_is_parked_and_navigates() {
        let slot = SectionSlot::new();
        let request = request_section(&slot, "services");
        assert_eq!(request, SectionRequest::NavigateToLanding(Section::Services));
        assert_eq!(slot.peek(), Some(Section::Services));
    }

    #[test]
    fn unknown_id_only_scrolls() {
        let slot = SectionSlot::new();
        let request = request_section(&slot, "footer");
        assert_eq!(request, SectionRequest::ScrollInPage("footer".to_string()));
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn slot_is_consumed_once() {
        let slot = SectionSlot::new();
        let shared = slot.clone();
        request_section(&slot, "how-it-works");
        assert_eq!(shared.take(), Some(Section::HowItWorks));
        assert_eq!(shared.take(), None);
        assert_eq!(slot.peek(), None);
    }

    #[test]
    fn later_request_overwrites_parked_section() {
        let slot = SectionSlot::new();
        request_section(&slot, "home");
        request_section(&slot, "pricing");
        assert_eq!(slot.take(), Some(Section::Pricing));
    }

    #[test]
    fn slot_handles_compare_by_identity() {
        let slot = SectionSlot::new();
        assert!(slot == slot.clone());
        assert!(slot != SectionSlot::new());
    }
}
