// Smooth scrolling for in-page anchors
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Clearance left above a scrolled-to section for the fixed header.
pub const ANCHOR_OFFSET_PX: f64 = 100.0;

pub fn anchor_scroll_top(offset_top: f64) -> f64 {
    offset_top - ANCHOR_OFFSET_PX
}

fn smooth_scroll_to(top: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// One delegated click handler covers anchors rendered after startup too.
pub fn install(document: &Document) -> EventListener {
    let doc = document.clone();
    EventListener::new_with_options(
        document,
        "click",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(anchor) = event
                .target()
                .and_then(|t| t.dyn_into::<Element>().ok())
                .and_then(|el| el.closest("a[href^=\"#\"]").ok().flatten())
            else {
                return;
            };
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            if href == "#" {
                event.prevent_default();
                smooth_scroll_to(0.0);
                return;
            }
            // Unknown or unparsable targets keep the browser's default jump.
            let target = doc
                .query_selector(&href)
                .ok()
                .flatten()
                .and_then(|t| t.dyn_into::<HtmlElement>().ok());
            if let Some(target) = target {
                event.prevent_default();
                smooth_scroll_to(anchor_scroll_top(target.offset_top() as f64));
            }
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_sits_below_the_header() {
        assert_eq!(anchor_scroll_top(640.0), 540.0);
        assert_eq!(anchor_scroll_top(40.0), -60.0);
    }
}
