// Fade-in of page blocks as they scroll into view
use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::util::set_styles;

pub const REVEAL_SELECTOR: &str =
    ".section-header, .featured-item, .gallery-item, .skill-column, .about-grid, .contact-card";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -100px 0px";

const HIDDEN: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
];
const SHOWN: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Hides every matching element present now and reveals each the first
/// time it intersects the viewport.
pub fn install(document: &Document) -> Result<(), JsValue> {
    let on_intersect = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                if let Ok(el) = entry.target().dyn_into::<HtmlElement>() {
                    set_styles(&el, SHOWN);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(THRESHOLD));
    options.set_root_margin(ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(on_intersect.as_ref().unchecked_ref(), &options)?;
    // The observer lives as long as the page.
    on_intersect.forget();

    let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
    let mut observed = 0;
    for i in 0..nodes.length() {
        let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
            continue;
        };
        set_styles(&el, HIDDEN);
        observer.observe(&el);
        observed += 1;
    }
    tracing::debug!(observed, "reveal-on-scroll observing");
    Ok(())
}
