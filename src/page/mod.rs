//! Static-page enhancements that live outside the Yew tree.
//!
//! Each is installed once at startup and stays active for the page
//! lifetime; a missing element simply leaves that enhancement off.

pub mod nav;
pub mod reveal;
pub mod scroll;

use web_sys::{Document, Window};

pub fn install(window: &Window, document: &Document) {
    set_footer_year(document);
    scroll::install(document).forget();
    if let Err(err) = reveal::install(document) {
        tracing::warn!(?err, "reveal-on-scroll unavailable");
    }
    nav::install(window).forget();
    tracing::debug!("page enhancements installed");
}

pub fn set_footer_year(document: &Document) {
    if let Some(el) = document.get_element_by_id("year") {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
