// DOM helpers shared by the components and page enhancements
use web_sys::{Document, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window()?.document()
}

/// Applies inline style properties; failures (read-only style) are ignored.
pub fn set_styles(el: &HtmlElement, props: &[(&str, &str)]) {
    let style = el.style();
    for (name, value) in props {
        let _ = style.set_property(name, value);
    }
}

pub fn set_page_scroll_locked(locked: bool) {
    let Some(body) = document().and_then(|d| d.body()) else {
        return;
    };
    if locked {
        set_styles(&body, &[("overflow", "hidden")]);
    } else {
        let _ = body.style().remove_property("overflow");
    }
}
