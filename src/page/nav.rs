// Active navigation link highlighting
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

pub const SECTION_OFFSET_PX: f64 = 150.0;
pub const ACTIVE_COLOR: &str = "var(--accent-blue)";

#[derive(Debug, Clone, PartialEq)]
pub struct SectionSpan {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

/// Id of the last section whose shifted span contains `scroll_y`.
pub fn current_section(scroll_y: f64, sections: &[SectionSpan]) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| {
            let top = s.top - SECTION_OFFSET_PX;
            scroll_y >= top && scroll_y < top + s.height
        })
        .map(|s| s.id.as_str())
}

/// Href of the link to color. With no current section this is the bare
/// `#` link, so the top of the page lights up "Home".
pub fn active_href(current: Option<&str>) -> String {
    format!("#{}", current.unwrap_or(""))
}

fn elements(document: &Document, selector: &str) -> Vec<HtmlElement> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect()
}

fn highlight(window: &Window) {
    let Some(document) = window.document() else {
        return;
    };
    let sections: Vec<SectionSpan> = elements(&document, "section[id]")
        .into_iter()
        .map(|el| SectionSpan {
            id: el.id(),
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
        .collect();
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    let active = active_href(current_section(scroll_y, &sections));

    for link in elements(&document, ".nav-links a") {
        let style = link.style();
        let _ = style.remove_property("color");
        if link.get_attribute("href").as_deref() == Some(active.as_str()) {
            let _ = style.set_property("color", ACTIVE_COLOR);
        }
    }
}

pub fn install(window: &Window) -> EventListener {
    let win = window.clone();
    EventListener::new(window, "scroll", move |_| highlight(&win))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans() -> Vec<SectionSpan> {
        vec![
            SectionSpan { id: "work".into(), top: 600.0, height: 800.0 },
            SectionSpan { id: "about".into(), top: 1400.0, height: 500.0 },
            SectionSpan { id: "contact".into(), top: 1900.0, height: 300.0 },
        ]
    }

    #[test]
    fn section_is_chosen_ahead_of_its_top() {
        let s = spans();
        assert_eq!(current_section(0.0, &s), None);
        assert_eq!(current_section(450.0, &s), Some("work"));
        assert_eq!(current_section(1249.0, &s), Some("work"));
        assert_eq!(current_section(1250.0, &s), Some("about"));
        assert_eq!(current_section(2049.0, &s), Some("contact"));
        assert_eq!(current_section(2050.0, &s), None);
    }

    #[test]
    fn top_of_page_targets_the_home_link() {
        let s = spans();
        assert_eq!(active_href(current_section(0.0, &s)), "#");
        assert_eq!(active_href(current_section(2050.0, &s)), "#");
        assert_eq!(active_href(current_section(450.0, &s)), "#work");
    }

    #[test]
    fn overlapping_sections_prefer_the_later_one() {
        let s = vec![
            SectionSpan { id: "hero".into(), top: 0.0, height: 1000.0 },
            SectionSpan { id: "work".into(), top: 500.0, height: 400.0 },
        ];
        assert_eq!(current_section(400.0, &s), Some("work"));
    }
}
