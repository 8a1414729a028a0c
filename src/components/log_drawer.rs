use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::dom_utils::{element, text};
use crate::logging::{self, Level};

fn line_class(level: Level) -> &'static str {
    match level {
        Level::Error => "log-line log-error",
        Level::Warn => "log-line log-warn",
        Level::Debug => "log-line",
    }
}

/// Recent diagnostic lines, newest at the bottom.
pub fn render(document: &Document) -> Result<Element, JsValue> {
    let drawer = element(document, "div", "log-drawer")?;
    drawer.set_id("log-drawer");

    let lines = logging::recent();
    if lines.is_empty() {
        let empty = text(document, "div", "log-line", "No diagnostics yet.")?;
        drawer.append_child(&empty)?;
    }
    for line in lines {
        let row = text(
            document,
            "div",
            line_class(line.level),
            &format!("[{}] {}", line.level.as_str(), line.text),
        )?;
        drawer.append_child(&row)?;
    }

    Ok(drawer)
}

/// Scroll to the newest line; only meaningful once the drawer is attached.
pub fn scroll_to_bottom(document: &Document) {
    if let Some(drawer) = document.get_element_by_id("log-drawer") {
        if let Some(html_el) = drawer.dyn_ref::<web_sys::HtmlElement>() {
            html_el.set_scroll_top(html_el.scroll_height());
        }
    }
}
