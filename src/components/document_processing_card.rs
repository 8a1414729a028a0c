use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom_utils::{card, element, form_group, input};
use crate::state::SettingsState;
use crate::views::fields;

pub fn render(document: &Document, state: &SettingsState) -> Result<Element, JsValue> {
    let card = card(
        document,
        "Document Processing",
        "Configure how documents are split and retrieved",
    )?;

    let grid = element(document, "div", "form-grid")?;
    for (field, label, value) in [
        (fields::CHUNK_SIZE, "Chunk Size", state.form.chunk_size),
        (fields::CHUNK_OVERLAP, "Chunk Overlap", state.form.chunk_overlap),
        (fields::TOP_K, "Top K Results", state.form.top_k),
    ] {
        let control = input(document, field, "number", &value.to_string(), "")?;
        control.set_min("0");
        let group = form_group(document, label, &control, None)?;
        grid.append_child(&group)?;
    }
    card.append_child(&grid)?;

    Ok(card)
}
