use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use super::log_drawer;
use crate::dom_utils::{button, card, switch_row};
use crate::state::SettingsState;
use crate::views::{actions, fields};

pub fn render(document: &Document, state: &SettingsState) -> Result<Element, JsValue> {
    let card = card(document, "Privacy & Performance", "")?;

    let logging_row = switch_row(
        document,
        fields::ENABLE_LOGGING,
        "Enable Logging",
        "Log queries and responses for debugging",
        state.form.enable_logging,
    )?;
    card.append_child(&logging_row)?;

    let cache_row = switch_row(
        document,
        fields::ENABLE_CACHE,
        "Enable Caching",
        "Cache embeddings to improve performance",
        state.form.enable_cache,
    )?;
    card.append_child(&cache_row)?;

    let label = if state.logs_open { "Hide diagnostics" } else { "Show diagnostics" };
    let toggle = button(document, actions::TOGGLE_LOGS, label, "btn", false)?;
    card.append_child(&toggle)?;

    if state.logs_open {
        let clear = button(document, actions::CLEAR_LOGS, "Clear", "btn", false)?;
        card.append_child(&clear)?;
        let drawer = log_drawer::render(document)?;
        card.append_child(&drawer)?;
    }

    Ok(card)
}
