use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::dom_utils::{card, element, form_group, FIELD_ATTR};
use crate::state::SettingsState;
use crate::utils::model_label;
use crate::views::fields;

/// `<select>` bound to `field`, with `selected` marked.
pub fn select(
    document: &Document,
    field: &str,
    choices: &[String],
    selected: &str,
    sizes: &HashMap<String, u64>,
) -> Result<Element, JsValue> {
    let select_el = element(document, "select", "form-select")?;
    select_el.set_id(&format!("settings-{}", field));
    select_el.set_attribute(FIELD_ATTR, field)?;

    for name in choices {
        let option = document.create_element("option")?;
        option.set_attribute("value", name)?;
        if name == selected {
            option.set_attribute("selected", "selected")?;
        }
        option.set_text_content(Some(&model_label(name, sizes.get(name).copied())));
        select_el.append_child(&option)?;
    }

    Ok(select_el)
}

/// "Model Settings" card with the embedding and LLM pickers.
pub fn render(document: &Document, state: &SettingsState) -> Result<Element, JsValue> {
    let card = card(
        document,
        "Model Settings",
        "Choose the models used for embeddings and generation",
    )?;

    let embedding = select(
        document,
        fields::EMBEDDING_MODEL,
        &state.embedding_models,
        &state.form.embedding_model,
        &state.model_sizes,
    )?;
    let embedding_group = form_group(
        document,
        "Embedding Model",
        &embedding,
        Some("Used to embed documents and queries"),
    )?;
    card.append_child(&embedding_group)?;

    let llm = select(
        document,
        fields::LLM_MODEL,
        &state.llm_models,
        &state.form.llm_model,
        &state.model_sizes,
    )?;
    let llm_group = form_group(
        document,
        "Language Model",
        &llm,
        Some("Used to generate answers"),
    )?;
    card.append_child(&llm_group)?;

    Ok(card)
}
