//! dom_utils.rs – small builders for the settings panel markup.
//!
//! Controls carry a `data-field` (inputs) or `data-action` (buttons)
//! attribute; the container listens once and maps those back to messages.

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlInputElement};

pub const FIELD_ATTR: &str = "data-field";
pub const ACTION_ATTR: &str = "data-action";

pub fn element(document: &Document, tag: &str, class: &str) -> Result<Element, JsValue> {
    let el = document.create_element(tag)?;
    if !class.is_empty() {
        el.set_class_name(class);
    }
    Ok(el)
}

/// Element with plain text content. Never parses markup.
pub fn text(document: &Document, tag: &str, class: &str, content: &str) -> Result<Element, JsValue> {
    let el = element(document, tag, class)?;
    el.set_text_content(Some(content));
    Ok(el)
}

/// `<section class="card">` headed by `title`.
pub fn card(document: &Document, title: &str, description: &str) -> Result<Element, JsValue> {
    let card = element(document, "section", "card")?;
    let heading = text(document, "h3", "card-title", title)?;
    card.append_child(&heading)?;
    if !description.is_empty() {
        let blurb = text(document, "p", "card-description", description)?;
        card.append_child(&blurb)?;
    }
    Ok(card)
}

/// Label plus control plus optional hint, stacked.
pub fn form_group(
    document: &Document,
    label: &str,
    control: &Element,
    hint: Option<&str>,
) -> Result<Element, JsValue> {
    let group = element(document, "div", "form-group")?;
    let label_el = text(document, "label", "form-label", label)?;
    if !control.id().is_empty() {
        label_el.set_attribute("for", &control.id())?;
    }
    group.append_child(&label_el)?;
    group.append_child(control)?;
    if let Some(hint) = hint {
        let hint_el = text(document, "p", "form-hint", hint)?;
        group.append_child(&hint_el)?;
    }
    Ok(group)
}

/// Text-like `<input>` bound to `field`.
pub fn input(
    document: &Document,
    field: &str,
    input_type: &str,
    value: &str,
    placeholder: &str,
) -> Result<HtmlInputElement, JsValue> {
    let input = document.create_element("input")?.dyn_into::<HtmlInputElement>()?;
    input.set_id(&format!("settings-{}", field));
    input.set_class_name("form-input");
    input.set_type(input_type);
    input.set_value(value);
    if !placeholder.is_empty() {
        input.set_placeholder(placeholder);
    }
    input.set_attribute(FIELD_ATTR, field)?;
    Ok(input)
}

/// Checkbox styled as a switch, bound to `field`.
pub fn switch(document: &Document, field: &str, checked: bool) -> Result<HtmlInputElement, JsValue> {
    let input = input(document, field, "checkbox", "", "")?;
    input.set_class_name("form-switch");
    input.set_checked(checked);
    Ok(input)
}

/// One row: text on the left, a switch on the right.
pub fn switch_row(
    document: &Document,
    field: &str,
    label: &str,
    hint: &str,
    checked: bool,
) -> Result<Element, JsValue> {
    let row = element(document, "div", "switch-row")?;
    let copy = element(document, "div", "switch-copy")?;
    let label_el = text(document, "label", "form-label", label)?;
    copy.append_child(&label_el)?;
    let hint_el = text(document, "p", "form-hint", hint)?;
    copy.append_child(&hint_el)?;
    row.append_child(&copy)?;
    let toggle = switch(document, field, checked)?;
    row.append_child(&toggle)?;
    Ok(row)
}

pub fn button(
    document: &Document,
    action: &str,
    label: &str,
    class: &str,
    disabled: bool,
) -> Result<HtmlButtonElement, JsValue> {
    let button = document.create_element("button")?.dyn_into::<HtmlButtonElement>()?;
    button.set_type("button");
    button.set_class_name(class);
    button.set_text_content(Some(label));
    button.set_disabled(disabled);
    button.set_attribute(ACTION_ATTR, action)?;
    Ok(button)
}

/// Ordered list of plain-text steps.
pub fn steps(document: &Document, items: &[String]) -> Result<Element, JsValue> {
    let list = element(document, "ol", "setup-steps")?;
    for item in items {
        let li = text(document, "li", "", item)?;
        list.append_child(&li)?;
    }
    Ok(list)
}

pub fn clear_children(el: &Element) -> Result<(), JsValue> {
    while let Some(child) = el.first_child() {
        el.remove_child(&child)?;
    }
    Ok(())
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn document() -> Document {
        web_sys::window().unwrap().document().unwrap()
    }

    #[wasm_bindgen_test]
    fn card_and_switch_row_nest_their_children() {
        let document = document();

        let card = card(&document, "Models", "Pick one").unwrap();
        assert_eq!(card.child_element_count(), 2);

        let row = switch_row(&document, "enable-cache", "Enable Caching", "hint", true).unwrap();
        let toggle = row
            .query_selector("[data-field='enable-cache']")
            .unwrap()
            .expect("switch")
            .dyn_into::<HtmlInputElement>()
            .unwrap();
        assert!(toggle.checked());
        assert_eq!(toggle.type_(), "checkbox");
    }

    #[wasm_bindgen_test]
    fn form_group_labels_its_control() {
        let document = document();
        let control = input(&document, "top-k", "number", "5", "").unwrap();

        let group = form_group(&document, "Top K Results", &control, Some("hint")).unwrap();

        let label = group.query_selector("label").unwrap().unwrap();
        assert_eq!(label.get_attribute("for").as_deref(), Some("settings-top-k"));
        assert_eq!(group.child_element_count(), 3);
    }
}
