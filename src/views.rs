// src/views.rs
//
// Panel container, delegated event wiring and the render pass.
//
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlInputElement, HtmlSelectElement};

use crate::components;
use crate::dom_utils::{self, ACTION_ATTR, FIELD_ATTR};
use crate::messages::Message;
use crate::state::{dispatch, with_state};

pub const CONTAINER_ID: &str = "rag-settings";
const STYLES_ID: &str = "rag-settings-styles";

/// `data-field` values of the panel's controls.
pub mod fields {
    pub const OLLAMA_URL: &str = "ollama-url";
    pub const TUNNEL_URL: &str = "tunnel-url";
    pub const AUTO_DETECT: &str = "auto-detect";
    pub const EMBEDDING_MODEL: &str = "embedding-model";
    pub const LLM_MODEL: &str = "llm-model";
    pub const CHUNK_SIZE: &str = "chunk-size";
    pub const CHUNK_OVERLAP: &str = "chunk-overlap";
    pub const TOP_K: &str = "top-k";
    pub const ENABLE_LOGGING: &str = "enable-logging";
    pub const ENABLE_CACHE: &str = "enable-cache";
}

/// `data-action` values of the panel's buttons.
pub mod actions {
    pub const TEST_CONNECTION: &str = "test-connection";
    pub const TOGGLE_LOGS: &str = "toggle-logs";
    pub const CLEAR_LOGS: &str = "clear-logs";
    pub const SAVE: &str = "save";
}

/// Message for a committed `change` on a bound control.
pub fn message_for_field(field: &str, value: String, checked: bool) -> Option<Message> {
    let msg = match field {
        fields::OLLAMA_URL => Message::OllamaUrlEdited(value),
        fields::TUNNEL_URL => Message::TunnelUrlEdited(value),
        fields::AUTO_DETECT => Message::AutoDetectToggled(checked),
        fields::EMBEDDING_MODEL => Message::EmbeddingModelSelected(value),
        fields::LLM_MODEL => Message::LlmModelSelected(value),
        fields::CHUNK_SIZE => Message::ChunkSizeEdited(value),
        fields::CHUNK_OVERLAP => Message::ChunkOverlapEdited(value),
        fields::TOP_K => Message::TopKEdited(value),
        fields::ENABLE_LOGGING => Message::LoggingToggled(checked),
        fields::ENABLE_CACHE => Message::CacheToggled(checked),
        _ => return None,
    };
    Some(msg)
}

pub fn message_for_action(action: &str) -> Option<Message> {
    match action {
        actions::TEST_CONNECTION => Some(Message::TestConnectionRequested),
        actions::TOGGLE_LOGS => Some(Message::ToggleLogDrawer),
        actions::CLEAR_LOGS => Some(Message::ClearLogs),
        actions::SAVE => Some(Message::SaveRequested),
        _ => None,
    }
}

/// Delegated listeners of one mounted container. Dropping them detaches
/// the callbacks, so they must not outlive the container.
pub struct Listeners {
    _change: Closure<dyn FnMut(Event)>,
    _click: Closure<dyn FnMut(Event)>,
}

/// Create a fresh panel container inside `#app-container`, or the body when
/// the host page has none, and attach the delegated listeners. Any previous
/// container is removed first.
pub fn mount_container(document: &Document) -> Result<Listeners, JsValue> {
    remove_container(document)?;
    ensure_styles(document)?;

    let container = dom_utils::element(document, "div", "settings-container")?;
    container.set_id(CONTAINER_ID);

    let parent: Element = match document.get_element_by_id("app-container") {
        Some(el) => el,
        None => document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?
            .into(),
    };
    parent.append_child(&container)?;

    // Text inputs report on commit (blur / enter) so re-rendering never
    // steals focus mid-typing.
    let change_handler = Closure::wrap(Box::new(move |event: Event| {
        if let Some(msg) = message_for_change(&event) {
            dispatch(msg);
        }
    }) as Box<dyn FnMut(_)>);
    container.add_event_listener_with_callback("change", change_handler.as_ref().unchecked_ref())?;

    let click_handler = Closure::wrap(Box::new(move |event: Event| {
        let action = event
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(|el| el.closest(&format!("[{}]", ACTION_ATTR)).ok().flatten())
            .and_then(|el| el.get_attribute(ACTION_ATTR));
        if let Some(msg) = action.as_deref().and_then(message_for_action) {
            dispatch(msg);
        }
    }) as Box<dyn FnMut(_)>);
    container.add_event_listener_with_callback("click", click_handler.as_ref().unchecked_ref())?;

    Ok(Listeners {
        _change: change_handler,
        _click: click_handler,
    })
}

pub fn remove_container(document: &Document) -> Result<(), JsValue> {
    if let Some(container) = document.get_element_by_id(CONTAINER_ID) {
        container.remove();
    }
    Ok(())
}

fn message_for_change(event: &Event) -> Option<Message> {
    let target = event.target()?;
    let el = target.dyn_ref::<Element>()?;
    let field = el.get_attribute(FIELD_ATTR)?;

    if let Some(input) = el.dyn_ref::<HtmlInputElement>() {
        message_for_field(&field, input.value(), input.checked())
    } else if let Some(select) = el.dyn_ref::<HtmlSelectElement>() {
        message_for_field(&field, select.value(), false)
    } else {
        None
    }
}

/// Redraw the panel from the mounted state. No-op once unmounted.
pub fn render(document: &Document) -> Result<(), JsValue> {
    let container = match document.get_element_by_id(CONTAINER_ID) {
        Some(el) => el,
        None => return Ok(()),
    };

    with_state(|state| -> Result<(), JsValue> {
        dom_utils::clear_children(&container)?;

        let title = dom_utils::text(document, "h2", "settings-title", "Settings")?;
        container.append_child(&title)?;
        let connection = components::ollama_config_card::render(document, state)?;
        container.append_child(&connection)?;
        let models = components::model_selector::render(document, state)?;
        container.append_child(&models)?;
        let processing = components::document_processing_card::render(document, state)?;
        container.append_child(&processing)?;
        let privacy = components::privacy_card::render(document, state)?;
        container.append_child(&privacy)?;

        let footer = dom_utils::element(document, "div", "settings-footer")?;
        let save = dom_utils::button(
            document,
            actions::SAVE,
            "Save Settings",
            "btn btn-primary",
            false,
        )?;
        footer.append_child(&save)?;
        container.append_child(&footer)?;

        if state.logs_open {
            components::log_drawer::scroll_to_bottom(document);
        }
        Ok(())
    })
    .unwrap_or(Ok(()))
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id(STYLES_ID).is_some() {
        return Ok(());
    }

    let css = "
.settings-container{max-width:720px;margin:0 auto;padding:16px;font-family:Arial,Helvetica,sans-serif;color:#111827}
.card{border:1px solid #e5e7eb;border-radius:8px;padding:16px;margin-bottom:16px;background:#fff}
.card-title{margin:0 0 4px;font-size:18px}
.card-description,.form-hint{margin:4px 0;color:#6b7280;font-size:13px}
.form-grid{display:grid;grid-template-columns:repeat(3,1fr);gap:12px}
.form-group{display:flex;flex-direction:column;gap:4px;margin-top:12px}
.form-input,.form-select{padding:6px 8px;border:1px solid #d1d5db;border-radius:4px}
.form-input:disabled{background:#f3f4f6}
.switch-row{display:flex;justify-content:space-between;align-items:center;margin-top:12px}
.env-banner{padding:8px 12px;border-radius:6px;margin-top:8px}
.env-remote{background:#eff6ff}
.env-local{background:#f0fdf4}
.connection-row{display:flex;align-items:center;gap:12px;margin-top:12px}
.status-connected{color:#16a34a}
.status-failed{color:#dc2626}
.status-testing{color:#6b7280}
.setup-steps{font-size:13px;padding-left:20px}
.log-drawer{background:#1e1e1e;color:#eee;font-family:monospace;font-size:12px;max-height:25vh;overflow:auto;padding:4px 8px;margin-top:8px}
.log-error{color:#ff4e4e}
.log-warn{color:#facc15}
.btn{padding:6px 14px;border-radius:4px;border:1px solid #d1d5db;background:#fff;cursor:pointer}
.btn-primary{background:#2563eb;border-color:#2563eb;color:#fff}
.btn:disabled{opacity:.6;cursor:default}
";

    let style = document.create_element("style")?;
    style.set_id(STYLES_ID);
    style.set_text_content(Some(css));
    if let Some(head) = document.query_selector("head")? {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
