use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::constants::TUNNEL_URL_PLACEHOLDER;
use crate::dom_utils::{button, card, element, form_group, input, steps, switch_row, text};
use crate::guidance;
use crate::state::SettingsState;
use crate::utils::format_clock;
use crate::views::{actions, fields};

/// "Ollama Configuration" card: environment banner, URL fields, probe.
pub fn render(document: &Document, state: &SettingsState) -> Result<Element, JsValue> {
    let config = state.store.config();
    let context = state.store.context();

    let card = card(
        document,
        "Ollama Configuration",
        "Configure your local Ollama connection",
    )?;

    let banner = element(
        document,
        "div",
        if context.is_remote() { "env-banner env-remote" } else { "env-banner env-local" },
    )?;
    let env_label = text(document, "strong", "", context.label())?;
    banner.append_child(&env_label)?;
    let env_summary = text(document, "p", "form-hint", guidance::environment_summary(context))?;
    banner.append_child(&env_summary)?;
    card.append_child(&banner)?;

    let auto_detect = switch_row(
        document,
        fields::AUTO_DETECT,
        "Auto-detect URL",
        guidance::auto_detect_hint(context),
        config.auto_detect_enabled,
    )?;
    card.append_child(&auto_detect)?;

    if context.is_remote() {
        let tunnel = input(
            document,
            fields::TUNNEL_URL,
            "url",
            &config.tunnel_url,
            TUNNEL_URL_PLACEHOLDER,
        )?;
        let group = form_group(
            document,
            "ngrok Tunnel URL",
            &tunnel,
            Some("Enter your ngrok HTTPS URL to connect to your local Ollama"),
        )?;
        let checklist: Vec<String> = guidance::TUNNEL_STEPS.iter().map(|s| s.to_string()).collect();
        let checklist_el = steps(document, &checklist)?;
        group.append_child(&checklist_el)?;
        card.append_child(&group)?;
    }

    let url = input(
        document,
        fields::OLLAMA_URL,
        "url",
        &state.form.ollama_url,
        "",
    )?;
    url.set_disabled(config.auto_detect_enabled);
    let hint = if config.auto_detect_enabled {
        "URL is automatically set based on environment"
    } else {
        "Enter custom Ollama URL"
    };
    let url_group = form_group(document, "Ollama URL", &url, Some(hint))?;
    card.append_child(&url_group)?;

    let probe_row = connection_row(document, state)?;
    card.append_child(&probe_row)?;

    let guide = element(document, "div", "setup-guide")?;
    let guide_title = text(document, "h4", "", guidance::setup_guide_title(context))?;
    guide.append_child(&guide_title)?;
    let guide_steps = steps(document, &guidance::setup_steps(context))?;
    guide.append_child(&guide_steps)?;
    card.append_child(&guide)?;

    Ok(card)
}

fn connection_row(document: &Document, state: &SettingsState) -> Result<Element, JsValue> {
    let status = state.connection_status;
    let row = element(document, "div", "connection-row")?;

    let label = if status.is_testing() { "Testing..." } else { "Test Connection" };
    let test_button = button(
        document,
        actions::TEST_CONNECTION,
        label,
        "btn",
        status.is_testing(),
    )?;
    row.append_child(&test_button)?;

    if !status.label().is_empty() {
        let mut line = format!("{} {}", status.icon(), status.label());
        if let Some(at) = &state.last_checked {
            line.push_str(&format!(" at {}", format_clock(at)));
        }
        let status_el = text(document, "span", "connection-status", &line)?;
        status_el.class_list().add_1(status.css_class())?;
        row.append_child(&status_el)?;
    }

    Ok(row)
}
