//! Tiny toast helper implementing the notification channel.
//! Creates a `#toast-root` container once per page and appends toast divs
//! (title + description) that are removed after a few seconds.

use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element};

use crate::constants::TOAST_DURATION_MS;
use crate::error_log;
use crate::notifications::{Notification, Notifier, Severity};

/// Renders notifications as toasts in the current document.
#[derive(Debug, Default, Clone, Copy)]
pub struct ToastNotifier;

impl Notifier for ToastNotifier {
    fn notify(&self, notification: Notification) {
        if let Err(e) = show(&notification) {
            error_log!("Failed to show toast '{}': {:?}", notification.title, e);
        }
    }
}

pub fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "toast-info",
        Severity::Destructive => "toast-destructive",
    }
}

pub fn show(notification: &Notification) -> Result<(), JsValue> {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return Ok(()),
    };
    let document = match window.document() {
        Some(d) => d,
        None => return Ok(()),
    };

    ensure_styles(&document)?;
    let root = ensure_root(&document)?;

    let toast = document.create_element("div")?;
    toast.set_class_name("toast");
    toast.class_list().add_1(severity_class(notification.severity))?;
    if notification.severity == Severity::Destructive {
        toast.set_attribute("role", "alert")?;
    }

    let title = document.create_element("div")?;
    title.set_class_name("toast-title");
    title.set_text_content(Some(&notification.title));
    toast.append_child(&title)?;

    if !notification.description.is_empty() {
        let description = document.create_element("div")?;
        description.set_class_name("toast-description");
        description.set_text_content(Some(&notification.description));
        toast.append_child(&description)?;
    }

    // Prepend so newest appears on top.
    root.prepend_with_node_1(&toast)?;

    Timeout::new(TOAST_DURATION_MS, move || {
        toast.remove();
    })
    .forget();

    Ok(())
}

fn ensure_root(document: &Document) -> Result<Element, JsValue> {
    if let Some(el) = document.get_element_by_id("toast-root") {
        return Ok(el);
    }

    let root = document.create_element("div")?;
    root.set_id("toast-root");
    root.set_class_name("toast-root");
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;
    body.append_child(&root)?;
    Ok(root)
}

fn ensure_styles(document: &Document) -> Result<(), JsValue> {
    if document.get_element_by_id("toast-styles").is_some() {
        return Ok(());
    }

    let css = "
.toast-root{position:fixed;top:16px;right:16px;display:flex;flex-direction:column;gap:8px;z-index:9999;font-family:Arial,Helvetica,sans-serif;max-width:360px}
.toast{padding:10px 16px;border-radius:4px;color:#fff;box-shadow:0 2px 4px rgba(0,0,0,.1);opacity:0;animation:toast-in .2s forwards}
.toast-title{font-weight:600}
.toast-description{font-size:13px;opacity:.9;margin-top:2px}
.toast-info{background:#2563eb}
.toast-destructive{background:#dc2626}
@keyframes toast-in{to{opacity:1}}
";

    let style = document.create_element("style")?;
    style.set_id("toast-styles");
    style.set_text_content(Some(css));
    // Append to <head>, fall back to <body>.
    if let Some(head) = document.query_selector("head")? {
        head.append_child(&style)?;
    } else if let Some(body) = document.body() {
        body.append_child(&style)?;
    }
    Ok(())
}
