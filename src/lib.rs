use wasm_bindgen::prelude::*;

// Exported at the crate root; modules import them as `crate::debug_log` etc.
mod macros;

pub mod command_executors;
pub mod components;
pub mod config_store;
pub mod constants;
pub mod dom_utils;
pub mod environment;
pub mod error;
pub mod guidance;
pub mod logging;
pub mod messages;
pub mod models;
pub mod network;
pub mod notifications;
pub mod state;
pub mod status;
pub mod storage;
pub mod toast;
pub mod update;
pub mod utils;
pub mod views;

#[cfg(test)]
mod testing;

pub use config_store::ConfigStore;
pub use error::{ClientError, ConfigError};
pub use models::{ConfigPatch, ExecutionContext, OllamaConfig};

// Main entry point for the WASM application
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize better panic messages
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;

    state::mount_default(&document)
}

/// Remove the panel, e.g. when the host navigates away from the settings tab.
#[wasm_bindgen]
pub fn unmount_settings() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    match window.document() {
        Some(document) => state::unmount(&document),
        None => Ok(()),
    }
}

/// Mount the panel again after `unmount_settings`.
#[wasm_bindgen]
pub fn mount_settings() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global `window` exists"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("should have a document on window"))?;
    state::mount_default(&document)
}
