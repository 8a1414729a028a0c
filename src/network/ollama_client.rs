use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use serde::Deserialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Request, RequestInit, RequestMode, Response};

use super::{Endpoint, LocalBoxFuture, ServiceClient};
use crate::constants::PROBE_TIMEOUT_MS;
use crate::debug_log;
use crate::error::ClientError;
use crate::models::InstalledModel;

/// Body of `GET /api/tags`.
#[derive(Deserialize)]
struct TagsResponse {
    #[serde(default)]
    models: Vec<InstalledModel>,
}

/// fetch-based client for an Ollama endpoint.
///
/// The base URL is swapped in place by the settings surface, so clones of
/// the `Rc` handed out at mount time always talk to the current endpoint.
pub struct OllamaClient {
    endpoint: RefCell<Endpoint>,
    timeout_ms: u32,
}

impl OllamaClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            endpoint: RefCell::new(Endpoint::from_url(base_url)),
            timeout_ms: PROBE_TIMEOUT_MS,
        }
    }

    pub fn with_timeout(mut self, timeout_ms: u32) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> String {
        self.endpoint.borrow().base_url().to_string()
    }

    fn tags_url(&self) -> Result<String, ClientError> {
        let endpoint = self.endpoint.borrow();
        if endpoint.is_empty() {
            return Err(ClientError::Request("no Ollama URL configured".into()));
        }
        Ok(endpoint.tags_url())
    }
}

impl ServiceClient for OllamaClient {
    fn set_base_url(&self, url: &str) {
        debug_log!("Ollama base URL set to {}", url);
        *self.endpoint.borrow_mut() = Endpoint::from_url(url);
    }

    fn check_connection(&self) -> LocalBoxFuture<Result<bool, ClientError>> {
        let url = self.tags_url();
        let timeout_ms = self.timeout_ms;
        Box::pin(async move {
            let response = get(&url?, timeout_ms).await?;
            if !response.ok() {
                debug_log!(
                    "Ollama answered {} {}",
                    response.status(),
                    response.status_text()
                );
            }
            Ok(response.ok())
        })
    }

    fn list_models(&self) -> LocalBoxFuture<Result<Vec<InstalledModel>, ClientError>> {
        let url = self.tags_url();
        let timeout_ms = self.timeout_ms;
        Box::pin(async move {
            let response = get(&url?, timeout_ms).await?;
            if !response.ok() {
                return Err(ClientError::Status(response.status(), response.status_text()));
            }

            let json_promise = response.json().map_err(|e| ClientError::Decode(describe(&e)))?;
            let json = JsFuture::from(json_promise)
                .await
                .map_err(|e| ClientError::Decode(describe(&e)))?;
            let tags: TagsResponse = serde_wasm_bindgen::from_value(json)
                .map_err(|e| ClientError::Decode(e.to_string()))?;
            Ok(tags.models)
        })
    }
}

/// CORS GET that is aborted after `timeout_ms`.
async fn get(url: &str, timeout_ms: u32) -> Result<Response, ClientError> {
    let window =
        web_sys::window().ok_or_else(|| ClientError::Request("no global window exists".into()))?;

    let controller = AbortController::new().map_err(|e| ClientError::Request(describe(&e)))?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);
    opts.set_signal(Some(&controller.signal()));

    let request =
        Request::new_with_str_and_init(url, &opts).map_err(|e| ClientError::Request(describe(&e)))?;

    let timed_out = Rc::new(Cell::new(false));
    let timer = {
        let timed_out = timed_out.clone();
        Timeout::new(timeout_ms, move || {
            timed_out.set(true);
            controller.abort();
        })
    };

    let result = JsFuture::from(window.fetch_with_request(&request)).await;
    // Dropping the timer cancels it if the fetch settled first.
    drop(timer);

    let value = result.map_err(|e| {
        if timed_out.get() {
            ClientError::Timeout(timeout_ms)
        } else {
            ClientError::Network(describe(&e))
        }
    })?;

    value
        .dyn_into::<Response>()
        .map_err(|_| ClientError::Decode("fetch did not resolve to a Response".into()))
}

/// fetch rejects with a `TypeError`; prefer its message over the debug form.
fn describe(value: &JsValue) -> String {
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
