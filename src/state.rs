use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

use chrono::{DateTime, Local};
use wasm_bindgen::JsValue;
use web_sys::Document;

use crate::config_store::ConfigStore;
use crate::constants::{localhost_url, EMBEDDING_MODELS, LLM_MODELS};
use crate::environment::{detect_context, BrowserLocation, HostProbe};
use crate::messages::Message;
use crate::models::SettingsForm;
use crate::network::{OllamaClient, ServiceClient};
use crate::notifications::Notifier;
use crate::status::ConnectionStatus;
use crate::storage::{open_browser_storage, KeyValueStore};
use crate::toast::ToastNotifier;
use crate::update::update;
use crate::views::{self, Listeners};
use crate::debug_log;

/// Everything the settings tab shows. Only `store` outlives the mount.
pub struct SettingsState {
    pub store: ConfigStore,
    pub form: SettingsForm,
    pub connection_status: ConnectionStatus,
    pub last_checked: Option<DateTime<Local>>,
    pub embedding_models: Vec<String>,
    pub llm_models: Vec<String>,
    /// Sizes in bytes, known once the endpoint listed its models.
    pub model_sizes: HashMap<String, u64>,
    pub logs_open: bool,
    /// Identifies this mount; async results carrying another value are dropped.
    pub generation: u32,
}

impl SettingsState {
    pub fn new(store: ConfigStore, generation: u32) -> Self {
        let mut form = SettingsForm::default();
        form.ollama_url = store.config().current_url.clone();

        Self {
            store,
            form,
            connection_status: ConnectionStatus::Idle,
            last_checked: None,
            embedding_models: EMBEDDING_MODELS.iter().map(|m| m.to_string()).collect(),
            llm_models: LLM_MODELS.iter().map(|m| m.to_string()).collect(),
            model_sizes: HashMap::new(),
            logs_open: false,
            generation,
        }
    }
}

/// Collaborators injected at mount time.
pub struct SurfaceDeps {
    pub storage: Box<dyn KeyValueStore>,
    pub host: Box<dyn HostProbe>,
    pub client: Rc<dyn ServiceClient>,
    pub notifier: Rc<dyn Notifier>,
}

impl SurfaceDeps {
    /// localStorage, the page's own location, toasts and a fetch client.
    pub fn browser() -> Self {
        Self {
            storage: open_browser_storage(),
            host: Box::new(BrowserLocation),
            client: Rc::new(OllamaClient::new(&localhost_url())),
            notifier: Rc::new(ToastNotifier),
        }
    }
}

struct Mounted {
    state: SettingsState,
    client: Rc<dyn ServiceClient>,
    notifier: Rc<dyn Notifier>,
    // Dropped together with the surface on unmount or remount.
    _listeners: Listeners,
}

thread_local! {
    static SURFACE: RefCell<Option<Mounted>> = RefCell::new(None);
    static NEXT_GENERATION: Cell<u32> = Cell::new(1);
}

fn next_generation() -> u32 {
    NEXT_GENERATION.with(|counter| {
        let generation = counter.get();
        counter.set(generation.wrapping_add(1));
        generation
    })
}

/// Load the config, build the panel inside `document` and adopt the
/// recommended URL. Mounting again replaces the previous surface.
pub fn mount(document: &Document, deps: SurfaceDeps) -> Result<(), JsValue> {
    let context = detect_context(deps.host.as_ref());
    let store = ConfigStore::load(deps.storage, deps.notifier.clone(), context);
    let state = SettingsState::new(store, next_generation());

    debug_log!("Mounting settings surface ({})", context.label());

    // Replaces any previous container before its listeners are dropped below.
    let listeners = views::mount_container(document)?;

    SURFACE.with(|surface| {
        *surface.borrow_mut() = Some(Mounted {
            state,
            client: deps.client,
            notifier: deps.notifier,
            _listeners: listeners,
        });
    });

    dispatch(Message::Mounted);
    Ok(())
}

pub fn mount_default(document: &Document) -> Result<(), JsValue> {
    mount(document, SurfaceDeps::browser())
}

/// Tear the panel down. Probes still in flight report into the void.
pub fn unmount(document: &Document) -> Result<(), JsValue> {
    SURFACE.with(|surface| surface.borrow_mut().take());
    views::remove_container(document)
}

pub fn is_mounted() -> bool {
    SURFACE.with(|surface| surface.borrow().is_some())
}

/// Read-only access to the mounted state.
pub fn with_state<R>(f: impl FnOnce(&SettingsState) -> R) -> Option<R> {
    SURFACE.with(|surface| surface.borrow().as_ref().map(|mounted| f(&mounted.state)))
}

/// Run `msg` through the reducer, then carry out its commands once the
/// state borrow is released.
pub fn dispatch(msg: Message) {
    let effects = SURFACE.with(|surface| {
        let mut surface = surface.borrow_mut();
        match surface.as_mut() {
            Some(mounted) => Some((
                update(&mut mounted.state, msg),
                mounted.client.clone(),
                mounted.notifier.clone(),
            )),
            None => {
                debug_log!("Settings surface not mounted; dropping {:?}", msg);
                None
            }
        }
    });

    if let Some((commands, client, notifier)) = effects {
        crate::command_executors::execute(commands, client.as_ref(), notifier.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionContext;
    use crate::storage::MemoryStorage;
    use crate::testing::RecordingNotifier;

    #[test]
    fn form_starts_from_the_loaded_url() {
        let storage = MemoryStorage::with_item(
            crate::constants::STORAGE_KEY,
            r#"{"currentUrl":"http://gpu-box:11434","autoDetectEnabled":false}"#,
        );
        let store = ConfigStore::load(
            Box::new(storage),
            Rc::new(RecordingNotifier::default()),
            ExecutionContext::Local,
        );

        let state = SettingsState::new(store, 1);

        assert_eq!(state.form.ollama_url, "http://gpu-box:11434");
        assert_eq!(state.connection_status, ConnectionStatus::Idle);
        assert_eq!(state.llm_models.len(), LLM_MODELS.len());
    }

    #[test]
    fn generations_are_unique() {
        let a = next_generation();
        let b = next_generation();
        assert_ne!(a, b);
    }

    #[test]
    fn dispatch_without_a_surface_is_dropped() {
        assert!(!is_mounted());
        dispatch(Message::SaveRequested);
        assert!(with_state(|s| s.generation).is_none());
    }
}
