use wasm_bindgen_futures::spawn_local;

use crate::messages::{Command, Message, ProbeOutcome};
use crate::network::ServiceClient;
use crate::notifications::Notifier;
use crate::state::dispatch;
use crate::{debug_log, error_log, warn_log};

pub fn execute(commands: Vec<Command>, client: &dyn ServiceClient, notifier: &dyn Notifier) {
    for command in commands {
        match command {
            Command::SetBaseUrl(url) => client.set_base_url(&url),

            Command::Notify(notification) => notifier.notify(notification),

            Command::ProbeConnection { url, generation } => {
                debug_log!("Testing connection to: {}", url);
                // Build the future now so it targets the URL in effect at click time.
                let probe = client.check_connection();
                spawn_local(async move {
                    let outcome = match probe.await {
                        Ok(true) => ProbeOutcome::Reachable,
                        Ok(false) => ProbeOutcome::Unreachable,
                        Err(e) => ProbeOutcome::Error(e.to_string()),
                    };
                    dispatch(Message::ConnectionChecked {
                        generation,
                        outcome,
                    });
                });
            }

            Command::FetchModels { generation } => {
                let listing = client.list_models();
                spawn_local(async move {
                    match listing.await {
                        Ok(models) => dispatch(Message::ModelsLoaded { generation, models }),
                        Err(e) => warn_log!("Could not list Ollama models: {}", e),
                    }
                });
            }

            Command::Render => {
                let document = web_sys::window().and_then(|w| w.document());
                if let Some(document) = document {
                    if let Err(e) = crate::views::render(&document) {
                        error_log!("Failed to render settings: {:?}", e);
                    }
                }
            }
        }
    }
}
