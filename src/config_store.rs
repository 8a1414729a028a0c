//! Configuration store for the Ollama connection.
//!
//! Owns the single `OllamaConfig` record. Every successful mutation merges a
//! patch into the record and writes the whole record back under
//! `STORAGE_KEY`; loading reads it at most once. The execution-context flag is
//! never taken from storage, it is recomputed from the live host each load.

use std::rc::Rc;

use crate::constants::{STORAGE_KEY, TUNNEL_PROVIDER_DOMAINS, TUNNEL_URL_EXAMPLE};
use crate::error::ConfigError;
use crate::models::{ConfigPatch, ExecutionContext, OllamaConfig};
use crate::notifications::{Notification, Notifier};
use crate::storage::KeyValueStore;
use crate::{debug_log, error_log};

/// Empty (unset) or containing a known tunnel-provider domain.
pub fn is_recognized_tunnel_url(url: &str) -> bool {
    url.is_empty() || TUNNEL_PROVIDER_DOMAINS.iter().any(|domain| url.contains(domain))
}

pub struct ConfigStore {
    config: OllamaConfig,
    storage: Box<dyn KeyValueStore>,
    notifier: Rc<dyn Notifier>,
}

impl ConfigStore {
    /// Build the record for `context` and overlay whatever was saved.
    ///
    /// A blob that does not parse is reported to the diagnostic log and
    /// otherwise ignored; the result is then exactly the default record.
    pub fn load(
        storage: Box<dyn KeyValueStore>,
        notifier: Rc<dyn Notifier>,
        context: ExecutionContext,
    ) -> Self {
        let mut config = OllamaConfig::defaults_for(context);

        match storage.get_item(STORAGE_KEY) {
            Ok(Some(saved)) => match ConfigPatch::from_saved(&saved) {
                Ok(patch) => config.apply(patch),
                Err(e) => error_log!("Failed to parse saved Ollama config: {}", e),
            },
            Ok(None) => {}
            Err(e) => error_log!("Failed to read saved Ollama config: {}", e),
        }

        // The same profile may be used against a dev server and a deployed site.
        config.is_remote_context = context.is_remote();

        debug_log!(
            "Loaded Ollama config ({}): current={:?} auto_detect={}",
            context.label(),
            config.current_url,
            config.auto_detect_enabled
        );

        Self {
            config,
            storage,
            notifier,
        }
    }

    pub fn config(&self) -> &OllamaConfig {
        &self.config
    }

    pub fn context(&self) -> ExecutionContext {
        self.config.context()
    }

    pub fn recommended_url(&self) -> String {
        self.config.recommended_url()
    }

    pub fn set_current_url(&mut self, url: &str) -> Result<(), ConfigError> {
        self.save(ConfigPatch::current_url(url))
    }

    /// Rejected values raise a destructive notification and leave the
    /// record untouched.
    pub fn set_tunnel_url(&mut self, url: &str) -> Result<(), ConfigError> {
        if !is_recognized_tunnel_url(url) {
            self.notifier.notify(Notification::destructive(
                "Invalid ngrok URL",
                format!("Please enter a valid ngrok URL (e.g., {})", TUNNEL_URL_EXAMPLE),
            ));
            return Err(ConfigError::InvalidTunnelUrl(url.to_string()));
        }

        let mut patch = ConfigPatch::tunnel_url(url);
        if self.config.auto_detect_enabled && self.config.is_remote_context {
            patch.current_url = Some(url.to_string());
        }
        self.save(patch)
    }

    /// Enabling snaps `current_url` to the recommendation in the same write.
    pub fn set_auto_detect(&mut self, enabled: bool) -> Result<(), ConfigError> {
        let mut patch = ConfigPatch::auto_detect(enabled);
        if enabled {
            let mut next = self.config.clone();
            next.auto_detect_enabled = true;
            patch.current_url = Some(next.recommended_url());
        }
        self.save(patch)
    }

    /// Merge and persist the full record. The in-memory record keeps the
    /// update even when the write fails.
    fn save(&mut self, patch: ConfigPatch) -> Result<(), ConfigError> {
        self.config.apply(patch);

        let body = serde_json::to_string(&self.config)
            .map_err(|e| ConfigError::Serialize(e.to_string()))?;

        self.storage.set_item(STORAGE_KEY, &body).map_err(|e| {
            error_log!("Failed to persist Ollama config: {}", e);
            e
        })
    }
}
