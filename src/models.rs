use serde::{Deserialize, Serialize};

use crate::constants::{
    localhost_url, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE, DEFAULT_EMBEDDING_MODEL,
    DEFAULT_LLM_MODEL, DEFAULT_TOP_K, LOCAL_HOSTNAME, TUNNEL_URL_PLACEHOLDER,
};

/// Where the page is being served from.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Debug)]
pub enum ExecutionContext {
    Local,  // page served from `localhost`
    Remote, // any other host, i.e. a deployed build
}

impl ExecutionContext {
    /// Anything that is not literally `localhost` counts as remote,
    /// including `127.0.0.1` and the empty string.
    pub fn from_hostname(hostname: &str) -> Self {
        if hostname == LOCAL_HOSTNAME {
            ExecutionContext::Local
        } else {
            ExecutionContext::Remote
        }
    }

    pub fn is_remote(self) -> bool {
        self == ExecutionContext::Remote
    }

    pub fn label(self) -> &'static str {
        match self {
            ExecutionContext::Local => "Development (Local)",
            ExecutionContext::Remote => "Production (Deployed)",
        }
    }
}

/// OllamaConfig is the record persisted under `constants::STORAGE_KEY`.
///
/// Older saves used `ngrokUrl`, `isProduction` and `autoDetectUrl`; those keys
/// are still accepted on read.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct OllamaConfig {
    pub current_url: String,   // URL in effect
    pub localhost_url: String, // fixed local default
    #[serde(alias = "ngrokUrl")]
    pub tunnel_url: String, // public tunnel URL, empty when unset
    #[serde(alias = "isProduction")]
    pub is_remote_context: bool, // written on save, recomputed on load
    #[serde(alias = "autoDetectUrl")]
    pub auto_detect_enabled: bool,
}

impl OllamaConfig {
    /// Fresh record for a context, before anything persisted is merged in.
    pub fn defaults_for(context: ExecutionContext) -> Self {
        let localhost = localhost_url();
        Self {
            current_url: match context {
                ExecutionContext::Local => localhost.clone(),
                ExecutionContext::Remote => String::new(),
            },
            localhost_url: localhost,
            tunnel_url: String::new(),
            is_remote_context: context.is_remote(),
            auto_detect_enabled: true,
        }
    }

    pub fn context(&self) -> ExecutionContext {
        if self.is_remote_context {
            ExecutionContext::Remote
        } else {
            ExecutionContext::Local
        }
    }

    /// URL the panel would pick on its own. Pure; never touches storage.
    pub fn recommended_url(&self) -> String {
        if !self.auto_detect_enabled {
            return self.current_url.clone();
        }

        if self.is_remote_context {
            if self.tunnel_url.is_empty() {
                TUNNEL_URL_PLACEHOLDER.to_string()
            } else {
                self.tunnel_url.clone()
            }
        } else {
            self.localhost_url.clone()
        }
    }

    /// Shallow merge: every field present in `patch` replaces ours.
    pub fn apply(&mut self, patch: ConfigPatch) {
        if let Some(url) = patch.current_url {
            self.current_url = url;
        }
        if let Some(url) = patch.localhost_url {
            self.localhost_url = url;
        }
        if let Some(url) = patch.tunnel_url {
            self.tunnel_url = url;
        }
        if let Some(remote) = patch.is_remote_context {
            self.is_remote_context = remote;
        }
        if let Some(enabled) = patch.auto_detect_enabled {
            self.auto_detect_enabled = enabled;
        }
    }
}

/// Partial update of an `OllamaConfig`.
///
/// Also the shape a persisted blob is parsed into, so a save that predates a
/// field simply leaves the default in place.
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigPatch {
    pub current_url: Option<String>,
    pub localhost_url: Option<String>,
    #[serde(alias = "ngrokUrl")]
    pub tunnel_url: Option<String>,
    #[serde(alias = "isProduction")]
    pub is_remote_context: Option<bool>,
    #[serde(alias = "autoDetectUrl")]
    pub auto_detect_enabled: Option<bool>,
}

/// Current key and the older name it replaced, for fields that were renamed.
const RENAMED_KEYS: &[(&str, &str)] = &[
    ("tunnelUrl", "ngrokUrl"),
    ("isRemoteContext", "isProduction"),
    ("autoDetectEnabled", "autoDetectUrl"),
];

impl ConfigPatch {
    /// Parse a saved blob. When a record carries both the current and the
    /// older name of a field, the current one wins and the older is ignored.
    pub fn from_saved(blob: &str) -> serde_json::Result<Self> {
        let mut value: serde_json::Value = serde_json::from_str(blob)?;
        if let Some(fields) = value.as_object_mut() {
            for (current, older) in RENAMED_KEYS {
                if fields.contains_key(*current) {
                    fields.remove(*older);
                }
            }
        }
        serde_json::from_value(value)
    }

    pub fn current_url(url: impl Into<String>) -> Self {
        Self {
            current_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn tunnel_url(url: impl Into<String>) -> Self {
        Self {
            tunnel_url: Some(url.into()),
            ..Self::default()
        }
    }

    pub fn auto_detect(enabled: bool) -> Self {
        Self {
            auto_detect_enabled: Some(enabled),
            ..Self::default()
        }
    }
}

/// In-memory form values of the settings tab. Never persisted.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct SettingsForm {
    pub ollama_url: String,
    pub embedding_model: String,
    pub llm_model: String,
    pub chunk_size: u32,
    pub chunk_overlap: u32,
    pub top_k: u32,
    pub enable_logging: bool,
    pub enable_cache: bool,
}

impl Default for SettingsForm {
    fn default() -> Self {
        Self {
            ollama_url: localhost_url(),
            embedding_model: DEFAULT_EMBEDDING_MODEL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            top_k: DEFAULT_TOP_K,
            enable_logging: true,
            enable_cache: true,
        }
    }
}

/// A model reported by `GET /api/tags`.
#[derive(Clone, Deserialize, PartialEq, Eq, Debug)]
pub struct InstalledModel {
    pub name: String,
    #[serde(default)]
    pub size: u64,
}

impl InstalledModel {
    /// Ollama has no model-kind field; embedding models carry `embed` in their name.
    pub fn is_embedding(&self) -> bool {
        self.name.contains("embed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_localhost_is_local() {
        assert_eq!(ExecutionContext::from_hostname("localhost"), ExecutionContext::Local);
        assert_eq!(ExecutionContext::from_hostname("127.0.0.1"), ExecutionContext::Remote);
        assert_eq!(ExecutionContext::from_hostname("rag.example.app"), ExecutionContext::Remote);
        assert_eq!(ExecutionContext::from_hostname(""), ExecutionContext::Remote);
    }

    #[test]
    fn remote_defaults_have_no_current_url() {
        let config = OllamaConfig::defaults_for(ExecutionContext::Remote);
        assert_eq!(config.current_url, "");
        assert!(config.is_remote_context);
        assert!(config.auto_detect_enabled);
        assert_eq!(config.recommended_url(), TUNNEL_URL_PLACEHOLDER);
    }

    #[test]
    fn manual_mode_recommends_the_current_url() {
        let mut config = OllamaConfig::defaults_for(ExecutionContext::Local);
        config.apply(ConfigPatch {
            current_url: Some("http://gpu-box:11434".into()),
            auto_detect_enabled: Some(false),
            ..ConfigPatch::default()
        });
        assert_eq!(config.recommended_url(), "http://gpu-box:11434");
    }

    #[test]
    fn legacy_keys_are_read() {
        let patch: ConfigPatch = serde_json::from_str(
            r#"{"ngrokUrl":"https://a.ngrok.io","isProduction":true,"autoDetectUrl":false}"#,
        )
        .unwrap();
        assert_eq!(patch.tunnel_url.as_deref(), Some("https://a.ngrok.io"));
        assert_eq!(patch.is_remote_context, Some(true));
        assert_eq!(patch.auto_detect_enabled, Some(false));
    }

    #[test]
    fn current_key_wins_when_both_names_are_saved() {
        let patch = ConfigPatch::from_saved(
            r#"{"tunnelUrl":"https://new.ngrok.io","ngrokUrl":"https://old.ngrok.io","autoDetectEnabled":false,"autoDetectUrl":true}"#,
        )
        .unwrap();
        assert_eq!(patch.tunnel_url.as_deref(), Some("https://new.ngrok.io"));
        assert_eq!(patch.auto_detect_enabled, Some(false));

        let legacy_only = ConfigPatch::from_saved(r#"{"ngrokUrl":"https://old.ngrok.io"}"#).unwrap();
        assert_eq!(legacy_only.tunnel_url.as_deref(), Some("https://old.ngrok.io"));
    }

    #[test]
    fn non_object_blobs_are_rejected() {
        assert!(ConfigPatch::from_saved("[1,2]").is_err());
        assert!(ConfigPatch::from_saved("{not json").is_err());
    }

    #[test]
    fn record_serializes_with_camel_case_keys() {
        let config = OllamaConfig::defaults_for(ExecutionContext::Local);
        let json: serde_json::Value = serde_json::to_value(&config).unwrap();
        assert_eq!(json["currentUrl"], "http://localhost:11434");
        assert_eq!(json["tunnelUrl"], "");
        assert_eq!(json["isRemoteContext"], false);
        assert_eq!(json["autoDetectEnabled"], true);
    }
}
