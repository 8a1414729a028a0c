// Defaults for the Ollama connection panel - single source of truth.

/// localStorage key holding the serialized `OllamaConfig`.
pub const STORAGE_KEY: &str = "ollama-config";

/// Hostname that marks a local development page.
pub const LOCAL_HOSTNAME: &str = "localhost";

pub const DEFAULT_LOCALHOST_URL: &str = "http://localhost:11434";

/// Recommended URL shown while remote and no tunnel URL has been entered.
pub const TUNNEL_URL_PLACEHOLDER: &str = "https://your-ngrok-url.ngrok.io";

/// Example tunnel URL used as input placeholder and in guidance text.
pub const TUNNEL_URL_EXAMPLE: &str = "https://abc123.ngrok.io";

/// A non-empty tunnel URL must contain one of these.
pub const TUNNEL_PROVIDER_DOMAINS: &[&str] = &["ngrok.io", "ngrok-free.app"];

// Model selection defaults
pub const DEFAULT_EMBEDDING_MODEL: &str = "nomic-embed-text:latest";
pub const DEFAULT_LLM_MODEL: &str = "llama3.2:latest";
pub const EMBEDDING_MODELS: &[&str] = &["nomic-embed-text:latest"];
pub const LLM_MODELS: &[&str] = &[
    "llama3.2:latest",
    "llama3.1:8b",
    "mistral:latest",
    "summarizer:latest",
    "gemma",
];

// Document processing defaults
pub const DEFAULT_CHUNK_SIZE: u32 = 512;
pub const DEFAULT_CHUNK_OVERLAP: u32 = 50;
pub const DEFAULT_TOP_K: u32 = 5;

/// Abort the connectivity probe after this long.
pub const PROBE_TIMEOUT_MS: u32 = 10_000;

pub const TOAST_DURATION_MS: u32 = 4_000;

/// Localhost endpoint, overridable at build time through `OLLAMA_DEFAULT_URL`.
pub fn localhost_url() -> String {
    option_env!("OLLAMA_DEFAULT_URL")
        .unwrap_or(DEFAULT_LOCALHOST_URL)
        .trim_end_matches('/')
        .to_string()
}
