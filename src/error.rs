//! Error types for the configuration store and the Ollama client.

use std::fmt;

use wasm_bindgen::JsValue;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Non-empty tunnel URL without a recognized provider domain.
    InvalidTunnelUrl(String),
    /// `window.localStorage` could not be opened or read.
    StorageUnavailable(String),
    /// Writing the serialized record failed (quota, privacy mode, ...).
    StorageWrite(String),
    Serialize(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidTunnelUrl(url) => write!(f, "not a recognized tunnel URL: {}", url),
            ConfigError::StorageUnavailable(e) => write!(f, "local storage unavailable: {}", e),
            ConfigError::StorageWrite(e) => write!(f, "failed to write settings: {}", e),
            ConfigError::Serialize(e) => write!(f, "failed to serialize settings: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request could not be built (no window, bad URL, ...).
    Request(String),
    /// fetch rejected: DNS, refused connection, CORS.
    Network(String),
    /// Aborted after the given number of milliseconds.
    Timeout(u32),
    Status(u16, String),
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Request(e) => write!(f, "could not build request: {}", e),
            ClientError::Network(e) => write!(f, "network error: {}", e),
            ClientError::Timeout(ms) => write!(f, "no response within {} ms", ms),
            ClientError::Status(code, text) => write!(f, "Ollama error: {} {}", code, text),
            ClientError::Decode(e) => write!(f, "unexpected response: {}", e),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ClientError> for JsValue {
    fn from(err: ClientError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
