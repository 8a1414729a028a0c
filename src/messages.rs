// src/messages.rs
//
// Everything that can happen on the settings tab, and the side effects the
// reducer asks the runtime to perform.
//
use crate::models::InstalledModel;
use crate::notifications::Notification;

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Surface mounted; adopt the recommended URL.
    Mounted,

    // Connection
    OllamaUrlEdited(String),
    TunnelUrlEdited(String),
    AutoDetectToggled(bool),
    TestConnectionRequested,
    ConnectionChecked {
        generation: u32,
        outcome: ProbeOutcome,
    },
    ModelsLoaded {
        generation: u32,
        models: Vec<InstalledModel>,
    },

    // Models
    EmbeddingModelSelected(String),
    LlmModelSelected(String),

    // Document processing; raw input text, ignored unless it parses
    ChunkSizeEdited(String),
    ChunkOverlapEdited(String),
    TopKEdited(String),

    // Privacy & diagnostics
    LoggingToggled(bool),
    CacheToggled(bool),
    ToggleLogDrawer,
    ClearLogs,

    SaveRequested,
}

/// How a connectivity probe ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    Reachable,
    Unreachable,
    /// No answer at all (network, CORS, timeout).
    Error(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Point the service client at a new base URL.
    SetBaseUrl(String),

    Notify(Notification),

    /// Run `check_connection` and report back with `Message::ConnectionChecked`.
    ProbeConnection { url: String, generation: u32 },

    /// Refresh model lists, reported back with `Message::ModelsLoaded`.
    FetchModels { generation: u32 },

    /// Re-render the panel from current state.
    Render,
}
