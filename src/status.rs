/// Transient result of the manual connectivity probe. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionStatus {
    #[default]
    Idle,
    Testing,
    Connected,
    Failed,
}

impl ConnectionStatus {
    pub fn label(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "",
            ConnectionStatus::Testing => "Testing...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Failed => "Connection Failed",
        }
    }

    /// CSS modifier for the status line and the test button icon.
    pub fn css_class(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "status-idle",
            ConnectionStatus::Testing => "status-testing",
            ConnectionStatus::Connected => "status-connected",
            ConnectionStatus::Failed => "status-failed",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ConnectionStatus::Idle => "",
            ConnectionStatus::Testing => "\u{25CC}",
            ConnectionStatus::Connected => "\u{2714}",
            ConnectionStatus::Failed => "\u{2716}",
        }
    }

    /// The test button is disabled while a probe is in flight.
    pub fn is_testing(self) -> bool {
        self == ConnectionStatus::Testing
    }
}
