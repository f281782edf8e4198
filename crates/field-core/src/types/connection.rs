//! Transport connection state

/// Connection state as shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
    Error(String),
}

impl ConnectionState {
    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionState::Connected)
    }

    /// Whether a manual reconnect makes sense in this state
    pub fn can_reconnect(&self) -> bool {
        matches!(
            self,
            ConnectionState::Disconnected | ConnectionState::Error(_)
        )
    }

    pub fn label(&self) -> String {
        match self {
            ConnectionState::Disconnected => "Disconnected".to_string(),
            ConnectionState::Connecting => "Connecting...".to_string(),
            ConnectionState::Connected => "Connected".to_string(),
            ConnectionState::Error(msg) => format!("Error: {}", msg),
        }
    }
}
