//! Error types for the interaction layer.
//!
//! The numerics core never fails; these errors only cover misuse of the
//! editor API and configuration input.

use std::fmt;

/// Handle returned by `MatrixEditor::add_listener`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub(crate) u64);

impl ListenerId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Errors returned by `MatrixEditor` and `EditorConfig`.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditorError {
    #[error("Listener {0} is not registered")]
    ListenerNotFound(ListenerId),

    #[error("Column index {0} is out of range for a 2x2 matrix")]
    InvalidColumn(usize),

    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(String),
}

/// Errors returned when waiting for matrix events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReceiveEventError {
    #[error("Event channel is closed")]
    ChannelClosed,

    #[error("Timed out waiting for a matrix event")]
    Timeout,
}

impl From<async_channel::RecvError> for ReceiveEventError {
    fn from(_: async_channel::RecvError) -> Self {
        ReceiveEventError::ChannelClosed
    }
}
