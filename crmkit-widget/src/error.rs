//! Error types for the widget runtime.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("widget callback '{0}' is not registered")]
    MissingCallback(&'static str),

    #[error("widget callback '{callback}' returned false, lifecycle halted")]
    GateRejected { callback: &'static str },

    #[error("widget callback '{0}' called before the widget is ready")]
    NotReady(&'static str),

    #[error("widget already destroyed")]
    Destroyed,

    #[error("authorized request failed: {0}")]
    Request(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
