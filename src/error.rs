// src/error.rs
use thiserror::Error;

/// Failure while building or running the extractor against a document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },
}

/// Everything that can end a scan in the Errored state.
///
/// `Display` is the message shown after "Error: " in the results table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    #[error("No active tab found")]
    NoActiveView,

    #[error("{0}")]
    Injection(String),

    #[error("{0}")]
    Transport(String),

    /// Error value reported back by the content side.
    #[error("{0}")]
    Extraction(String),

    #[error("Malformed response: {0}")]
    Protocol(String),
}

impl ScanError {
    pub fn kind(&self) -> &'static str {
        match self {
            ScanError::NoActiveView => "no_active_view",
            ScanError::Injection(_) => "injection",
            ScanError::Transport(_) => "transport",
            ScanError::Extraction(_) => "extraction",
            ScanError::Protocol(_) => "protocol",
        }
    }
}

impl From<ExtractError> for ScanError {
    fn from(e: ExtractError) -> Self {
        ScanError::Extraction(e.to_string())
    }
}
