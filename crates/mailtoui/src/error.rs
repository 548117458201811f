//! Error types

use thiserror::Error;

use crate::LinkId;

/// Faults surfaced by the widget
///
/// Everything else (bad options, odd mailto payloads, clipboard denial)
/// is recovered where it happens.
#[derive(Debug, Error)]
pub enum MailtoUiError {
    /// A link reached the modal controller without being discovered.
    /// Indicates a discovery/registry mismatch, not a user error.
    #[error("no dialog registered for link {link}")]
    DialogNotFound { link: LinkId },
}

/// Options payload could not be used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid options JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("options payload must be a JSON object")]
    NotAnObject,
}

/// Clipboard write failed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard access denied")]
    Denied,
}

pub type Result<T> = std::result::Result<T, MailtoUiError>;
