//! Clipboard side effect behind a narrow port.

use thiserror::Error;

/// Error raised by the copy side effect.
///
/// Clipboard failures are one-shot notifications to the caller; they are
/// never persisted into a controller's result state.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// Copy was requested while no translation result is available.
    #[error("no translation result to copy")]
    NothingToCopy,

    /// The platform clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Writes text to a clipboard.
pub trait Clipboard {
    /// Places `text` on the clipboard.
    fn set_text(&self, text: &str) -> Result<(), ClipboardError>;
}

/// The system clipboard.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClipboard;

impl Clipboard for SystemClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        // Scoped acquisition: the platform handle is released when the
        // arboard handle drops at the end of this call.
        let mut clipboard =
            arboard::Clipboard::new().map_err(|err| ClipboardError::Write(err.to_string()))?;
        clipboard
            .set_text(text)
            .map_err(|err| ClipboardError::Write(err.to_string()))
    }
}
