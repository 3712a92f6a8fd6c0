//! Recording `Clipboard` mock.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pakar_session::{Clipboard, ClipboardError};

/// `Clipboard` implementation that records writes in memory.
///
/// The failing variant rejects every write, for exercising the one-shot
/// clipboard failure path.
#[derive(Clone, Default)]
pub struct MockClipboard {
    writes: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl MockClipboard {
    /// Creates a clipboard that accepts and records writes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clipboard that rejects every write.
    pub fn failing() -> Self {
        Self {
            writes: Arc::default(),
            fail: true,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.writes.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Everything written so far, in order.
    pub fn writes(&self) -> Vec<String> {
        self.lock().clone()
    }
}

impl Clipboard for MockClipboard {
    fn set_text(&self, text: &str) -> Result<(), ClipboardError> {
        if self.fail {
            return Err(ClipboardError::Write(
                "scripted clipboard failure".to_string(),
            ));
        }
        self.lock().push(text.to_string());
        Ok(())
    }
}
