//! Translation controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use pakar_client::PortalApi;
use pakar_core::{AsyncState, Direction, TranslateRequest};
use tokio::time::Instant;

use crate::TRACING_TARGET_TRANSLATE;
use crate::clipboard::{Clipboard, ClipboardError};

/// Fixed user-facing message shown when translation fails.
pub const TRANSLATION_FAILED_MESSAGE: &str = "Translation failed.";

/// How long the copied indicator stays on after a successful copy.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

struct TranslateState {
    text: String,
    direction: Direction,
    result: AsyncState<String>,
    /// When the result was last copied, if within the feedback window.
    copied_at: Option<Instant>,
    /// Sequence number of the most recently issued request.
    seq: u64,
}

impl Default for TranslateState {
    fn default() -> Self {
        Self {
            text: String::new(),
            direction: Direction::default(),
            result: AsyncState::Idle,
            copied_at: None,
            seq: 0,
        }
    }
}

/// Controller for the text translation flow.
///
/// Independent of the search and directory controllers. Owns the source
/// text, the translation direction, the result slice, and the transient
/// copied indicator.
#[derive(Clone)]
pub struct TranslateController {
    api: Arc<dyn PortalApi>,
    state: Arc<Mutex<TranslateState>>,
}

impl TranslateController {
    /// Creates an idle controller backed by the given portal API.
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(TranslateState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, TranslateState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the source text. No side effect beyond the stored value.
    pub fn set_source_text(&self, text: impl Into<String>) {
        self.state().text = text.into();
    }

    /// Current source text.
    pub fn source_text(&self) -> String {
        self.state().text.clone()
    }

    /// Current translation direction.
    pub fn direction(&self) -> Direction {
        self.state().direction
    }

    /// Toggles the direction between the two enumerated values.
    ///
    /// Neither the source text nor an existing result is cleared.
    pub fn swap_direction(&self) {
        let mut state = self.state();
        state.direction = state.direction.swapped();
    }

    /// Dispatches a translation of the current source text.
    ///
    /// A blank source text is a no-op. Dispatch clears the copied indicator;
    /// on failure the stored message is the fixed fallback, never the raw
    /// transport error. Overlapping dispatches follow last-request-wins.
    pub async fn translate(&self) {
        let (request, ticket) = {
            let mut state = self.state();
            if state.text.trim().is_empty() {
                tracing::debug!(
                    target: TRACING_TARGET_TRANSLATE,
                    "Skipping dispatch of blank source text"
                );
                return;
            }
            state.seq += 1;
            state.result = AsyncState::Pending;
            state.copied_at = None;
            (
                TranslateRequest {
                    text: state.text.clone(),
                    direction: state.direction,
                },
                state.seq,
            )
        };

        tracing::debug!(
            target: TRACING_TARGET_TRANSLATE,
            ticket,
            direction = %request.direction,
            chars = request.text.len(),
            "Dispatching translation"
        );

        let outcome = self.api.translate(&request).await;

        let mut state = self.state();
        if state.seq != ticket {
            tracing::debug!(
                target: TRACING_TARGET_TRANSLATE,
                ticket,
                latest = state.seq,
                "Discarding superseded translation response"
            );
            return;
        }

        match outcome {
            Ok(translation) => state.result = AsyncState::Ready(translation),
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_TRANSLATE,
                    ticket,
                    error = %err,
                    "Translation failed"
                );
                state.result = AsyncState::Failed(TRANSLATION_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Current state of the translation result slice.
    pub fn result(&self) -> AsyncState<String> {
        self.state().result.clone()
    }

    /// Copies the translated text to the given clipboard.
    ///
    /// Requires a settled translation. On success the copied indicator turns
    /// on for [`COPY_FEEDBACK_WINDOW`]; a clipboard failure is returned to
    /// the caller as a one-shot notification and leaves all state untouched.
    pub fn copy_result(&self, clipboard: &dyn Clipboard) -> Result<(), ClipboardError> {
        let translation = self
            .state()
            .result
            .value()
            .cloned()
            .ok_or(ClipboardError::NothingToCopy)?;

        clipboard.set_text(&translation)?;
        self.state().copied_at = Some(Instant::now());
        Ok(())
    }

    /// True within the feedback window after a successful copy.
    pub fn copied(&self) -> bool {
        self.state()
            .copied_at
            .is_some_and(|at| at.elapsed() < COPY_FEEDBACK_WINDOW)
    }
}

