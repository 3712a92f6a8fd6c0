//! Async request lifecycle state.

/// Lifecycle of a single in-flight or completed request.
///
/// Every controller slice starts as [`AsyncState::Idle`], moves to
/// [`AsyncState::Pending`] on dispatch, and settles into exactly one terminal
/// state per request. A newer dispatch supersedes an older one: the stale
/// settle is discarded and never overwrites the state of the latest request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsyncState<T> {
    /// No request has been dispatched yet.
    Idle,
    /// A request is in flight.
    Pending,
    /// The latest request settled successfully.
    Ready(T),
    /// The latest request failed; carries the user-facing message.
    Failed(String),
}

// Manual impl: the slice starts idle whether or not `T` has a default.
impl<T> Default for AsyncState<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> AsyncState<T> {
    /// Returns true while a request is in flight.
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns true if the latest request settled successfully.
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    /// Returns true if the latest request failed.
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the settled value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure message, if any.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Maps the settled value, preserving the other states.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> AsyncState<U> {
        match self {
            Self::Idle => AsyncState::Idle,
            Self::Pending => AsyncState::Pending,
            Self::Ready(value) => AsyncState::Ready(f(value)),
            Self::Failed(message) => AsyncState::Failed(message),
        }
    }
}
