//! Scriptable mock implementations for controller tests.

mod clipboard;
mod portal;

pub use clipboard::MockClipboard;
pub use portal::{MockPortal, ScriptedResponse};
