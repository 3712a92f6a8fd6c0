#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library
pub const TRACING_TARGET: &str = "pakar_session";

/// Tracing target for the recommendation query controller
pub const TRACING_TARGET_RECOMMEND: &str = "pakar_session::recommend";

/// Tracing target for the directory browse controller
pub const TRACING_TARGET_DIRECTORY: &str = "pakar_session::directory";

/// Tracing target for the translation controller
pub const TRACING_TARGET_TRANSLATE: &str = "pakar_session::translate";

mod clipboard;
mod directory;
mod recommend;
mod translate;

pub use crate::clipboard::{Clipboard, ClipboardError, SystemClipboard};
pub use crate::directory::DirectoryController;
pub use crate::recommend::{RecommendController, SEARCH_FAILED_MESSAGE};
pub use crate::translate::{COPY_FEEDBACK_WINDOW, TRANSLATION_FAILED_MESSAGE, TranslateController};
