#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for the main library
pub const TRACING_TARGET: &str = "pakar_client";

/// Tracing target for HTTP operations
pub const TRACING_TARGET_HTTP: &str = "pakar_client::http";

mod api;
mod client;
mod config;
mod error;

pub use crate::api::PortalApi;
pub use crate::client::PortalClient;
pub use crate::config::PortalConfig;
pub use crate::error::{Error, Result};
