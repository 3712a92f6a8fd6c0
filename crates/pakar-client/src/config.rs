//! Portal client configuration.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

/// Base URLs of the two portal backends.
///
/// Each backend gets exactly one explicitly configured base URL, resolved
/// from the environment at deploy time; the defaults point at the local
/// development setup. There is no runtime fallback chain.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
pub struct PortalConfig {
    /// Base URL of the recommendation and directory backend
    #[cfg_attr(
        feature = "config",
        arg(
            long = "portal-api-url",
            env = "PORTAL_API_URL",
            default_value = "http://localhost:8000"
        )
    )]
    #[serde(default = "default_portal_api_url")]
    pub portal_api_url: String,

    /// Base URL of the translation backend
    #[cfg_attr(
        feature = "config",
        arg(
            long = "translator-api-url",
            env = "TRANSLATOR_API_URL",
            default_value = "http://127.0.0.1:8001"
        )
    )]
    #[serde(default = "default_translator_api_url")]
    pub translator_api_url: String,
}

fn default_portal_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_translator_api_url() -> String {
    "http://127.0.0.1:8001".to_string()
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            portal_api_url: default_portal_api_url(),
            translator_api_url: default_translator_api_url(),
        }
    }
}

impl PortalConfig {
    /// Create a new configuration with both base URLs.
    pub fn new(portal_api_url: impl Into<String>, translator_api_url: impl Into<String>) -> Self {
        Self {
            portal_api_url: portal_api_url.into(),
            translator_api_url: translator_api_url.into(),
        }
    }

    /// Set the recommendation/directory backend base URL.
    #[must_use]
    pub fn with_portal_api_url(mut self, url: impl Into<String>) -> Self {
        self.portal_api_url = url.into();
        self
    }

    /// Set the translation backend base URL.
    #[must_use]
    pub fn with_translator_api_url(mut self, url: impl Into<String>) -> Self {
        self.translator_api_url = url.into();
        self
    }
}
