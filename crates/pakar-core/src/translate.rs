//! Translation request and response payloads for the `/translate` endpoint.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Translation direction between Indonesian and English.
///
/// Exactly two values exist; the serialized form is the wire identifier the
/// translation backend expects.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
pub enum Direction {
    /// Indonesian to English.
    #[default]
    #[serde(rename = "id-en")]
    #[strum(serialize = "id-en")]
    IdToEn,
    /// English to Indonesian.
    #[serde(rename = "en-id")]
    #[strum(serialize = "en-id")]
    EnToId,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn swapped(self) -> Self {
        match self {
            Self::IdToEn => Self::EnToId,
            Self::EnToId => Self::IdToEn,
        }
    }
}

/// Request body of the `/translate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateRequest {
    pub text: String,
    pub direction: Direction,
}

/// Response body of the `/translate` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslateResponse {
    pub translation: String,
}
