//! Recommendation results returned by the `/recommend` endpoint.

use serde::{Deserialize, Serialize};

/// One recommended researcher.
///
/// `name` and `score` are always present; the organizational fields are
/// optional in the backend's schema. The score is reported verbatim and its
/// reading direction depends on the metric the query was made with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Researcher {
    pub name: String,
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub faculty: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub research_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_topics: Option<Vec<String>>,
}

/// Response body of the `/recommend` endpoint.
///
/// The order of `recommendations` is the backend's rank order and is
/// preserved as-is; results are never re-sorted by score client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendResponse {
    pub recommendations: Vec<Researcher>,
}

impl RecommendResponse {
    /// Iterates results with their 1-based display rank, in backend order.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &Researcher)> {
        self.recommendations
            .iter()
            .enumerate()
            .map(|(index, researcher)| (index + 1, researcher))
    }
}
