//! Search query parameters: topic, embedding model, and scoring metric.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Embedding model hosted by the recommendation backend.
///
/// The set is closed; the backend recognizes exactly these identifiers. The
/// serialized form is the display name the backend expects on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
pub enum Model {
    #[serde(rename = "BERT")]
    #[strum(serialize = "BERT")]
    Bert,
    #[serde(rename = "DistilBERT")]
    #[strum(serialize = "DistilBERT")]
    DistilBert,
    #[serde(rename = "Albert")]
    #[strum(serialize = "Albert")]
    Albert,
    #[serde(rename = "XLNet")]
    #[strum(serialize = "XLNet")]
    XlNet,
    #[serde(rename = "MPNet")]
    #[strum(serialize = "MPNet")]
    MpNet,
}

/// Similarity or distance function used by the backend to rank researchers.
///
/// Metrics are partitioned into two kinds: similarity-type metrics where a
/// higher score is better, and distance-type metrics where a lower score is
/// better. The partition drives [`Metric::presentation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "config", derive(clap::ValueEnum))]
pub enum Metric {
    #[serde(rename = "Cosine Similarity")]
    #[strum(serialize = "Cosine Similarity")]
    CosineSimilarity,
    #[serde(rename = "Hamming")]
    #[strum(serialize = "Hamming")]
    Hamming,
    #[serde(rename = "Jaccard")]
    #[strum(serialize = "Jaccard")]
    Jaccard,
    #[serde(rename = "Minkowski")]
    #[strum(serialize = "Minkowski")]
    Minkowski,
    #[serde(rename = "Kullback-Leibler")]
    #[strum(serialize = "Kullback-Leibler")]
    KullbackLeibler,
}

/// How a score column should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrdering {
    /// Similarity-type metrics: a higher score means a closer match.
    HigherIsBetter,
    /// Distance-type metrics: a lower score means a closer match.
    LowerIsBetter,
}

/// Presentation rule for a result set's score column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePresentation {
    /// Column label shown next to the score.
    pub label: &'static str,
    /// Reading direction of the score.
    pub ordering: ScoreOrdering,
}

impl Metric {
    /// Returns true for distance-type metrics (lower is better).
    pub fn is_distance(self) -> bool {
        matches!(self, Self::Minkowski | Self::KullbackLeibler)
    }

    /// Returns the presentation rule for scores produced with this metric.
    ///
    /// This is a pure function of the metric and must be re-read on every
    /// render; it is never cached against a previously selected metric.
    pub fn presentation(self) -> ScorePresentation {
        if self.is_distance() {
            ScorePresentation {
                label: "Distance",
                ordering: ScoreOrdering::LowerIsBetter,
            }
        } else {
            ScorePresentation {
                label: "Similarity Score",
                ordering: ScoreOrdering::HigherIsBetter,
            }
        }
    }
}

/// Parameters of one recommendation search.
///
/// A plain value holder: constructing or mutating a query has no side effect.
/// Dispatch is a separate, explicit controller action gated on
/// [`SearchQuery::is_dispatchable`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Free-text research topic entered by the user.
    pub topic: String,
    /// Embedding model to query with.
    pub model: Model,
    /// Scoring metric to rank with.
    pub metric: Metric,
}

impl SearchQuery {
    /// Creates a query for the given topic with the given parameters.
    pub fn new(topic: impl Into<String>, model: Model, metric: Metric) -> Self {
        Self {
            topic: topic.into(),
            model,
            metric,
        }
    }

    /// Returns true iff the query may be dispatched.
    ///
    /// A query is dispatchable when the topic is non-empty after trimming;
    /// whitespace-only input never reaches the network.
    pub fn is_dispatchable(&self) -> bool {
        !self.topic.trim().is_empty()
    }
}
