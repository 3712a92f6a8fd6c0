//! Convenience re-exports of the most commonly used types.

pub use crate::directory::{FacultyData, FacultyList, ResearcherInfo};
pub use crate::query::{Metric, Model, ScoreOrdering, ScorePresentation, SearchQuery};
pub use crate::recommend::{RecommendResponse, Researcher};
pub use crate::state::AsyncState;
pub use crate::translate::{Direction, TranslateRequest, TranslateResponse};
