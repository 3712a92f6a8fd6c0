#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod directory;
mod query;
mod recommend;
mod state;
mod translate;

#[doc(hidden)]
pub mod prelude;

pub use crate::directory::{FacultyData, FacultyList, ResearcherInfo};
pub use crate::query::{Metric, Model, ScoreOrdering, ScorePresentation, SearchQuery};
pub use crate::recommend::{RecommendResponse, Researcher};
pub use crate::state::AsyncState;
pub use crate::translate::{Direction, TranslateRequest, TranslateResponse};
