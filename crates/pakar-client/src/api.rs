//! The `PortalApi` seam between transport and controllers.

use async_trait::async_trait;
use pakar_core::{FacultyData, Researcher, SearchQuery, TranslateRequest};

use crate::Result;

/// Operations the portal backends expose to the client.
///
/// Implemented over HTTP by [`crate::PortalClient`]; controllers depend only
/// on this trait so they can be exercised against scripted implementations.
#[async_trait]
pub trait PortalApi: Send + Sync {
    /// Requests researcher recommendations for a topic.
    ///
    /// The returned sequence is in the backend's rank order.
    async fn recommend(&self, query: &SearchQuery) -> Result<Vec<Researcher>>;

    /// Fetches the closed set of faculty names.
    async fn faculties(&self) -> Result<Vec<String>>;

    /// Fetches the department/researcher tree of one faculty.
    async fn faculty_data(&self, faculty: &str) -> Result<FacultyData>;

    /// Translates text in the requested direction.
    async fn translate(&self, request: &TranslateRequest) -> Result<String>;
}
