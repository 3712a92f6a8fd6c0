//! Faculty directory types returned by the `/faculties` and
//! `/faculty-data/{name}` endpoints.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Response body of the `/faculties` endpoint.
///
/// Faculty names are a closed set for the session; the list is fetched once
/// at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyList {
    pub faculties: Vec<String>,
}

/// One researcher as listed in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResearcherInfo {
    pub name: String,
    pub research_center: String,
    pub focus_topics: Vec<String>,
}

/// Response body of the `/faculty-data/{name}` endpoint.
///
/// Department iteration order of the raw map is unspecified; presentation
/// reads departments through [`FacultyData::sorted_departments`], which
/// re-sorts deterministically on every call. The sort is never persisted
/// back into the map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyData {
    pub faculty: String,
    pub departments: HashMap<String, Vec<ResearcherInfo>>,
}

impl FacultyData {
    /// Returns departments sorted lexicographically by name, ascending.
    pub fn sorted_departments(&self) -> Vec<(&str, &[ResearcherInfo])> {
        let mut departments: Vec<_> = self
            .departments
            .iter()
            .map(|(name, researchers)| (name.as_str(), researchers.as_slice()))
            .collect();
        departments.sort_by(|a, b| a.0.cmp(b.0));
        departments
    }
}
