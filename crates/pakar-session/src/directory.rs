//! Directory browse controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pakar_client::PortalApi;
use pakar_core::{AsyncState, FacultyData, ResearcherInfo};

use crate::TRACING_TARGET_DIRECTORY;

/// Generic user-facing message when the faculty list cannot be loaded.
const FACULTIES_FAILED_MESSAGE: &str = "Could not load faculties.";

/// Generic user-facing message when a faculty's data cannot be loaded.
const FACULTY_DATA_FAILED_MESSAGE: &str = "Could not load faculty data.";

#[derive(Default)]
struct DirectoryState {
    faculties: AsyncState<Vec<String>>,
    selected: AsyncState<FacultyData>,
    /// Sequence number of the most recently issued selection.
    seq: u64,
}

/// Controller for the faculty browsing flow.
///
/// Owns two independent async slices: the session-scoped faculty list
/// (fetched once) and the data of the currently selected faculty (fetched per
/// selection, last-selection-wins). Department ordering is a read-time
/// concern; nothing sorted is ever stored back.
#[derive(Clone)]
pub struct DirectoryController {
    api: Arc<dyn PortalApi>,
    state: Arc<Mutex<DirectoryState>>,
}

impl DirectoryController {
    /// Creates an idle controller backed by the given portal API.
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(DirectoryState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, DirectoryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Loads the faculty list, once per session.
    ///
    /// Subsequent calls are no-ops once the slice has left idle. On failure
    /// the slice settles failed and the selector simply has no options;
    /// nothing propagates to the caller.
    pub async fn load_faculties(&self) {
        {
            let mut state = self.state();
            if !matches!(state.faculties, AsyncState::Idle) {
                return;
            }
            state.faculties = AsyncState::Pending;
        }

        match self.api.faculties().await {
            Ok(faculties) => {
                tracing::debug!(
                    target: TRACING_TARGET_DIRECTORY,
                    count = faculties.len(),
                    "Faculty list loaded"
                );
                self.state().faculties = AsyncState::Ready(faculties);
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_DIRECTORY,
                    error = %err,
                    "Faculty list load failed"
                );
                self.state().faculties = AsyncState::Failed(FACULTIES_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Fetches the department tree of the named faculty.
    ///
    /// An empty name is a no-op. Overlapping selections follow
    /// last-request-wins via the controller's sequence ticket.
    pub async fn select_faculty(&self, name: &str) {
        if name.trim().is_empty() {
            tracing::debug!(
                target: TRACING_TARGET_DIRECTORY,
                "Skipping selection of empty faculty name"
            );
            return;
        }

        let ticket = {
            let mut state = self.state();
            state.seq += 1;
            state.selected = AsyncState::Pending;
            state.seq
        };

        tracing::debug!(
            target: TRACING_TARGET_DIRECTORY,
            ticket,
            faculty = %name,
            "Selecting faculty"
        );

        let outcome = self.api.faculty_data(name).await;

        let mut state = self.state();
        if state.seq != ticket {
            tracing::debug!(
                target: TRACING_TARGET_DIRECTORY,
                ticket,
                latest = state.seq,
                "Discarding superseded faculty response"
            );
            return;
        }

        match outcome {
            Ok(data) => state.selected = AsyncState::Ready(data),
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_DIRECTORY,
                    ticket,
                    faculty = %name,
                    error = %err,
                    "Faculty data load failed"
                );
                state.selected = AsyncState::Failed(FACULTY_DATA_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Current state of the faculty list slice.
    pub fn faculties(&self) -> AsyncState<Vec<String>> {
        self.state().faculties.clone()
    }

    /// Current state of the selected-faculty slice.
    pub fn selected(&self) -> AsyncState<FacultyData> {
        self.state().selected.clone()
    }

    /// Departments of the selected faculty, sorted by name ascending.
    ///
    /// Sorted fresh on every call from the stored (unsorted) map.
    pub fn sorted_departments(&self) -> Option<Vec<(String, Vec<ResearcherInfo>)>> {
        let state = self.state();
        let data = state.selected.value()?;
        Some(
            data.sorted_departments()
                .into_iter()
                .map(|(name, researchers)| (name.to_string(), researchers.to_vec()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use pakar_test::{MockPortal, ScriptedResponse};

    use super::*;

    fn faculty_data(faculty: &str, departments: &[&str]) -> FacultyData {
        FacultyData {
            faculty: faculty.to_string(),
            departments: departments
                .iter()
                .map(|name| (name.to_string(), Vec::new()))
                .collect::<HashMap<_, _>>(),
        }
    }

    fn controller(portal: &MockPortal) -> DirectoryController {
        DirectoryController::new(Arc::new(portal.clone()))
    }

    #[tokio::test]
    async fn faculty_list_is_fetched_once_per_session() {
        let portal = MockPortal::new();
        portal.script_faculties(ScriptedResponse::Ok(vec!["Engineering".to_string()]));
        let controller = controller(&portal);

        controller.load_faculties().await;
        controller.load_faculties().await;

        assert_eq!(portal.faculties_calls(), 1);
        assert_eq!(
            controller.faculties(),
            AsyncState::Ready(vec!["Engineering".to_string()])
        );
    }

    #[tokio::test]
    async fn faculty_list_failure_settles_without_propagating() {
        let portal = MockPortal::new();
        portal.script_faculties(ScriptedResponse::HttpStatus(503));
        let controller = controller(&portal);

        controller.load_faculties().await;

        assert!(controller.faculties().is_failed());
        assert_eq!(controller.selected(), AsyncState::Idle);
    }

    #[tokio::test]
    async fn empty_selection_is_a_no_op() {
        let portal = MockPortal::new();
        let controller = controller(&portal);

        controller.select_faculty("").await;
        controller.select_faculty("   ").await;

        assert_eq!(portal.faculty_data_calls(), 0);
        assert_eq!(controller.selected(), AsyncState::Idle);
    }

    #[tokio::test]
    async fn departments_read_back_sorted_regardless_of_server_order() {
        let portal = MockPortal::new();
        portal.script_faculty_data(ScriptedResponse::Ok(faculty_data(
            "Engineering",
            &["CS", "Arts", "Biomed"],
        )));
        let controller = controller(&portal);

        controller.select_faculty("Engineering").await;

        let names: Vec<_> = controller
            .sorted_departments()
            .unwrap()
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, vec!["Arts", "Biomed", "CS"]);
    }

    #[tokio::test(start_paused = true)]
    async fn last_selection_wins_when_settles_arrive_out_of_order() {
        let portal = MockPortal::new();
        portal.script_faculty_data_after(
            Duration::from_millis(100),
            ScriptedResponse::Ok(faculty_data("Slow Faculty", &["One"])),
        );
        portal.script_faculty_data_after(
            Duration::from_millis(10),
            ScriptedResponse::Ok(faculty_data("Fast Faculty", &["Two"])),
        );
        let controller = controller(&portal);

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.select_faculty("Slow Faculty").await })
        };
        tokio::time::sleep(Duration::from_millis(1)).await;
        let second = {
            let controller = controller.clone();
            tokio::spawn(async move { controller.select_faculty("Fast Faculty").await })
        };

        first.await.unwrap();
        second.await.unwrap();

        let selected = controller.selected();
        assert_eq!(selected.value().unwrap().faculty, "Fast Faculty");
    }
}
