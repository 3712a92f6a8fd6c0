//! Scriptable `PortalApi` mock.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use async_trait::async_trait;
use pakar_client::{Error, PortalApi, Result};
use pakar_core::{FacultyData, Researcher, SearchQuery, TranslateRequest};

/// Outcome scripted for one mocked call.
#[derive(Debug, Clone)]
pub enum ScriptedResponse<T> {
    /// The call settles successfully with this value.
    Ok(T),
    /// The call fails as if the backend answered with this status.
    HttpStatus(u16),
}

impl<T> ScriptedResponse<T> {
    fn into_result(self) -> Result<T> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::HttpStatus(status) => Err(Error::Http { status }),
        }
    }
}

struct Scripted<T> {
    delay: Duration,
    response: ScriptedResponse<T>,
}

#[derive(Default)]
struct MockPortalState {
    recommend: VecDeque<Scripted<Vec<Researcher>>>,
    faculties: VecDeque<Scripted<Vec<String>>>,
    faculty_data: VecDeque<Scripted<FacultyData>>,
    translate: VecDeque<Scripted<String>>,
    recommend_calls: usize,
    faculties_calls: usize,
    faculty_data_calls: usize,
    translate_calls: usize,
}

/// `PortalApi` implementation with scripted per-call responses.
///
/// Responses are queued per endpoint and consumed in order; each entry
/// carries an optional latency so overlapping dispatches can be made to
/// settle out of order under paused tokio time. Calls beyond the script
/// panic, and every call is counted so tests can assert that invalid input
/// never reached the adapter.
#[derive(Clone, Default)]
pub struct MockPortal {
    state: Arc<Mutex<MockPortalState>>,
}

impl MockPortal {
    /// Creates a mock with empty scripts.
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, MockPortalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Queues a response for the next `recommend` call.
    pub fn script_recommend(&self, response: ScriptedResponse<Vec<Researcher>>) {
        self.script_recommend_after(Duration::ZERO, response);
    }

    /// Queues a response for the next `recommend` call, settling after `delay`.
    pub fn script_recommend_after(
        &self,
        delay: Duration,
        response: ScriptedResponse<Vec<Researcher>>,
    ) {
        self.state()
            .recommend
            .push_back(Scripted { delay, response });
    }

    /// Queues a response for the next `faculties` call.
    pub fn script_faculties(&self, response: ScriptedResponse<Vec<String>>) {
        self.state().faculties.push_back(Scripted {
            delay: Duration::ZERO,
            response,
        });
    }

    /// Queues a response for the next `faculty_data` call.
    pub fn script_faculty_data(&self, response: ScriptedResponse<FacultyData>) {
        self.script_faculty_data_after(Duration::ZERO, response);
    }

    /// Queues a response for the next `faculty_data` call, settling after `delay`.
    pub fn script_faculty_data_after(
        &self,
        delay: Duration,
        response: ScriptedResponse<FacultyData>,
    ) {
        self.state()
            .faculty_data
            .push_back(Scripted { delay, response });
    }

    /// Queues a response for the next `translate` call.
    pub fn script_translate(&self, response: ScriptedResponse<String>) {
        self.script_translate_after(Duration::ZERO, response);
    }

    /// Queues a response for the next `translate` call, settling after `delay`.
    pub fn script_translate_after(&self, delay: Duration, response: ScriptedResponse<String>) {
        self.state()
            .translate
            .push_back(Scripted { delay, response });
    }

    /// Number of `recommend` calls made so far.
    pub fn recommend_calls(&self) -> usize {
        self.state().recommend_calls
    }

    /// Number of `faculties` calls made so far.
    pub fn faculties_calls(&self) -> usize {
        self.state().faculties_calls
    }

    /// Number of `faculty_data` calls made so far.
    pub fn faculty_data_calls(&self) -> usize {
        self.state().faculty_data_calls
    }

    /// Number of `translate` calls made so far.
    pub fn translate_calls(&self) -> usize {
        self.state().translate_calls
    }
}

async fn settle<T>(scripted: Option<Scripted<T>>, endpoint: &str) -> Result<T> {
    let scripted = scripted.unwrap_or_else(|| panic!("no scripted {endpoint} response left"));
    if !scripted.delay.is_zero() {
        tokio::time::sleep(scripted.delay).await;
    }
    scripted.response.into_result()
}

#[async_trait]
impl PortalApi for MockPortal {
    async fn recommend(&self, _query: &SearchQuery) -> Result<Vec<Researcher>> {
        let scripted = {
            let mut state = self.state();
            state.recommend_calls += 1;
            state.recommend.pop_front()
        };
        settle(scripted, "recommend").await
    }

    async fn faculties(&self) -> Result<Vec<String>> {
        let scripted = {
            let mut state = self.state();
            state.faculties_calls += 1;
            state.faculties.pop_front()
        };
        settle(scripted, "faculties").await
    }

    async fn faculty_data(&self, _faculty: &str) -> Result<FacultyData> {
        let scripted = {
            let mut state = self.state();
            state.faculty_data_calls += 1;
            state.faculty_data.pop_front()
        };
        settle(scripted, "faculty_data").await
    }

    async fn translate(&self, _request: &TranslateRequest) -> Result<String> {
        let scripted = {
            let mut state = self.state();
            state.translate_calls += 1;
            state.translate.pop_front()
        };
        settle(scripted, "translate").await
    }
}
