//! Recommendation query controller.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use pakar_client::PortalApi;
use pakar_core::{AsyncState, Metric, Researcher, ScorePresentation, SearchQuery};

use crate::TRACING_TARGET_RECOMMEND;

/// Generic user-facing message for a failed search.
///
/// Raw transport details are logged, not displayed.
pub const SEARCH_FAILED_MESSAGE: &str = "Search failed. Please try again.";

#[derive(Default)]
struct RecommendState {
    results: AsyncState<Vec<Researcher>>,
    /// Distinguishes "never searched" from "searched, zero results".
    searched: bool,
    /// Metric that produced the currently displayed results, if any.
    metric: Option<Metric>,
    /// Sequence number of the most recently issued request.
    seq: u64,
}

/// Controller for the topic-to-researchers search flow.
///
/// Lifecycle per request: idle, pending, then exactly one of ready or failed.
/// Overlapping searches follow last-request-wins: each dispatch takes a fresh
/// sequence ticket, and a settle whose ticket is no longer the latest is
/// discarded without touching visible state.
///
/// Cloning yields another handle onto the same session state.
#[derive(Clone)]
pub struct RecommendController {
    api: Arc<dyn PortalApi>,
    state: Arc<Mutex<RecommendState>>,
}

impl RecommendController {
    /// Creates an idle controller backed by the given portal API.
    pub fn new(api: Arc<dyn PortalApi>) -> Self {
        Self {
            api,
            state: Arc::new(Mutex::new(RecommendState::default())),
        }
    }

    fn state(&self) -> MutexGuard<'_, RecommendState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Dispatches a search for the given query.
    ///
    /// A query with a blank topic is a no-op: no request is sent and no state
    /// changes. Otherwise the previous result set is cleared, the slice moves
    /// to pending, and the settle is written back only if no newer search was
    /// issued in the meantime.
    pub async fn search(&self, query: SearchQuery) {
        if !query.is_dispatchable() {
            tracing::debug!(
                target: TRACING_TARGET_RECOMMEND,
                "Skipping dispatch of blank topic"
            );
            return;
        }

        let ticket = {
            let mut state = self.state();
            state.seq += 1;
            state.results = AsyncState::Pending;
            state.searched = true;
            state.metric = Some(query.metric);
            state.seq
        };

        tracing::debug!(
            target: TRACING_TARGET_RECOMMEND,
            ticket,
            topic = %query.topic,
            model = %query.model,
            metric = %query.metric,
            "Dispatching search"
        );

        let outcome = self.api.recommend(&query).await;

        let mut state = self.state();
        if state.seq != ticket {
            tracing::debug!(
                target: TRACING_TARGET_RECOMMEND,
                ticket,
                latest = state.seq,
                "Discarding superseded search response"
            );
            return;
        }

        match outcome {
            Ok(researchers) => {
                tracing::debug!(
                    target: TRACING_TARGET_RECOMMEND,
                    ticket,
                    count = researchers.len(),
                    "Search settled"
                );
                state.results = AsyncState::Ready(researchers);
            }
            Err(err) => {
                tracing::warn!(
                    target: TRACING_TARGET_RECOMMEND,
                    ticket,
                    error = %err,
                    "Search failed"
                );
                state.results = AsyncState::Failed(SEARCH_FAILED_MESSAGE.to_string());
            }
        }
    }

    /// Current state of the result slice, in backend rank order when ready.
    pub fn results(&self) -> AsyncState<Vec<Researcher>> {
        self.state().results.clone()
    }

    /// True once any search has been dispatched this session.
    pub fn has_searched(&self) -> bool {
        self.state().searched
    }

    /// Metric the displayed result set was produced with, if any.
    pub fn result_metric(&self) -> Option<Metric> {
        self.state().metric
    }

    /// Presentation rule for the displayed scores.
    ///
    /// Recomputed from the tagged metric on every call; never cached.
    pub fn score_presentation(&self) -> Option<ScorePresentation> {
        self.result_metric().map(Metric::presentation)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pakar_test::{MockPortal, ScriptedResponse};
    use pakar_core::Model;

    use super::*;

    fn researcher(name: &str, score: f64) -> Researcher {
        Researcher {
            name: name.to_string(),
            score,
            faculty: None,
            department: None,
            research_center: None,
            focus_topics: None,
        }
    }

    fn controller(portal: &MockPortal) -> RecommendController {
        RecommendController::new(Arc::new(portal.clone()))
    }

    #[tokio::test]
    async fn blank_topic_never_reaches_the_adapter() {
        let portal = MockPortal::new();
        let controller = controller(&portal);

        controller
            .search(SearchQuery::new("   ", Model::Bert, Metric::Jaccard))
            .await;

        assert_eq!(portal.recommend_calls(), 0);
        assert_eq!(controller.results(), AsyncState::Idle);
        assert!(!controller.has_searched());
    }

    #[tokio::test]
    async fn successful_search_preserves_backend_order() {
        let portal = MockPortal::new();
        portal.script_recommend(ScriptedResponse::Ok(vec![
            researcher("Low Score First", 0.1),
            researcher("High Score Second", 0.9),
        ]));
        let controller = controller(&portal);

        controller
            .search(SearchQuery::new("robotics", Model::MpNet, Metric::Hamming))
            .await;

        let results = controller.results();
        let names: Vec<_> = results
            .value()
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["Low Score First", "High Score Second"]);
        assert!(controller.has_searched());
        assert_eq!(controller.result_metric(), Some(Metric::Hamming));
    }

    #[tokio::test]
    async fn failed_search_is_distinguishable_from_idle() {
        let portal = MockPortal::new();
        portal.script_recommend(ScriptedResponse::HttpStatus(500));
        let controller = controller(&portal);

        controller
            .search(SearchQuery::new("robotics", Model::Bert, Metric::Jaccard))
            .await;

        assert_eq!(
            controller.results(),
            AsyncState::Failed(SEARCH_FAILED_MESSAGE.to_string())
        );
        assert!(controller.has_searched());
        assert!(controller.results().value().is_none());
    }

    #[tokio::test]
    async fn failed_state_is_not_sticky() {
        let portal = MockPortal::new();
        portal.script_recommend(ScriptedResponse::HttpStatus(500));
        portal.script_recommend(ScriptedResponse::Ok(vec![researcher("Ada", 0.8)]));
        let controller = controller(&portal);

        controller
            .search(SearchQuery::new("nlp", Model::Bert, Metric::Jaccard))
            .await;
        assert!(controller.results().is_failed());

        controller
            .search(SearchQuery::new("nlp", Model::Bert, Metric::Jaccard))
            .await;
        assert!(controller.results().is_ready());
    }

    #[tokio::test(start_paused = true)]
    async fn last_request_wins_when_settles_arrive_out_of_order() {
        let portal = MockPortal::new();
        // First search settles late, second settles early.
        portal.script_recommend_after(
            Duration::from_millis(100),
            ScriptedResponse::Ok(vec![researcher("From First Search", 0.5)]),
        );
        portal.script_recommend_after(
            Duration::from_millis(10),
            ScriptedResponse::Ok(vec![researcher("From Second Search", 0.7)]),
        );
        let controller = controller(&portal);

        let first = {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller
                    .search(SearchQuery::new("first", Model::Bert, Metric::Jaccard))
                    .await;
            })
        };
        // Let the first dispatch take its ticket before issuing the second.
        tokio::time::sleep(Duration::from_millis(1)).await;
        let second = {
            let controller = controller.clone();
            tokio::spawn(async move {
                controller
                    .search(SearchQuery::new("second", Model::Bert, Metric::Jaccard))
                    .await;
            })
        };

        first.await.unwrap();
        second.await.unwrap();

        let results = controller.results();
        let names: Vec<_> = results
            .value()
            .unwrap()
            .iter()
            .map(|r| r.name.as_str())
            .collect();
        assert_eq!(names, vec!["From Second Search"]);
    }

    #[tokio::test]
    async fn presentation_follows_the_metric_of_the_displayed_results() {
        let portal = MockPortal::new();
        portal.script_recommend(ScriptedResponse::Ok(vec![researcher("Ada", 0.3)]));
        let controller = controller(&portal);

        assert_eq!(controller.score_presentation(), None);

        controller
            .search(SearchQuery::new("nlp", Model::XlNet, Metric::KullbackLeibler))
            .await;

        let presentation = controller.score_presentation().unwrap();
        assert_eq!(presentation.label, "Distance");
    }
}
