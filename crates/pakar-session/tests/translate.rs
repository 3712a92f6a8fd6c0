//! Translation controller tests.
//!
//! These live as integration tests (rather than a unit test module) because
//! `MockClipboard` in `pakar-test` implements the `Clipboard` trait of the
//! externally linked `pakar-session` library; a unit test build of the crate
//! would see a distinct copy of that trait and fail to unify the impls.

use std::sync::Arc;
use std::time::Duration;

use pakar_core::{AsyncState, Direction};
use pakar_session::{
    COPY_FEEDBACK_WINDOW, ClipboardError, TRANSLATION_FAILED_MESSAGE, TranslateController,
};
use pakar_test::{MockClipboard, MockPortal, ScriptedResponse};

fn controller(portal: &MockPortal) -> TranslateController {
    TranslateController::new(Arc::new(portal.clone()))
}

#[tokio::test]
async fn blank_text_never_reaches_the_adapter() {
    let portal = MockPortal::new();
    let controller = controller(&portal);

    controller.translate().await;
    controller.set_source_text("  \n ");
    controller.translate().await;

    assert_eq!(portal.translate_calls(), 0);
    assert_eq!(controller.result(), AsyncState::Idle);
}

#[tokio::test(start_paused = true)]
async fn translate_then_copy_runs_the_full_window() {
    let portal = MockPortal::new();
    portal.script_translate(ScriptedResponse::Ok("halo".to_string()));
    let controller = controller(&portal);
    let clipboard = MockClipboard::new();

    controller.set_source_text("hello");
    controller.translate().await;
    assert_eq!(controller.result(), AsyncState::Ready("halo".to_string()));
    assert!(!controller.copied());

    controller.copy_result(&clipboard).unwrap();
    assert_eq!(clipboard.writes(), vec!["halo".to_string()]);
    assert!(controller.copied());

    tokio::time::advance(COPY_FEEDBACK_WINDOW).await;
    assert!(!controller.copied());
    // The window only affects the indicator, never the result.
    assert_eq!(controller.result(), AsyncState::Ready("halo".to_string()));
}

#[tokio::test]
async fn failure_stores_the_fixed_fallback_message() {
    let portal = MockPortal::new();
    portal.script_translate(ScriptedResponse::HttpStatus(502));
    let controller = controller(&portal);

    controller.set_source_text("hello");
    controller.translate().await;

    assert_eq!(
        controller.result(),
        AsyncState::Failed(TRANSLATION_FAILED_MESSAGE.to_string())
    );
}

#[tokio::test]
async fn swap_direction_keeps_text_and_result() {
    let portal = MockPortal::new();
    portal.script_translate(ScriptedResponse::Ok("halo".to_string()));
    let controller = controller(&portal);

    controller.set_source_text("hello");
    controller.translate().await;
    assert_eq!(controller.direction(), Direction::IdToEn);

    controller.swap_direction();

    assert_eq!(controller.direction(), Direction::EnToId);
    assert_eq!(controller.source_text(), "hello");
    assert_eq!(controller.result(), AsyncState::Ready("halo".to_string()));
}

#[tokio::test]
async fn copy_without_result_is_rejected() {
    let portal = MockPortal::new();
    let controller = controller(&portal);
    let clipboard = MockClipboard::new();

    let err = controller.copy_result(&clipboard).unwrap_err();
    assert!(matches!(err, ClipboardError::NothingToCopy));
    assert!(clipboard.writes().is_empty());
}

#[tokio::test]
async fn clipboard_failure_is_one_shot_and_leaves_state_untouched() {
    let portal = MockPortal::new();
    portal.script_translate(ScriptedResponse::Ok("halo".to_string()));
    let controller = controller(&portal);
    let clipboard = MockClipboard::failing();

    controller.set_source_text("hello");
    controller.translate().await;

    let err = controller.copy_result(&clipboard).unwrap_err();
    assert!(matches!(err, ClipboardError::Write(_)));
    assert!(!controller.copied());
    assert_eq!(controller.result(), AsyncState::Ready("halo".to_string()));
}

#[tokio::test(start_paused = true)]
async fn new_dispatch_clears_the_copied_indicator() {
    let portal = MockPortal::new();
    portal.script_translate(ScriptedResponse::Ok("halo".to_string()));
    portal.script_translate(ScriptedResponse::Ok("dunia".to_string()));
    let controller = controller(&portal);
    let clipboard = MockClipboard::new();

    controller.set_source_text("hello");
    controller.translate().await;
    controller.copy_result(&clipboard).unwrap();
    assert!(controller.copied());

    controller.set_source_text("world");
    controller.translate().await;

    assert!(!controller.copied());
    assert_eq!(controller.result(), AsyncState::Ready("dunia".to_string()));
}

#[tokio::test(start_paused = true)]
async fn last_request_wins_when_settles_arrive_out_of_order() {
    let portal = MockPortal::new();
    portal.script_translate_after(
        Duration::from_millis(100),
        ScriptedResponse::Ok("slow".to_string()),
    );
    portal.script_translate_after(
        Duration::from_millis(10),
        ScriptedResponse::Ok("fast".to_string()),
    );
    let controller = controller(&portal);
    controller.set_source_text("hello");

    let first = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.translate().await })
    };
    tokio::time::sleep(Duration::from_millis(1)).await;
    let second = {
        let controller = controller.clone();
        tokio::spawn(async move { controller.translate().await })
    };

    first.await.unwrap();
    second.await.unwrap();

    assert_eq!(controller.result(), AsyncState::Ready("fast".to_string()));
}
