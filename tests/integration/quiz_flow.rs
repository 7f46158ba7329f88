//! Integration tests for the quiz session driven end to end
//!
//! Requests run on the tokio runtime against a scripted service; completions
//! are fed back through the driver exactly as the terminal app does.

use std::sync::Arc;
use std::time::Duration;

use super::common::fixtures::{check_result, driver, quiz, sample_quiz};
use bidquiz::api::{ApiError, MockQuizService};
use bidquiz::data::{Database, MemoryPreferenceStore, SqlitePreferenceStore};
use bidquiz::session::{CheckState, QuizState, SessionDriver};
use bidquiz::Convention;
use tempfile::TempDir;

/// Yield until the service has seen `n` quiz fetches
async fn wait_for_quiz_calls(service: &MockQuizService, n: usize) {
    while service.quiz_calls() < n {
        tokio::task::yield_now().await;
    }
}

/// Apply every outstanding completion, returning how many were current
async fn drain(driver: &mut SessionDriver) -> usize {
    let mut applied = 0;
    while driver.in_flight() > 0 {
        let completion = driver.next_completion().await.expect("channel open");
        if driver.apply(completion) {
            applied += 1;
        }
    }
    applied
}

fn memory_driver(service: MockQuizService, dir: &TempDir) -> SessionDriver {
    driver(
        service,
        Arc::new(MemoryPreferenceStore::new()),
        dir.path().join("exports"),
    )
}

/// A slow first response must not overwrite the quiz from a later request
#[tokio::test]
async fn test_second_quiz_wins_when_first_is_slow() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz_after(quiz("FIRST.A.A.A"), Duration::from_millis(150))
        .with_quiz(quiz("SECOND.K.K.K"));
    let mut driver = memory_driver(service.clone(), &dir);

    driver.start_new_quiz();
    wait_for_quiz_calls(&service, 1).await;
    driver.start_new_quiz();

    let applied = drain(&mut driver).await;
    assert_eq!(applied, 1, "only the latest response is applied");
    assert_eq!(driver.quiz().quiz().unwrap().hand, "SECOND.K.K.K");
}

/// A fast stale response must not end the loading state of a newer request
#[tokio::test]
async fn test_stale_fast_response_keeps_loading() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(quiz("FIRST.A.A.A"))
        .with_quiz_after(quiz("SECOND.K.K.K"), Duration::from_millis(100));
    let mut driver = memory_driver(service.clone(), &dir);

    driver.start_new_quiz();
    wait_for_quiz_calls(&service, 1).await;
    driver.start_new_quiz();

    let first = driver.next_completion().await.unwrap();
    assert!(!driver.apply(first));
    assert!(driver.quiz().is_loading());

    drain(&mut driver).await;
    assert_eq!(driver.quiz().quiz().unwrap().hand, "SECOND.K.K.K");
}

#[tokio::test]
async fn test_server_error_then_retry() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz_error(ApiError::Status {
            status: 500,
            message: None,
        })
        .with_quiz(sample_quiz());
    let mut driver = memory_driver(service, &dir);

    driver.start_new_quiz();
    driver.settle().await;
    match driver.quiz().state() {
        QuizState::LoadError { message } => assert!(message.contains("500"), "{message}"),
        other => panic!("expected LoadError, got {other:?}"),
    }

    driver.start_new_quiz();
    driver.settle().await;
    assert!(driver.quiz().error_message().is_none());
    assert_eq!(driver.quiz().quiz(), Some(&sample_quiz()));
}

/// The chosen convention survives a restart through the SQLite store
#[tokio::test]
async fn test_convention_preference_round_trip() {
    let dir = TempDir::new().unwrap();
    let db_path = dir.path().join("bidquiz.db");

    {
        let db = Database::open(db_path.clone()).unwrap();
        let mut first = driver(
            MockQuizService::new(),
            Arc::new(SqlitePreferenceStore::new(&db)),
            dir.path().join("exports"),
        );
        first.select_convention(Convention::Precision);
    }

    let db = Database::open(db_path).unwrap();
    let mut second = driver(
        MockQuizService::new().with_quiz(sample_quiz()),
        Arc::new(SqlitePreferenceStore::new(&db)),
        dir.path().join("exports"),
    );
    second.start_new_quiz();
    second.settle().await;

    assert_eq!(second.quiz().selected_convention(), Some(&Convention::Precision));
    assert_eq!(second.quiz().quiz().unwrap().convention, Convention::Natural);
}

#[tokio::test]
async fn test_check_submits_selected_convention() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(sample_quiz())
        .with_check(check_result("1S"));
    let mut driver = memory_driver(service.clone(), &dir);

    driver.start_new_quiz();
    driver.settle().await;

    driver.select_convention(Convention::Acol);
    driver.set_proposed_bid("1H");
    driver.submit_check();
    driver.settle().await;

    let requests = service.check_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].proposed_bid, "1H");
    assert_eq!(requests[0].convention, Convention::Acol);
    assert_eq!(requests[0].hand, sample_quiz().hand);
    assert_eq!(requests[0].auction, sample_quiz().auction);
    assert_eq!(driver.quiz().check_result(), Some(&check_result("1S")));
}

#[tokio::test]
async fn test_check_error_keeps_quiz_for_retry() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(sample_quiz())
        .with_check_error(ApiError::Status {
            status: 400,
            message: Some("Unknown bid".into()),
        })
        .with_check(check_result("PASS"));
    let mut driver = memory_driver(service.clone(), &dir);

    driver.start_new_quiz();
    driver.settle().await;
    driver.set_proposed_bid("9Z");
    driver.submit_check();
    driver.settle().await;

    assert_eq!(
        driver.quiz().check_state(),
        Some(&CheckState::CheckError {
            message: "Unknown bid (400)".into()
        })
    );
    assert!(driver.quiz().quiz().is_some());

    driver.set_proposed_bid("PASS");
    driver.submit_check();
    driver.settle().await;
    assert_eq!(driver.quiz().check_result(), Some(&check_result("PASS")));
    assert_eq!(service.quiz_calls(), 1, "retry does not refetch the quiz");
}

/// A check answered after the user moved on to a new quiz is discarded
#[tokio::test]
async fn test_late_check_for_previous_quiz_is_dropped() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(sample_quiz())
        .with_check_after(check_result("3NT"), Duration::from_millis(100))
        .with_quiz(quiz("NEW.Q.Q.Q"));
    let mut driver = memory_driver(service, &dir);

    driver.start_new_quiz();
    driver.settle().await;
    driver.set_proposed_bid("1NT");
    driver.submit_check();
    driver.start_new_quiz();
    driver.settle().await;

    assert_eq!(driver.quiz().quiz().unwrap().hand, "NEW.Q.Q.Q");
    assert_eq!(driver.quiz().check_state(), Some(&CheckState::NoResult));
    assert_eq!(driver.quiz().proposed_bid(), "");
}

#[tokio::test]
async fn test_submit_without_quiz_sends_nothing() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new();
    let mut driver = memory_driver(service.clone(), &dir);

    driver.set_proposed_bid("1C");
    driver.submit_check();

    assert_eq!(driver.in_flight(), 0);
    assert!(service.check_requests().is_empty());
}
