//! Integration tests for browsing and exporting the deal history

use std::sync::Arc;
use std::time::Duration;

use super::common::fixtures::{deals, driver};
use bidquiz::api::{ApiError, MockQuizService};
use bidquiz::data::MemoryPreferenceStore;
use bidquiz::session::{HistoryPhase, PageSize, SessionDriver};
use tempfile::TempDir;

fn history_driver(service: MockQuizService, dir: &TempDir) -> SessionDriver {
    driver(
        service,
        Arc::new(MemoryPreferenceStore::new()),
        dir.path().join("exports"),
    )
}

#[tokio::test]
async fn test_open_loads_default_page() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new().with_deals(deals(3));
    let mut driver = history_driver(service.clone(), &dir);

    driver.open_history();
    assert_eq!(driver.history().phase(), Some(&HistoryPhase::Loading));
    driver.settle().await;

    assert_eq!(driver.history().phase(), Some(&HistoryPhase::Loaded));
    assert_eq!(driver.history().deals().len(), 3);
    assert_eq!(service.deal_limits(), vec![20]);
}

#[tokio::test]
async fn test_close_and_reopen_reuses_list() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new().with_deals(deals(2));
    let mut driver = history_driver(service.clone(), &dir);

    driver.open_history();
    driver.settle().await;
    driver.close_history();
    assert!(!driver.history().is_open());

    driver.open_history();
    assert_eq!(driver.in_flight(), 0);
    assert_eq!(driver.history().deals().len(), 2);
    assert_eq!(service.deal_limits(), vec![20], "no second fetch");
}

#[tokio::test]
async fn test_page_size_change_replaces_list() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_deals(deals(20))
        .with_deals(deals(50));
    let mut driver = history_driver(service.clone(), &dir);

    driver.open_history();
    driver.settle().await;
    driver.set_page_size(PageSize::new(50).unwrap());
    driver.settle().await;

    assert_eq!(driver.history().deals().len(), 50);
    assert_eq!(service.deal_limits(), vec![20, 50]);

    // Page size survives a close
    driver.close_history();
    driver.open_history();
    assert_eq!(driver.history().page_size().get(), 50);
    assert_eq!(driver.in_flight(), 0);
}

#[tokio::test]
async fn test_rapid_page_size_changes_keep_latest() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_deals_after(deals(20), Duration::from_millis(100))
        .with_deals(deals(10));
    let mut driver = history_driver(service.clone(), &dir);

    driver.open_history();
    while service.deal_limits().is_empty() {
        tokio::task::yield_now().await;
    }
    driver.set_page_size(PageSize::new(10).unwrap());
    driver.settle().await;

    assert_eq!(driver.history().deals().len(), 10);
    assert_eq!(driver.history().phase(), Some(&HistoryPhase::Loaded));
}

#[tokio::test]
async fn test_fetch_error_keeps_previous_deals() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_deals(deals(4))
        .with_deals_error(ApiError::Transport("connection reset".into()));
    let mut driver = history_driver(service, &dir);

    driver.open_history();
    driver.settle().await;
    driver.refresh_history();
    driver.settle().await;

    assert_eq!(
        driver.history().phase(),
        Some(&HistoryPhase::Error {
            message: "Loading deals failed: connection reset".into()
        })
    );
    assert_eq!(driver.history().deals().len(), 4);
}

#[tokio::test]
async fn test_explicit_fetch_limit() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new().with_deals(Vec::new());
    let mut driver = history_driver(service.clone(), &dir);

    driver.fetch_deals(20);
    driver.settle().await;

    assert!(driver.history().deals().is_empty());
    assert_eq!(service.deal_limits(), vec![20]);
    assert!(!driver.history().is_open(), "fetching does not open the panel");
}

#[tokio::test]
async fn test_export_saves_csv() {
    let dir = TempDir::new().unwrap();
    let csv = "id,createdAt,dealer,northHand,eastHand,southHand,westHand,convention,auctionJson\n";
    let service = MockQuizService::new().with_deals(deals(1)).with_csv(csv);
    let mut driver = history_driver(service, &dir);

    driver.open_history();
    driver.settle().await;
    driver.export_history();
    driver.settle().await;

    let notice = driver.history().notice().unwrap();
    let path = notice.strip_prefix("Saved ").expect("saved notice");
    assert_eq!(std::fs::read_to_string(path).unwrap(), csv);
    assert!(path.contains("quiz-deals-"));
    assert_eq!(driver.history().phase(), Some(&HistoryPhase::Loaded));
}
