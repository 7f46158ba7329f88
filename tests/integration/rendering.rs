//! Rendering smoke tests for the terminal front end

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tempfile::TempDir;

use super::common::fixtures::{check_result, deals, driver, sample_quiz};
use super::common::terminal::{buffer_contains, buffer_to_trimmed_string, create_test_terminal_sized};
use bidquiz::api::{ApiError, MockQuizService};
use bidquiz::data::MemoryPreferenceStore;
use bidquiz::{App, Config};

fn app(service: MockQuizService, dir: &TempDir) -> App {
    let driver = driver(
        service,
        Arc::new(MemoryPreferenceStore::new()),
        dir.path().join("exports"),
    );
    App::new(Config::default(), driver)
}

fn press(app: &mut App, code: KeyCode) {
    app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
}

fn ctrl(app: &mut App, c: char) {
    app.handle_key_event(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
}

fn render(app: &mut App) -> String {
    let mut terminal = create_test_terminal_sized(100, 32);
    terminal.draw(|f| app.draw(f)).unwrap();
    buffer_to_trimmed_string(terminal.backend().buffer())
}

#[tokio::test]
async fn test_loaded_quiz_and_result_render() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(sample_quiz())
        .with_check(check_result("1S"));
    let mut app = app(service, &dir);

    ctrl(&mut app, 'n');
    app.driver_mut().settle().await;

    let screen = render(&mut app);
    assert!(screen.contains("Your hand (North)"), "{screen}");
    assert!(screen.contains("♠ AKQ"), "{screen}");
    assert!(screen.contains("10 HCP"), "{screen}");
    assert!(screen.contains("1♣") || screen.contains("1 ♣"), "{screen}");

    for c in "1s".chars() {
        press(&mut app, KeyCode::Char(c));
    }
    press(&mut app, KeyCode::Enter);
    app.driver_mut().settle().await;

    let screen = render(&mut app);
    assert!(screen.contains("Correct!"), "{screen}");
    assert!(screen.contains("1S describes the hand best"), "{screen}");
}

#[tokio::test]
async fn test_load_error_renders_message() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new().with_quiz_error(ApiError::Status {
        status: 503,
        message: None,
    });
    let mut app = app(service, &dir);

    ctrl(&mut app, 'n');
    app.driver_mut().settle().await;

    let mut terminal = create_test_terminal_sized(100, 32);
    terminal.draw(|f| app.draw(f)).unwrap();
    assert!(buffer_contains(terminal.backend().buffer(), "Loading quiz failed (503)"));
}

#[tokio::test]
async fn test_history_overlay_renders_deals() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new().with_deals(deals(2));
    let mut app = app(service, &dir);

    ctrl(&mut app, 'd');
    app.driver_mut().settle().await;

    let screen = render(&mut app);
    assert!(screen.contains("Recent deals"), "{screen}");
    assert!(screen.contains("#1"), "{screen}");
    assert!(screen.contains("2024-05-01 14:03 UTC"), "{screen}");
    assert!(screen.contains("export csv"), "{screen}");

    press(&mut app, KeyCode::Esc);
    assert!(!app.driver().history().is_open());
    assert!(!render(&mut app).contains("Recent deals"));
}

#[tokio::test]
async fn test_new_quiz_clears_bid_input() {
    let dir = TempDir::new().unwrap();
    let service = MockQuizService::new()
        .with_quiz(sample_quiz())
        .with_quiz(sample_quiz());
    let mut app = app(service, &dir);

    ctrl(&mut app, 'n');
    app.driver_mut().settle().await;
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.bid_input(), "2");

    ctrl(&mut app, 'n');
    render(&mut app);
    assert_eq!(app.bid_input(), "");
    app.driver_mut().settle().await;
}
