//! Integration tests for the HTTP quiz client against a local server

use std::time::Duration;

use axum::{
    extract::Query,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use super::common::server;
use bidquiz::api::{ApiError, HttpQuizService, Operation, QuizService};
use bidquiz::{CheckRequest, Convention, Seat};

fn client(base_url: &str) -> HttpQuizService {
    HttpQuizService::new(base_url, Duration::from_secs(5)).unwrap()
}

async fn quiz_handler() -> Json<Value> {
    Json(json!({
        "hand": "AKQ.J.T98.7652",
        "position": "N",
        "convention": "precision",
        "auction": ["1C", "PASS"]
    }))
}

async fn check_handler(Json(body): Json<Value>) -> Json<Value> {
    Json(json!({
        "suggestedBid": "1S",
        "explanation": format!(
            "checked {} under {}",
            body["proposedBid"].as_str().unwrap_or_default(),
            body["convention"].as_str().unwrap_or_default()
        )
    }))
}

async fn deals_handler(Query(params): Query<Vec<(String, String)>>) -> Json<Value> {
    let limit = params
        .iter()
        .find(|(k, _)| k == "limit")
        .map(|(_, v)| v.clone())
        .unwrap_or_default();
    Json(json!([
        {
            "id": 1,
            "createdAt": "2024-05-01T14:03:10Z",
            "dealer": "E",
            "northHand": "AKQ.J.T98.7652",
            "convention": null,
            "auctionJson": "[\"1D\",\"PASS\"]"
        },
        {
            "id": 2,
            "dealer": "S",
            "auctionJson": "1C, X",
            "convention": format!("limit {}", limit)
        }
    ]))
}

async fn csv_handler() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/csv")],
        "id,createdAt,dealer\n1,2024-05-01T14:03:10Z,N\n",
    )
}

fn happy_router() -> Router {
    Router::new()
        .route("/api/bids/quiz", get(quiz_handler))
        .route("/api/bids/check", post(check_handler))
        .route("/api/deals/recent", get(deals_handler))
        .route("/api/deals/recent.csv", get(csv_handler))
}

#[tokio::test]
async fn test_fetch_quiz() {
    let base = server::spawn(happy_router()).await;
    let quiz = client(&base).fetch_quiz().await.unwrap();

    assert_eq!(quiz.hand, "AKQ.J.T98.7652");
    assert_eq!(quiz.position, Seat::North);
    assert_eq!(quiz.convention, Convention::Precision);
    assert_eq!(quiz.auction, vec!["1C", "PASS"]);
}

#[tokio::test]
async fn test_check_bid_posts_camel_case_body() {
    let base = server::spawn(happy_router()).await;
    let request = CheckRequest {
        proposed_bid: "1H".into(),
        hand: "AKQ.J.T98.7652".into(),
        position: Seat::North,
        convention: Convention::PolishClub,
        auction: vec!["1C".into()],
    };

    let result = client(&base).check_bid(&request).await.unwrap();
    assert_eq!(result.suggested_bid, "1S");
    assert_eq!(result.explanation, "checked 1H under polish club");
}

#[tokio::test]
async fn test_recent_deals_decodes_loose_records() {
    let base = server::spawn(happy_router()).await;
    let deals = client(&base).recent_deals(20).await.unwrap();

    assert_eq!(deals.len(), 2);
    assert_eq!(deals[0].dealer, Some(Seat::East));
    assert_eq!(deals[0].convention, None);
    assert_eq!(deals[0].auction, vec!["1D", "PASS"]);
    assert_eq!(deals[1].auction, vec!["1C", "X"]);
    assert_eq!(
        deals[1].convention,
        Some(Convention::Other("limit 20".into()))
    );
}

#[tokio::test]
async fn test_non_array_deals_are_empty() {
    let router = Router::new().route("/api/deals/recent", get(|| async { Json(Value::Null) }));
    let base = server::spawn(router).await;

    let deals = client(&base).recent_deals(20).await.unwrap();
    assert!(deals.is_empty());
}

#[tokio::test]
async fn test_recent_deals_csv() {
    let base = server::spawn(happy_router()).await;
    let csv = client(&base).recent_deals_csv(10).await.unwrap();
    assert!(csv.starts_with("id,createdAt,dealer\n"));
}

#[tokio::test]
async fn test_status_error_without_body() {
    let router = Router::new().route(
        "/api/bids/quiz",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let base = server::spawn(router).await;

    let err = client(&base).fetch_quiz().await.unwrap_err();
    assert_eq!(
        err,
        ApiError::Status {
            status: 500,
            message: None
        }
    );
    assert_eq!(err.user_message(Operation::LoadQuiz), "Loading quiz failed (500)");
}

#[tokio::test]
async fn test_status_error_prefers_server_message() {
    let router = Router::new().route(
        "/api/bids/check",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({"status": 400, "error": "Bad Request", "message": "Hand must have 13 cards"})),
            )
        }),
    );
    let base = server::spawn(router).await;
    let request = CheckRequest {
        proposed_bid: "1C".into(),
        hand: "AK".into(),
        position: Seat::South,
        convention: Convention::Natural,
        auction: vec![],
    };

    let err = client(&base).check_bid(&request).await.unwrap_err();
    assert_eq!(
        err.user_message(Operation::CheckBid),
        "Hand must have 13 cards (400)"
    );
}

#[tokio::test]
async fn test_malformed_quiz_is_decode_error() {
    let router = Router::new().route("/api/bids/quiz", get(|| async { "not json" }));
    let base = server::spawn(router).await;

    let err = client(&base).fetch_quiz().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)), "got {err:?}");
}
