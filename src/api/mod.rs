//! Client side of the quiz/evaluation service.
//!
//! The service generates quizzes, evaluates proposed bids and archives deals.
//! This crate only consumes it, through the [`QuizService`] trait.

pub mod http;
pub mod mock;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

use crate::domain::{CheckRequest, CheckResult, Deal, Quiz};

pub use http::HttpQuizService;
pub use mock::MockQuizService;

/// Failure talking to the quiz service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (connection refused, timeout, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status
    #[error("HTTP {status}")]
    Status {
        status: u16,
        /// Message extracted from the response body, if any
        message: Option<String>,
    },

    /// A success response whose body could not be decoded
    #[error("invalid response: {0}")]
    Decode(String),
}

/// Which call failed, for user-facing messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    LoadQuiz,
    CheckBid,
    LoadDeals,
    ExportDeals,
}

impl Operation {
    pub fn label(&self) -> &'static str {
        match self {
            Operation::LoadQuiz => "Loading quiz",
            Operation::CheckBid => "Check",
            Operation::LoadDeals => "Loading deals",
            Operation::ExportDeals => "Export",
        }
    }
}

impl ApiError {
    /// Message suitable for showing to the user.
    ///
    /// Prefers whatever the server said, always keeping the status code visible.
    pub fn user_message(&self, operation: Operation) -> String {
        match self {
            ApiError::Status {
                status,
                message: Some(message),
            } => format!("{} ({})", message, status),
            ApiError::Status {
                status,
                message: None,
            } => format!("{} failed ({})", operation.label(), status),
            ApiError::Transport(e) => format!("{} failed: {}", operation.label(), e),
            ApiError::Decode(e) => format!("{} failed: invalid response ({})", operation.label(), e),
        }
    }
}

/// Operations the quiz service offers
#[async_trait]
pub trait QuizService: Send + Sync {
    /// Generate a fresh quiz
    async fn fetch_quiz(&self) -> Result<Quiz, ApiError>;

    /// Evaluate a proposed bid
    async fn check_bid(&self, request: &CheckRequest) -> Result<CheckResult, ApiError>;

    /// Up to `limit` most recent archived deals
    async fn recent_deals(&self, limit: usize) -> Result<Vec<Deal>, ApiError>;

    /// The same deals rendered as CSV by the service
    async fn recent_deals_csv(&self, limit: usize) -> Result<String, ApiError>;
}

/// Pull a human-readable message out of an error response body.
///
/// Understands JSON bodies with a `message` or `error` field and short
/// plain-text bodies. HTML error pages are ignored.
pub fn extract_server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    if let Ok(value) = serde_json::from_str::<Value>(body) {
        return ["message", "error"].iter().find_map(|field| {
            value
                .get(field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        });
    }

    if body.starts_with('<') || body.len() > 200 {
        return None;
    }
    Some(body.to_string())
}

/// Decode a deals payload. Anything but an array is an empty list, and
/// elements that are not deal objects are skipped.
pub fn decode_deal_list(value: Value) -> Vec<Deal> {
    let Value::Array(items) = value else {
        tracing::debug!("Deals response is not an array, treating as empty");
        return Vec::new();
    };

    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<Deal>(item) {
            Ok(deal) => Some(deal),
            Err(e) => {
                tracing::warn!(error = %e, "Skipping malformed deal record");
                None
            }
        })
        .collect()
}
