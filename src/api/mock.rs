//! Scripted quiz service for deterministic testing
//!
//! Each call pops the next scripted reply for that operation, optionally
//! after a delay, and records what it was asked for.
//!
//! # Example
//! ```no_run
//! use bidquiz::api::{MockQuizService, QuizService};
//! use bidquiz::domain::{Convention, Quiz, Seat};
//!
//! # async fn demo() {
//! let quiz = Quiz {
//!     hand: "AKQ.J.T98.7652".into(),
//!     position: Seat::North,
//!     convention: Convention::Natural,
//!     auction: vec![],
//! };
//! let service = MockQuizService::new().with_quiz(quiz);
//! assert!(service.fetch_quiz().await.is_ok());
//! # }
//! ```

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use super::{ApiError, QuizService};
use crate::domain::{CheckRequest, CheckResult, Deal, Quiz};

struct Reply<T> {
    result: Result<T, ApiError>,
    delay: Duration,
}

#[derive(Default)]
struct Script {
    quizzes: VecDeque<Reply<Quiz>>,
    checks: VecDeque<Reply<CheckResult>>,
    deals: VecDeque<Reply<Vec<Deal>>>,
    csv: VecDeque<Reply<String>>,
}

#[derive(Default)]
struct Captured {
    quiz_calls: usize,
    check_requests: Vec<CheckRequest>,
    deal_limits: Vec<usize>,
    csv_limits: Vec<usize>,
}

/// Mock quiz service for testing
///
/// Clones share the same script and captured calls.
#[derive(Clone, Default)]
pub struct MockQuizService {
    script: Arc<Mutex<Script>>,
    captured: Arc<Mutex<Captured>>,
}

fn exhausted<T>(what: &str) -> Result<T, ApiError> {
    Err(ApiError::Transport(format!("no scripted {what} reply")))
}

async fn deliver<T>(reply: Option<Reply<T>>, what: &str) -> Result<T, ApiError> {
    match reply {
        Some(reply) => {
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        }
        None => exhausted(what),
    }
}

impl MockQuizService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful quiz
    pub fn with_quiz(self, quiz: Quiz) -> Self {
        self.with_quiz_after(quiz, Duration::ZERO)
    }

    /// Queue a successful quiz delivered after `delay`
    pub fn with_quiz_after(self, quiz: Quiz, delay: Duration) -> Self {
        self.script.lock().quizzes.push_back(Reply {
            result: Ok(quiz),
            delay,
        });
        self
    }

    /// Queue a failed quiz fetch
    pub fn with_quiz_error(self, error: ApiError) -> Self {
        self.script.lock().quizzes.push_back(Reply {
            result: Err(error),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn with_check(self, result: CheckResult) -> Self {
        self.with_check_after(result, Duration::ZERO)
    }

    pub fn with_check_after(self, result: CheckResult, delay: Duration) -> Self {
        self.script.lock().checks.push_back(Reply {
            result: Ok(result),
            delay,
        });
        self
    }

    pub fn with_check_error(self, error: ApiError) -> Self {
        self.script.lock().checks.push_back(Reply {
            result: Err(error),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn with_deals(self, deals: Vec<Deal>) -> Self {
        self.with_deals_after(deals, Duration::ZERO)
    }

    pub fn with_deals_after(self, deals: Vec<Deal>, delay: Duration) -> Self {
        self.script.lock().deals.push_back(Reply {
            result: Ok(deals),
            delay,
        });
        self
    }

    pub fn with_deals_error(self, error: ApiError) -> Self {
        self.script.lock().deals.push_back(Reply {
            result: Err(error),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn with_csv(self, csv: &str) -> Self {
        self.script.lock().csv.push_back(Reply {
            result: Ok(csv.to_string()),
            delay: Duration::ZERO,
        });
        self
    }

    pub fn with_csv_error(self, error: ApiError) -> Self {
        self.script.lock().csv.push_back(Reply {
            result: Err(error),
            delay: Duration::ZERO,
        });
        self
    }

    /// Number of quiz fetches made
    pub fn quiz_calls(&self) -> usize {
        self.captured.lock().quiz_calls
    }

    /// Check requests received, in order
    pub fn check_requests(&self) -> Vec<CheckRequest> {
        self.captured.lock().check_requests.clone()
    }

    /// Limits passed to `recent_deals`, in order
    pub fn deal_limits(&self) -> Vec<usize> {
        self.captured.lock().deal_limits.clone()
    }

    /// Limits passed to `recent_deals_csv`, in order
    pub fn csv_limits(&self) -> Vec<usize> {
        self.captured.lock().csv_limits.clone()
    }
}

#[async_trait]
impl QuizService for MockQuizService {
    async fn fetch_quiz(&self) -> Result<Quiz, ApiError> {
        self.captured.lock().quiz_calls += 1;
        let reply = self.script.lock().quizzes.pop_front();
        deliver(reply, "quiz").await
    }

    async fn check_bid(&self, request: &CheckRequest) -> Result<CheckResult, ApiError> {
        self.captured.lock().check_requests.push(request.clone());
        let reply = self.script.lock().checks.pop_front();
        deliver(reply, "check").await
    }

    async fn recent_deals(&self, limit: usize) -> Result<Vec<Deal>, ApiError> {
        self.captured.lock().deal_limits.push(limit);
        let reply = self.script.lock().deals.pop_front();
        deliver(reply, "deals").await
    }

    async fn recent_deals_csv(&self, limit: usize) -> Result<String, ApiError> {
        self.captured.lock().csv_limits.push(limit);
        let reply = self.script.lock().csv.pop_front();
        deliver(reply, "csv").await
    }
}
