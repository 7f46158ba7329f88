use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use super::{decode_deal_list, extract_server_message, ApiError, QuizService};
use crate::domain::{CheckRequest, CheckResult, Deal, Quiz};

const QUIZ_PATH: &str = "/api/bids/quiz";
const CHECK_PATH: &str = "/api/bids/check";
const RECENT_DEALS_PATH: &str = "/api/deals/recent";
const RECENT_DEALS_CSV_PATH: &str = "/api/deals/recent.csv";

/// [`QuizService`] over HTTP/JSON
#[derive(Clone)]
pub struct HttpQuizService {
    base_url: String,
    client: Client,
}

impl HttpQuizService {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Body text of a success response, or the status error
    async fn read_body(response: Response) -> Result<String, ApiError> {
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                message: extract_server_message(&text),
            });
        }
        Ok(text)
    }

    fn parse<T: DeserializeOwned>(text: &str) -> Result<T, ApiError> {
        serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, ApiError> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::read_body(response).await
    }
}

#[async_trait]
impl QuizService for HttpQuizService {
    async fn fetch_quiz(&self) -> Result<Quiz, ApiError> {
        let text = self.get(QUIZ_PATH, &[]).await?;
        Self::parse(&text)
    }

    async fn check_bid(&self, request: &CheckRequest) -> Result<CheckResult, ApiError> {
        let url = self.url(CHECK_PATH);
        tracing::debug!(%url, proposed_bid = %request.proposed_bid, "POST");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        let text = Self::read_body(response).await?;
        Self::parse(&text)
    }

    async fn recent_deals(&self, limit: usize) -> Result<Vec<Deal>, ApiError> {
        let text = self
            .get(RECENT_DEALS_PATH, &[("limit", limit.to_string())])
            .await?;

        match serde_json::from_str(&text) {
            Ok(value) => Ok(decode_deal_list(value)),
            Err(e) => {
                tracing::warn!(error = %e, "Deals response is not JSON, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    async fn recent_deals_csv(&self, limit: usize) -> Result<String, ApiError> {
        self.get(RECENT_DEALS_CSV_PATH, &[("limit", limit.to_string())])
            .await
    }
}
