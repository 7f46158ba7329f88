//! Executes state-machine effects against a [`QuizService`].
//!
//! Each effect runs as its own tokio task; its completion comes back over a
//! channel and is applied to the owning state machine, which decides whether
//! it is still current.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::mpsc;

use super::effect::{Completion, Effect};
use super::history::{HistoryBrowser, PageSize};
use super::quiz::QuizSession;
use crate::api::{Operation, QuizService};
use crate::data::PreferenceStore;
use crate::domain::Convention;

/// Owns both state machines and the tasks running their effects
pub struct SessionDriver {
    quiz: QuizSession,
    history: HistoryBrowser,
    service: Arc<dyn QuizService>,
    exports_dir: PathBuf,
    completion_tx: mpsc::UnboundedSender<Completion>,
    completion_rx: mpsc::UnboundedReceiver<Completion>,
    in_flight: usize,
}

impl SessionDriver {
    pub fn new(
        service: Arc<dyn QuizService>,
        preferences: Arc<dyn PreferenceStore>,
        page_size: PageSize,
        exports_dir: PathBuf,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            quiz: QuizSession::new(preferences),
            history: HistoryBrowser::new(page_size),
            service,
            exports_dir,
            completion_tx,
            completion_rx,
            in_flight: 0,
        }
    }

    pub fn quiz(&self) -> &QuizSession {
        &self.quiz
    }

    pub fn history(&self) -> &HistoryBrowser {
        &self.history
    }

    /// Number of spawned effects whose completion has not been applied yet
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn start_new_quiz(&mut self) {
        let effect = self.quiz.start_new_quiz();
        self.spawn(effect);
    }

    pub fn select_convention(&mut self, convention: Convention) {
        self.quiz.select_convention(convention);
    }

    pub fn cycle_convention(&mut self, forward: bool) {
        self.quiz.cycle_convention(forward);
    }

    pub fn set_proposed_bid(&mut self, bid: impl Into<String>) {
        self.quiz.set_proposed_bid(bid);
    }

    pub fn submit_check(&mut self) {
        if let Some(effect) = self.quiz.submit_check() {
            self.spawn(effect);
        }
    }

    pub fn open_history(&mut self) {
        if let Some(effect) = self.history.open() {
            self.spawn(effect);
        }
    }

    pub fn close_history(&mut self) {
        self.history.close();
    }

    pub fn set_page_size(&mut self, size: PageSize) {
        let effect = self.history.set_page_size(size);
        self.spawn(effect);
    }

    pub fn fetch_deals(&mut self, limit: usize) {
        let effect = self.history.fetch_deals(limit);
        self.spawn(effect);
    }

    pub fn refresh_history(&mut self) {
        let effect = self.history.refresh();
        self.spawn(effect);
    }

    pub fn export_history(&mut self) {
        let effect = self.history.export();
        self.spawn(effect);
    }

    /// Run an effect in the background; its completion arrives via [`Self::next_completion`]
    fn spawn(&mut self, effect: Effect) {
        let service = self.service.clone();
        let tx = self.completion_tx.clone();
        let exports_dir = self.exports_dir.clone();
        self.in_flight += 1;

        tokio::spawn(async move {
            let completion = execute(service.as_ref(), &exports_dir, effect).await;
            // Receiver is gone only when the driver was dropped
            let _ = tx.send(completion);
        });
    }

    /// Wait for the next finished effect
    pub async fn next_completion(&mut self) -> Option<Completion> {
        self.completion_rx.recv().await
    }

    /// Feed a completion to its state machine. Returns false if it was stale.
    pub fn apply(&mut self, completion: Completion) -> bool {
        self.in_flight = self.in_flight.saturating_sub(1);

        match completion {
            Completion::QuizLoaded { ticket, result } => self.quiz.quiz_loaded(ticket, result),
            Completion::CheckCompleted { ticket, result } => {
                self.quiz.check_completed(ticket, result)
            }
            Completion::DealsLoaded { ticket, result } => {
                self.history.deals_loaded(ticket, result)
            }
            Completion::DealsExported { ticket, result } => {
                self.history.export_finished(ticket, result)
            }
        }
    }

    /// Apply completions until nothing is in flight
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.next_completion().await {
                Some(completion) => {
                    self.apply(completion);
                }
                None => break,
            }
        }
    }
}

async fn execute(service: &dyn QuizService, exports_dir: &Path, effect: Effect) -> Completion {
    match effect {
        Effect::FetchQuiz { ticket } => Completion::QuizLoaded {
            ticket,
            result: service.fetch_quiz().await,
        },
        Effect::CheckBid { ticket, request } => Completion::CheckCompleted {
            ticket,
            result: service.check_bid(&request).await,
        },
        Effect::FetchDeals { ticket, limit } => Completion::DealsLoaded {
            ticket,
            result: service.recent_deals(limit).await,
        },
        Effect::ExportDeals { ticket, limit } => Completion::DealsExported {
            ticket,
            result: export_csv(service, exports_dir, limit).await,
        },
    }
}

/// Download the deals CSV and save it under `exports_dir`
async fn export_csv(service: &dyn QuizService, exports_dir: &Path, limit: usize) -> Result<PathBuf, String> {
    let csv = service
        .recent_deals_csv(limit)
        .await
        .map_err(|e| e.user_message(Operation::ExportDeals))?;

    let path = exports_dir.join(export_file_name());
    tokio::fs::create_dir_all(exports_dir)
        .await
        .map_err(|e| format!("Export failed: {}", e))?;
    tokio::fs::write(&path, csv)
        .await
        .map_err(|e| format!("Export failed: {}", e))?;

    Ok(path)
}

fn export_file_name() -> String {
    format!("quiz-deals-{}.csv", Utc::now().format("%Y%m%dT%H%M%SZ"))
}
