//! Quiz lifecycle: load a quiz, let the user propose a bid, check it.

use std::sync::Arc;

use super::effect::{Effect, RequestTicket, TicketCounter};
use crate::api::{ApiError, Operation};
use crate::data::{PreferenceStore, CONVENTION_PREFERENCE_KEY};
use crate::domain::{CheckRequest, CheckResult, Convention, Quiz};

/// Primary view state of a quiz session
#[derive(Debug, Clone, PartialEq, Default)]
pub enum QuizState {
    /// Nothing requested yet
    #[default]
    Idle,

    /// Waiting for a quiz
    Loading,

    /// A quiz is on screen
    Loaded(LoadedQuiz),

    /// The last quiz fetch failed
    LoadError { message: String },
}

/// A displayed quiz and the state of its bid check
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedQuiz {
    pub quiz: Quiz,
    pub check: CheckState,
}

/// Progress of checking the proposed bid against the loaded quiz
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CheckState {
    #[default]
    NoResult,

    /// A check request is in flight
    Checking,

    HasResult(CheckResult),

    /// The last check failed; the quiz stays loaded so the user can retry
    CheckError { message: String },
}

/// State machine for one quiz session
pub struct QuizSession {
    state: QuizState,
    selected_convention: Option<Convention>,
    proposed_bid: String,
    preferences: Arc<dyn PreferenceStore>,
    tickets: TicketCounter,
    pending_load: Option<RequestTicket>,
    pending_check: Option<RequestTicket>,
}

impl QuizSession {
    pub fn new(preferences: Arc<dyn PreferenceStore>) -> Self {
        Self {
            state: QuizState::Idle,
            selected_convention: None,
            proposed_bid: String::new(),
            preferences,
            tickets: TicketCounter::default(),
            pending_load: None,
            pending_check: None,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    /// The loaded quiz, if one is displayed
    pub fn quiz(&self) -> Option<&Quiz> {
        match &self.state {
            QuizState::Loaded(loaded) => Some(&loaded.quiz),
            _ => None,
        }
    }

    pub fn check_state(&self) -> Option<&CheckState> {
        match &self.state {
            QuizState::Loaded(loaded) => Some(&loaded.check),
            _ => None,
        }
    }

    /// Result of the last successful check for the current quiz
    pub fn check_result(&self) -> Option<&CheckResult> {
        match self.check_state() {
            Some(CheckState::HasResult(result)) => Some(result),
            _ => None,
        }
    }

    /// Message of the current load or check failure
    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            QuizState::LoadError { message } => Some(message),
            QuizState::Loaded(LoadedQuiz {
                check: CheckState::CheckError { message },
                ..
            }) => Some(message),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, QuizState::Loading)
    }

    pub fn is_checking(&self) -> bool {
        matches!(self.check_state(), Some(CheckState::Checking))
    }

    pub fn selected_convention(&self) -> Option<&Convention> {
        self.selected_convention.as_ref()
    }

    pub fn proposed_bid(&self) -> &str {
        &self.proposed_bid
    }

    /// Begin fetching a new quiz, discarding the current one and any result.
    ///
    /// Any response to an earlier fetch or check becomes stale.
    pub fn start_new_quiz(&mut self) -> Effect {
        let ticket = self.tickets.issue();
        self.state = QuizState::Loading;
        self.proposed_bid.clear();
        self.pending_load = Some(ticket);
        self.pending_check = None;

        tracing::debug!(%ticket, "Requesting new quiz");
        Effect::FetchQuiz { ticket }
    }

    /// Apply the outcome of a quiz fetch. Returns false if the response was stale.
    pub fn quiz_loaded(&mut self, ticket: RequestTicket, result: Result<Quiz, ApiError>) -> bool {
        if self.pending_load != Some(ticket) {
            tracing::debug!(%ticket, "Dropping stale quiz response");
            return false;
        }
        self.pending_load = None;

        match result {
            Ok(quiz) => {
                self.selected_convention = Some(self.initial_convention(&quiz));
                tracing::info!(
                    %ticket,
                    position = %quiz.position,
                    convention = quiz.convention.as_str(),
                    "Quiz loaded"
                );
                self.state = QuizState::Loaded(LoadedQuiz {
                    quiz,
                    check: CheckState::NoResult,
                });
            }
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "Quiz fetch failed");
                self.state = QuizState::LoadError {
                    message: e.user_message(Operation::LoadQuiz),
                };
            }
        }
        true
    }

    /// Stored preference if there is one, else the quiz's own convention
    fn initial_convention(&self, quiz: &Quiz) -> Convention {
        let stored = self
            .preferences
            .load(CONVENTION_PREFERENCE_KEY)
            .map(|value| Convention::parse(&value))
            .filter(|c| !c.is_blank());

        match stored {
            Some(convention) => convention,
            None if quiz.convention.is_blank() => Convention::default(),
            None => quiz.convention.clone(),
        }
    }

    /// Change the convention used for checks and remember it for next time.
    ///
    /// The loaded quiz itself is left untouched.
    pub fn select_convention(&mut self, convention: Convention) {
        self.preferences
            .save(CONVENTION_PREFERENCE_KEY, convention.as_str());
        self.selected_convention = Some(convention);
    }

    /// Step the selection through the selectable conventions
    pub fn cycle_convention(&mut self, forward: bool) {
        let current = self
            .selected_convention
            .clone()
            .or_else(|| self.quiz().map(|q| q.convention.clone()))
            .unwrap_or_default();
        let next = if forward {
            current.next()
        } else {
            current.prev()
        };
        self.select_convention(next);
    }

    /// Update the proposed bid. No validation happens client-side.
    pub fn set_proposed_bid(&mut self, bid: impl Into<String>) {
        self.proposed_bid = bid.into();
    }

    /// Submit the proposed bid for checking.
    ///
    /// Does nothing without a loaded quiz or with a blank bid, treating the bid
    /// as a required form field. The request carries the currently selected
    /// convention, which may differ from the quiz's own.
    pub fn submit_check(&mut self) -> Option<Effect> {
        if self.proposed_bid.trim().is_empty() {
            return None;
        }

        let convention = self.selected_convention.clone();
        let QuizState::Loaded(loaded) = &mut self.state else {
            return None;
        };

        let request = CheckRequest {
            proposed_bid: self.proposed_bid.clone(),
            hand: loaded.quiz.hand.clone(),
            position: loaded.quiz.position,
            convention: convention.unwrap_or_else(|| loaded.quiz.convention.clone()),
            auction: loaded.quiz.auction.clone(),
        };

        let ticket = self.tickets.issue();
        loaded.check = CheckState::Checking;
        self.pending_check = Some(ticket);

        tracing::debug!(%ticket, proposed_bid = %request.proposed_bid, "Submitting check");
        Some(Effect::CheckBid { ticket, request })
    }

    /// Apply the outcome of a check. Returns false if the response was stale.
    pub fn check_completed(
        &mut self,
        ticket: RequestTicket,
        result: Result<CheckResult, ApiError>,
    ) -> bool {
        if self.pending_check != Some(ticket) {
            tracing::debug!(%ticket, "Dropping stale check response");
            return false;
        }
        self.pending_check = None;

        let QuizState::Loaded(loaded) = &mut self.state else {
            return false;
        };

        loaded.check = match result {
            Ok(result) => {
                tracing::info!(%ticket, suggested_bid = %result.suggested_bid, "Check completed");
                CheckState::HasResult(result)
            }
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "Check failed");
                CheckState::CheckError {
                    message: e.user_message(Operation::CheckBid),
                }
            }
        };
        true
    }
}
