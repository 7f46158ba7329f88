use std::fmt;
use std::path::PathBuf;

use crate::api::ApiError;
use crate::domain::{CheckRequest, CheckResult, Deal, Quiz};

/// Identifies one outgoing request.
///
/// Tickets increase monotonically per state machine. A completion is only
/// applied if its ticket is still the one the state machine is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RequestTicket(u64);

impl RequestTicket {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues increasing request tickets
#[derive(Debug, Default)]
pub(crate) struct TicketCounter {
    last: u64,
}

impl TicketCounter {
    pub(crate) fn issue(&mut self) -> RequestTicket {
        self.last += 1;
        RequestTicket(self.last)
    }
}

/// Side effects that should be executed outside the state machines.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchQuiz {
        ticket: RequestTicket,
    },
    CheckBid {
        ticket: RequestTicket,
        request: CheckRequest,
    },
    FetchDeals {
        ticket: RequestTicket,
        limit: usize,
    },
    /// Download the deals CSV and write it under the exports directory
    ExportDeals {
        ticket: RequestTicket,
        limit: usize,
    },
}

/// Result of an executed [`Effect`], fed back into the state machines
#[derive(Debug, Clone)]
pub enum Completion {
    QuizLoaded {
        ticket: RequestTicket,
        result: Result<Quiz, ApiError>,
    },
    CheckCompleted {
        ticket: RequestTicket,
        result: Result<CheckResult, ApiError>,
    },
    DealsLoaded {
        ticket: RequestTicket,
        result: Result<Vec<Deal>, ApiError>,
    },
    /// Path of the written file, or a displayable failure message
    DealsExported {
        ticket: RequestTicket,
        result: Result<PathBuf, String>,
    },
}
