//! Browser over recently archived deals

use std::fmt;
use std::path::PathBuf;

use super::effect::{Effect, RequestTicket, TicketCounter};
use crate::api::{ApiError, Operation};
use crate::domain::Deal;

/// Page sizes the browser offers
pub const PAGE_SIZES: [usize; 4] = [10, 20, 50, 100];

pub const DEFAULT_PAGE_SIZE: usize = 20;

/// One of [`PAGE_SIZES`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageSize(usize);

impl PageSize {
    /// `None` unless `size` is an allowed page size
    pub fn new(size: usize) -> Option<Self> {
        PAGE_SIZES.contains(&size).then_some(Self(size))
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// Next larger size, saturating at the largest
    pub fn next(&self) -> Self {
        let idx = self.index();
        Self(PAGE_SIZES[(idx + 1).min(PAGE_SIZES.len() - 1)])
    }

    /// Next smaller size, saturating at the smallest
    pub fn prev(&self) -> Self {
        Self(PAGE_SIZES[self.index().saturating_sub(1)])
    }

    fn index(&self) -> usize {
        PAGE_SIZES.iter().position(|s| *s == self.0).unwrap_or(0)
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self(DEFAULT_PAGE_SIZE)
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HistoryState {
    #[default]
    Closed,
    Open(HistoryPhase),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryPhase {
    Loading,
    Loaded,
    /// The last fetch failed; the previous list is kept
    Error { message: String },
}

/// State machine for the deal history panel
#[derive(Debug, Default)]
pub struct HistoryBrowser {
    state: HistoryState,
    deals: Vec<Deal>,
    page_size: PageSize,
    /// Limit the current list was fetched with
    loaded_limit: Option<usize>,
    pending_fetch: Option<(RequestTicket, usize)>,
    pending_export: Option<RequestTicket>,
    notice: Option<String>,
    tickets: TicketCounter,
}

impl HistoryBrowser {
    pub fn new(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn state(&self) -> &HistoryState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        matches!(self.state, HistoryState::Open(_))
    }

    pub fn phase(&self) -> Option<&HistoryPhase> {
        match &self.state {
            HistoryState::Open(phase) => Some(phase),
            HistoryState::Closed => None,
        }
    }

    pub fn deals(&self) -> &[Deal] {
        &self.deals
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Export outcome or other transient message
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_exporting(&self) -> bool {
        self.pending_export.is_some()
    }

    /// Open the panel, fetching only if nothing is loaded for the current page size
    pub fn open(&mut self) -> Option<Effect> {
        let size = self.page_size.get();

        if self.loaded_limit == Some(size) {
            self.state = HistoryState::Open(HistoryPhase::Loaded);
            return None;
        }
        if matches!(self.pending_fetch, Some((_, limit)) if limit == size) {
            self.state = HistoryState::Open(HistoryPhase::Loading);
            return None;
        }

        self.state = HistoryState::Open(HistoryPhase::Loading);
        Some(self.fetch_deals(size))
    }

    /// Keep the list and page size in memory for the next open
    pub fn close(&mut self) {
        self.state = HistoryState::Closed;
        self.notice = None;
    }

    /// Switch page size and re-fetch from the start
    pub fn set_page_size(&mut self, size: PageSize) -> Effect {
        self.page_size = size;
        self.fetch_deals(size.get())
    }

    /// Re-fetch the current page size
    pub fn refresh(&mut self) -> Effect {
        self.fetch_deals(self.page_size.get())
    }

    /// Request up to `limit` most recent deals. Supersedes any earlier fetch.
    pub fn fetch_deals(&mut self, limit: usize) -> Effect {
        let ticket = self.tickets.issue();
        self.pending_fetch = Some((ticket, limit));
        if self.is_open() {
            self.state = HistoryState::Open(HistoryPhase::Loading);
        }

        tracing::debug!(%ticket, limit, "Requesting recent deals");
        Effect::FetchDeals { ticket, limit }
    }

    /// Apply the outcome of a fetch. Returns false if the response was stale.
    pub fn deals_loaded(&mut self, ticket: RequestTicket, result: Result<Vec<Deal>, ApiError>) -> bool {
        let Some((pending, limit)) = self.pending_fetch else {
            tracing::debug!(%ticket, "Dropping unexpected deals response");
            return false;
        };
        if pending != ticket {
            tracing::debug!(%ticket, "Dropping stale deals response");
            return false;
        }
        self.pending_fetch = None;

        match result {
            Ok(deals) => {
                tracing::info!(%ticket, count = deals.len(), limit, "Deals loaded");
                self.deals = deals;
                self.loaded_limit = Some(limit);
                if self.is_open() {
                    self.state = HistoryState::Open(HistoryPhase::Loaded);
                }
            }
            Err(e) => {
                tracing::warn!(%ticket, error = %e, "Fetching deals failed");
                if self.is_open() {
                    self.state = HistoryState::Open(HistoryPhase::Error {
                        message: e.user_message(Operation::LoadDeals),
                    });
                }
            }
        }
        true
    }

    /// Request a CSV export of the current page size
    pub fn export(&mut self) -> Effect {
        let ticket = self.tickets.issue();
        self.pending_export = Some(ticket);
        self.notice = Some(format!("Exporting {} deals…", self.page_size));

        Effect::ExportDeals {
            ticket,
            limit: self.page_size.get(),
        }
    }

    /// Record where an export landed, or why it failed
    pub fn export_finished(&mut self, ticket: RequestTicket, result: Result<PathBuf, String>) -> bool {
        if self.pending_export != Some(ticket) {
            tracing::debug!(%ticket, "Dropping stale export result");
            return false;
        }
        self.pending_export = None;

        self.notice = Some(match result {
            Ok(path) => {
                tracing::info!(path = %path.display(), "Deals exported");
                format!("Saved {}", path.display())
            }
            Err(message) => {
                tracing::warn!(%message, "Export failed");
                message
            }
        });
        true
    }
}
