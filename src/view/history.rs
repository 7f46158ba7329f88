use chrono::{DateTime, NaiveDateTime, Utc};

use super::quiz::convention_label;
use super::{auction_chips, BidChip, HandView, PLACEHOLDER};
use crate::domain::{Deal, Seat};
use crate::session::{HistoryBrowser, HistoryPhase, PAGE_SIZES};

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryScreen {
    pub open: bool,
    pub body: HistoryBody,
    pub page_size: usize,
    pub page_sizes: Vec<(usize, bool)>,
    pub rows: Vec<DealRow>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryBody {
    Closed,
    Loading,
    Empty,
    Rows,
    Error { message: String },
}

/// One archived deal, ready to draw
#[derive(Debug, Clone, PartialEq)]
pub struct DealRow {
    pub id: String,
    pub created_at: String,
    pub dealer: String,
    pub convention: String,
    /// Hands in N, E, S, W order; `None` where the record has no hand
    pub hands: Vec<(Seat, Option<HandView>)>,
    pub auction: Vec<BidChip>,
}

pub fn compose_history(history: &HistoryBrowser) -> HistoryScreen {
    let rows: Vec<DealRow> = history.deals().iter().map(deal_row).collect();

    let body = match history.phase() {
        None => HistoryBody::Closed,
        Some(HistoryPhase::Loading) => HistoryBody::Loading,
        Some(HistoryPhase::Error { message }) => HistoryBody::Error {
            message: message.clone(),
        },
        Some(HistoryPhase::Loaded) if rows.is_empty() => HistoryBody::Empty,
        Some(HistoryPhase::Loaded) => HistoryBody::Rows,
    };

    let current = history.page_size().get();
    HistoryScreen {
        open: history.is_open(),
        body,
        page_size: current,
        page_sizes: PAGE_SIZES.iter().map(|s| (*s, *s == current)).collect(),
        rows,
        notice: history.notice().map(str::to_string),
    }
}

pub fn deal_row(deal: &Deal) -> DealRow {
    DealRow {
        id: deal
            .id
            .map(|id| id.to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        created_at: deal
            .created_at
            .as_deref()
            .map(format_timestamp)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        dealer: deal
            .dealer
            .map(|s| s.name().to_string())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        convention: deal
            .convention
            .as_ref()
            .map(convention_label)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        hands: Seat::ALL
            .iter()
            .map(|seat| {
                let hand = deal
                    .hand(*seat)
                    .filter(|h| !h.trim().is_empty())
                    .map(HandView::new);
                (*seat, hand)
            })
            .collect(),
        auction: auction_chips(&deal.auction, deal.dealer),
    }
}

/// `2024-05-01 14:03 UTC` for RFC 3339 or ISO local timestamps, otherwise the raw text
fn format_timestamp(raw: &str) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return PLACEHOLDER.to_string();
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Utc).format("%Y-%m-%d %H:%M UTC").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return parsed.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}
