//! Display composition
//!
//! Pure mapping from state-machine snapshots to view models. Nothing here
//! owns state; absent fields become [`PLACEHOLDER`].

pub mod history;
pub mod quiz;

use crate::domain::{
    bid_accent, decode_hand, format_bid_label, high_card_points, shape_summary, BidAccent, Seat,
};

pub use history::{compose_history, DealRow, HistoryBody, HistoryScreen};
pub use quiz::{compose_quiz, CheckPanel, ConventionOption, QuizPanel, QuizPrimary, QuizScreen};

/// Shown wherever a value is missing
pub const PLACEHOLDER: &str = "—";

/// One suit line of a hand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitLine {
    pub symbol: &'static str,
    pub cards: String,
    pub red: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView {
    pub suits: Vec<SuitLine>,
    pub hcp: u32,
    /// Suit lengths, e.g. `3-1-3-4`
    pub shape: String,
}

impl HandView {
    pub fn new(hand: &str) -> Self {
        let suits = decode_hand(hand)
            .iter()
            .map(|holding| SuitLine {
                symbol: holding.suit.symbol(),
                cards: holding.display().to_string(),
                red: holding.suit.is_red(),
            })
            .collect();

        Self {
            suits,
            hcp: high_card_points(hand),
            shape: shape_summary(hand),
        }
    }

    /// Single-line form, e.g. `♠AKQ ♥J ♦T98 ♣7652`
    pub fn compact(&self) -> String {
        self.suits
            .iter()
            .map(|s| format!("{}{}", s.symbol, s.cards))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A bid as shown in an auction or result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BidChip {
    /// Seat that made the bid, when the dealer is known
    pub seat: Option<Seat>,
    pub token: String,
    pub label: String,
    pub accent: BidAccent,
}

impl BidChip {
    pub fn new(token: &str, seat: Option<Seat>) -> Self {
        Self {
            seat,
            token: token.to_string(),
            label: format_bid_label(token),
            accent: bid_accent(token),
        }
    }
}

/// Label an auction, seating bids clockwise from `dealer`
pub fn auction_chips(auction: &[String], dealer: Option<Seat>) -> Vec<BidChip> {
    let mut seat = dealer;
    auction
        .iter()
        .map(|token| {
            let chip = BidChip::new(token, seat);
            seat = seat.map(|s| s.next());
            chip
        })
        .collect()
}
