//! Wire types exchanged with the quiz service.

use serde::{Deserialize, Serialize};

use super::auction::deserialize_auction;
use super::convention::Convention;
use super::seat::{deserialize_lenient_seat, Seat};

/// One open bidding question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    /// Hand encoding, e.g. `AKQ.J.T98.7652`
    #[serde(default)]
    pub hand: String,
    /// Seat the user bids from
    pub position: Seat,
    /// Convention the quiz was generated for
    #[serde(default)]
    pub convention: Convention,
    /// Bids made before the user's turn, in bidding order
    #[serde(default, deserialize_with = "deserialize_auction")]
    pub auction: Vec<String>,
}

impl Quiz {
    /// Seat that made the first bid of the auction.
    ///
    /// The auction runs from the dealer up to (not including) `position`.
    pub fn dealer(&self) -> Seat {
        self.position.back(self.auction.len())
    }
}

/// Body of a check request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub proposed_bid: String,
    pub hand: String,
    pub position: Seat,
    pub convention: Convention,
    pub auction: Vec<String>,
}

/// Outcome of checking a proposed bid
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    #[serde(default)]
    pub suggested_bid: String,
    #[serde(default)]
    pub explanation: String,
}

/// An archived deal from the history endpoint.
///
/// Every field is optional on the wire; display code substitutes placeholders.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_seat")]
    pub dealer: Option<Seat>,
    #[serde(default)]
    pub north_hand: Option<String>,
    #[serde(default)]
    pub east_hand: Option<String>,
    #[serde(default)]
    pub south_hand: Option<String>,
    #[serde(default)]
    pub west_hand: Option<String>,
    #[serde(default)]
    pub convention: Option<Convention>,
    #[serde(default, alias = "auctionJson", deserialize_with = "deserialize_auction")]
    pub auction: Vec<String>,
}

impl Deal {
    /// Hand encoding held at `seat`
    pub fn hand(&self, seat: Seat) -> Option<&str> {
        match seat {
            Seat::North => self.north_hand.as_deref(),
            Seat::East => self.east_hand.as_deref(),
            Seat::South => self.south_hand.as_deref(),
            Seat::West => self.west_hand.as_deref(),
        }
    }
}
