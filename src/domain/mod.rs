//! Bridge domain types and the pure formatting helpers used to display them.

pub mod auction;
pub mod bid;
pub mod convention;
pub mod hand;
pub mod models;
pub mod seat;

pub use auction::{decode_auction, decode_auction_value, RawAuction};
pub use bid::{bid_accent, format_bid_label, Bid, BidAccent, Strain};
pub use convention::Convention;
pub use hand::{decode_hand, high_card_points, shape_summary, Suit, SuitHolding};
pub use models::{CheckRequest, CheckResult, Deal, Quiz};
pub use seat::Seat;
