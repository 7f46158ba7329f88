//! Bid tokens: `PASS` or `<level 1-7><C|D|H|S|NT>`.
//!
//! Anything else is still a legal proposed bid as far as the client is
//! concerned; it just gets no special formatting.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use super::hand::Suit;

static CONTRACT_BID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([1-7])(NT|[CDHS])$").expect("contract bid pattern is valid"));

/// Token used for a pass
pub const PASS: &str = "PASS";

/// Denomination of a contract bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strain {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
    NoTrump,
}

impl Strain {
    fn from_token(token: &str) -> Option<Self> {
        match token {
            "C" => Some(Strain::Clubs),
            "D" => Some(Strain::Diamonds),
            "H" => Some(Strain::Hearts),
            "S" => Some(Strain::Spades),
            "NT" => Some(Strain::NoTrump),
            _ => None,
        }
    }

    /// The suit named by this strain, if any
    pub fn suit(&self) -> Option<Suit> {
        match self {
            Strain::Clubs => Some(Suit::Clubs),
            Strain::Diamonds => Some(Suit::Diamonds),
            Strain::Hearts => Some(Suit::Hearts),
            Strain::Spades => Some(Suit::Spades),
            Strain::NoTrump => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Strain::Clubs => "C",
            Strain::Diamonds => "D",
            Strain::Hearts => "H",
            Strain::Spades => "S",
            Strain::NoTrump => "NT",
        }
    }
}

/// A recognised bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Bid {
    Pass,
    Contract { level: u8, strain: Strain },
}

impl Bid {
    /// Parse a bid token. Case and surrounding whitespace are ignored.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim().to_ascii_uppercase();
        if token == PASS {
            return Some(Bid::Pass);
        }

        let captures = CONTRACT_BID.captures(&token)?;
        let level = captures[1].parse().ok()?;
        let strain = Strain::from_token(&captures[2])?;
        Some(Bid::Contract { level, strain })
    }

    /// Human-readable label: `PASS`, `1NT`, `2 ♥`
    pub fn label(&self) -> String {
        match self {
            Bid::Pass => PASS.to_string(),
            Bid::Contract { level, strain } => match strain.suit() {
                Some(suit) => format!("{} {}", level, suit.symbol()),
                None => format!("{}NT", level),
            },
        }
    }

    pub fn accent(&self) -> BidAccent {
        match self {
            Bid::Contract { strain, .. } if strain.suit().is_some_and(|s| s.is_red()) => {
                BidAccent::Emphasized
            }
            _ => BidAccent::Normal,
        }
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bid::Pass => f.write_str(PASS),
            Bid::Contract { level, strain } => write!(f, "{}{}", level, strain.token()),
        }
    }
}

/// Styling hint for a bid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BidAccent {
    /// Red-suit bids
    Emphasized,
    #[default]
    Normal,
}

/// Display label for a raw bid token; unrecognised tokens come back unchanged
pub fn format_bid_label(token: &str) -> String {
    match Bid::parse(token) {
        Some(bid) => bid.label(),
        None => token.to_string(),
    }
}

/// Accent for a raw bid token; unrecognised tokens are `Normal`
pub fn bid_accent(token: &str) -> BidAccent {
    Bid::parse(token)
        .map(|bid| bid.accent())
        .unwrap_or_default()
}
