//! Compact hand encoding.
//!
//! A hand is written as four runs of rank characters separated by `.`, in the
//! fixed order spades, hearts, diamonds, clubs: `AKQ.J.T98.7652`. A suit with
//! no cards is either empty or the single placeholder character `-`.

use std::fmt;

/// Separator between suit groups in a hand encoding
pub const SUIT_DELIMITER: char = '.';

/// Placeholder a suit group may use for "no cards in this suit"
pub const VOID_PLACEHOLDER: &str = "-";

/// What a void suit renders as
pub const VOID_DISPLAY: &str = "—";

/// Card suit, in hand-encoding order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in the order they appear in a hand encoding
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Unicode glyph for the suit
    pub fn symbol(&self) -> &'static str {
        match self {
            Suit::Spades => "♠",
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
        }
    }

    /// Single-letter name used in bid tokens
    pub fn letter(&self) -> char {
        match self {
            Suit::Spades => 'S',
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Clubs => 'C',
        }
    }

    pub fn is_red(&self) -> bool {
        matches!(self, Suit::Hearts | Suit::Diamonds)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Cards held in one suit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitHolding {
    pub suit: Suit,
    /// Rank characters as encoded; empty for a void
    pub cards: String,
}

impl SuitHolding {
    pub fn is_void(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the suit
    pub fn len(&self) -> usize {
        self.cards.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.is_void()
    }

    /// Text to show for this suit; voids render as a dash
    pub fn display(&self) -> &str {
        if self.is_void() {
            VOID_DISPLAY
        } else {
            &self.cards
        }
    }
}

/// Split a hand encoding into its four suit groups.
///
/// Missing trailing suits are padded as voids and groups past the fourth are
/// ignored, so the result always has exactly four entries.
pub fn decode_hand(hand: &str) -> [SuitHolding; 4] {
    let mut groups = hand.split(SUIT_DELIMITER);

    Suit::ALL.map(|suit| {
        let raw = groups.next().unwrap_or("").trim();
        let cards = if raw == VOID_PLACEHOLDER {
            String::new()
        } else {
            raw.to_string()
        };
        SuitHolding { suit, cards }
    })
}

/// Point value of a single rank character (A=4, K=3, Q=2, J=1)
pub fn rank_points(rank: char) -> u32 {
    match rank {
        'A' => 4,
        'K' => 3,
        'Q' => 2,
        'J' => 1,
        _ => 0,
    }
}

/// High card points held in a hand encoding. Unknown characters score zero.
pub fn high_card_points(hand: &str) -> u32 {
    decode_hand(hand)
        .iter()
        .flat_map(|holding| holding.cards.chars())
        .map(rank_points)
        .sum()
}

/// Suit lengths in spades, hearts, diamonds, clubs order
pub fn suit_lengths(hand: &str) -> [usize; 4] {
    decode_hand(hand).map(|holding| holding.len())
}

/// Shape written as `5-4-3-1`, in suit order
pub fn shape_summary(hand: &str) -> String {
    suit_lengths(hand)
        .iter()
        .map(|len| len.to_string())
        .collect::<Vec<_>>()
        .join("-")
}
