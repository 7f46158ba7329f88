//! Styled spans for hands and bids

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::theme::{SUIT_BLACK, SUIT_RED, TEXT_MUTED, TEXT_PRIMARY};
use crate::domain::BidAccent;
use crate::view::{BidChip, HandView, SuitLine};

fn suit_style(red: bool) -> Style {
    Style::default().fg(if red { SUIT_RED } else { SUIT_BLACK })
}

/// `♠ AKQ` with the symbol colored by suit
pub fn suit_line(suit: &SuitLine) -> Line<'static> {
    Line::from(vec![
        Span::styled(suit.symbol, suit_style(suit.red)),
        Span::raw(" "),
        Span::styled(suit.cards.clone(), Style::default().fg(TEXT_PRIMARY)),
    ])
}

/// Hand on one line, suits separated by spaces
pub fn compact_hand(hand: &HandView) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hand.suits.len() * 2);
    for (i, suit) in hand.suits.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(suit.symbol, suit_style(suit.red)));
        spans.push(Span::raw(suit.cards.clone()));
    }
    spans
}

pub fn bid_span(chip: &BidChip) -> Span<'static> {
    let style = match chip.accent {
        BidAccent::Emphasized => Style::default().fg(SUIT_RED).add_modifier(Modifier::BOLD),
        BidAccent::Normal => Style::default().fg(TEXT_PRIMARY),
    };
    Span::styled(chip.label.clone(), style)
}

/// `S:1♣  W:Pass ...` sequence with seat prefixes where known
pub fn auction_line(chips: &[BidChip]) -> Line<'static> {
    let mut spans = Vec::new();
    for (i, chip) in chips.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        if let Some(seat) = chip.seat {
            spans.push(Span::styled(
                format!("{}:", seat.symbol()),
                Style::default().fg(TEXT_MUTED),
            ));
        }
        spans.push(bid_span(chip));
    }
    Line::from(spans)
}
