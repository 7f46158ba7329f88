//! Overlay listing recently archived deals

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use super::cards::{auction_line, compact_hand};
use super::spinner::Spinner;
use super::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, BORDER, SELECTED_BG, TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::view::{DealRow, HistoryBody, HistoryScreen, PLACEHOLDER};

pub struct HistoryPanel<'a> {
    screen: &'a HistoryScreen,
    spinner: &'a Spinner,
    /// First row to show
    scroll: usize,
}

impl<'a> HistoryPanel<'a> {
    pub fn new(screen: &'a HistoryScreen, spinner: &'a Spinner, scroll: usize) -> Self {
        Self {
            screen,
            spinner,
            scroll,
        }
    }
}

fn deal_lines(row: &DealRow) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("#{}", row.id),
            Style::default().fg(ACCENT_PRIMARY).add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", row.created_at), Style::default().fg(TEXT_MUTED)),
        Span::styled(
            format!("  dealer {}  {}", row.dealer, row.convention),
            Style::default().fg(TEXT_SECONDARY),
        ),
    ])];

    for (seat, hand) in &row.hands {
        let mut spans = vec![Span::styled(
            format!("  {} ", seat.symbol()),
            Style::default().fg(TEXT_MUTED),
        )];
        match hand {
            Some(hand) => spans.extend(compact_hand(hand)),
            None => spans.push(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_MUTED))),
        }
        lines.push(Line::from(spans));
    }

    let mut auction = auction_line(&row.auction);
    auction.spans.insert(0, Span::raw("  "));
    if row.auction.is_empty() {
        auction.spans.push(Span::styled(PLACEHOLDER, Style::default().fg(TEXT_MUTED)));
    }
    lines.push(auction);
    lines.push(Line::raw(""));
    lines
}

impl Widget for HistoryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(BORDER))
            .title(Span::styled(" Recent deals ", Style::default().fg(TEXT_PRIMARY)));
        let inner = block.inner(area);
        block.render(area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // page sizes
                Constraint::Min(1),    // deals
                Constraint::Length(1), // notice
            ])
            .split(inner);

        // Page size selector
        let mut sizes = vec![Span::styled("Show ", Style::default().fg(TEXT_MUTED))];
        for (size, selected) in &self.screen.page_sizes {
            let style = if *selected {
                Style::default().fg(ACCENT_PRIMARY).bg(SELECTED_BG)
            } else {
                Style::default().fg(TEXT_SECONDARY)
            };
            sizes.push(Span::styled(format!(" {} ", size), style));
        }
        Paragraph::new(Line::from(sizes)).render(rows[0], buf);

        // Body
        let body: Vec<Line> = match &self.screen.body {
            HistoryBody::Closed => Vec::new(),
            HistoryBody::Loading => vec![Line::from(
                self.spinner.with_label("Loading deals…", ACCENT_PRIMARY),
            )],
            HistoryBody::Empty => vec![Line::styled(
                "No deals recorded yet",
                Style::default().fg(TEXT_MUTED),
            )],
            HistoryBody::Error { message } => {
                let mut lines = vec![
                    Line::styled(message.clone(), Style::default().fg(ACCENT_ERROR)),
                    Line::raw(""),
                ];
                lines.extend(
                    self.screen
                        .rows
                        .iter()
                        .skip(self.scroll)
                        .flat_map(deal_lines),
                );
                lines
            }
            HistoryBody::Rows => self
                .screen
                .rows
                .iter()
                .skip(self.scroll)
                .flat_map(deal_lines)
                .collect(),
        };
        Paragraph::new(body)
            .wrap(Wrap { trim: false })
            .render(rows[1], buf);

        if let Some(notice) = &self.screen.notice {
            Paragraph::new(Line::styled(notice.clone(), Style::default().fg(TEXT_SECONDARY)))
                .render(rows[2], buf);
        }
    }
}
