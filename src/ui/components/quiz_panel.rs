//! Main quiz panel: hand, auction, convention selector and check result

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use super::cards::{auction_line, bid_span, suit_line};
use super::spinner::Spinner;
use super::theme::{
    ACCENT_ERROR, ACCENT_PRIMARY, ACCENT_SUCCESS, ACCENT_WARNING, BORDER, SELECTED_BG,
    TEXT_MUTED, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::view::{CheckPanel, QuizPanel as PanelView, QuizPrimary, QuizScreen};

pub struct QuizPanel<'a> {
    screen: &'a QuizScreen,
    spinner: &'a Spinner,
}

impl<'a> QuizPanel<'a> {
    pub fn new(screen: &'a QuizScreen, spinner: &'a Spinner) -> Self {
        Self { screen, spinner }
    }
}

fn block(title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(BORDER))
        .title(Span::styled(
            format!(" {} ", title),
            Style::default().fg(TEXT_SECONDARY),
        ))
}

impl Widget for QuizPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match &self.screen.primary {
            QuizPrimary::Idle => {
                Paragraph::new(Line::styled(
                    "Press Ctrl+N for a new quiz",
                    Style::default().fg(TEXT_MUTED),
                ))
                .block(block("Quiz"))
                .render(area, buf);
            }
            QuizPrimary::Loading => {
                Paragraph::new(Line::from(
                    self.spinner.with_label("Loading quiz…", ACCENT_PRIMARY),
                ))
                .block(block("Quiz"))
                .render(area, buf);
            }
            QuizPrimary::Error { message } => {
                Paragraph::new(vec![
                    Line::styled(message.clone(), Style::default().fg(ACCENT_ERROR)),
                    Line::raw(""),
                    Line::styled("Press Ctrl+N to try again", Style::default().fg(TEXT_MUTED)),
                ])
                .wrap(Wrap { trim: false })
                .block(block("Quiz"))
                .render(area, buf);
            }
            QuizPrimary::Quiz(panel) => {
                render_loaded(panel, self.screen.show_hcp, self.spinner, area, buf)
            }
        }
    }
}

fn render_loaded(panel: &PanelView, show_hcp: bool, spinner: &Spinner, area: Rect, buf: &mut Buffer) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(8), // hand + auction
            Constraint::Length(3), // conventions
            Constraint::Min(3),    // result
        ])
        .split(area);
    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);

    // Hand
    let mut hand_lines: Vec<Line> = panel.hand.suits.iter().map(suit_line).collect();
    if show_hcp {
        hand_lines.push(Line::raw(""));
        hand_lines.push(Line::styled(
            format!("{} HCP  {}", panel.hand.hcp, panel.hand.shape),
            Style::default().fg(TEXT_MUTED),
        ));
    }
    Paragraph::new(hand_lines)
        .block(block(&format!("Your hand ({})", panel.position)))
        .render(top[0], buf);

    // Auction
    let auction = if panel.auction.is_empty() {
        Line::styled("You open the bidding", Style::default().fg(TEXT_MUTED))
    } else {
        auction_line(&panel.auction)
    };
    Paragraph::new(vec![
        auction,
        Line::raw(""),
        Line::from(vec![
            Span::styled("Quiz convention: ", Style::default().fg(TEXT_MUTED)),
            Span::styled(panel.quiz_convention.clone(), Style::default().fg(TEXT_SECONDARY)),
        ]),
    ])
    .wrap(Wrap { trim: false })
    .block(block("Auction"))
    .render(top[1], buf);

    // Convention selector
    let mut options = Vec::new();
    for (i, option) in panel.conventions.iter().enumerate() {
        if i > 0 {
            options.push(Span::raw("  "));
        }
        let style = if option.selected {
            Style::default()
                .fg(ACCENT_PRIMARY)
                .bg(SELECTED_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(TEXT_SECONDARY)
        };
        options.push(Span::styled(format!(" {} ", option.label), style));
    }
    if !panel.conventions.iter().any(|o| o.selected) {
        options.push(Span::raw("  "));
        options.push(Span::styled(
            format!("[{}]", panel.selected_convention),
            Style::default().fg(ACCENT_PRIMARY),
        ));
    }
    Paragraph::new(Line::from(options))
        .block(block("Convention (Tab)"))
        .render(rows[1], buf);

    // Check result
    let result_lines = match &panel.check {
        CheckPanel::Empty => vec![Line::styled(
            "Type a bid and press Enter",
            Style::default().fg(TEXT_MUTED),
        )],
        CheckPanel::Checking => vec![Line::from(
            spinner.with_label("Checking…", ACCENT_PRIMARY),
        )],
        CheckPanel::Result {
            suggested,
            matches,
            explanation,
        } => {
            let verdict = if *matches {
                Span::styled("Correct!", Style::default().fg(ACCENT_SUCCESS).add_modifier(Modifier::BOLD))
            } else {
                Span::styled("Suggested:", Style::default().fg(ACCENT_WARNING))
            };
            vec![
                Line::from(vec![verdict, Span::raw(" "), bid_span(suggested)]),
                Line::raw(""),
                Line::styled(explanation.clone(), Style::default().fg(TEXT_PRIMARY)),
            ]
        }
        CheckPanel::Error { message } => vec![
            Line::styled(message.clone(), Style::default().fg(ACCENT_ERROR)),
            Line::styled("Press Enter to retry", Style::default().fg(TEXT_MUTED)),
        ],
    };
    Paragraph::new(result_lines)
        .wrap(Wrap { trim: false })
        .block(block("Result"))
        .render(rows[2], buf);
}
