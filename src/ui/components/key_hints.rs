//! Footer key hint rendering.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::theme::{FOOTER_BG, KEY_HINT_BG, TEXT_MUTED, TEXT_SECONDARY};

#[derive(Debug, Clone, Copy)]
pub struct KeyHintBarStyle {
    pub key_style: Style,
    pub action_style: Style,
    pub item_gap: &'static str,
    pub alignment: Alignment,
    pub background: Option<Color>,
}

impl KeyHintBarStyle {
    pub fn footer_bar() -> Self {
        Self {
            key_style: Style::default().fg(TEXT_SECONDARY).bg(KEY_HINT_BG),
            action_style: Style::default().fg(TEXT_MUTED),
            item_gap: "   ",
            alignment: Alignment::Left,
            background: Some(FOOTER_BG),
        }
    }
}

pub fn render_key_hints(
    area: Rect,
    buf: &mut Buffer,
    hints: &[(&str, &str)],
    style: KeyHintBarStyle,
) {
    let mut spans = vec![Span::raw(" ")];

    for (i, (key, action)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(style.item_gap));
        }
        spans.push(Span::styled(format!(" {} ", key), style.key_style));
        spans.push(Span::styled(format!(" {}", action), style.action_style));
    }

    let mut paragraph = Paragraph::new(Line::from(spans)).alignment(style.alignment);
    if let Some(bg) = style.background {
        paragraph = paragraph.style(Style::default().bg(bg));
    }

    paragraph.render(area, buf);
}
