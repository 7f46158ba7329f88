//! Shared UI color constants.

use ratatui::style::Color;

pub const ACCENT_PRIMARY: Color = Color::Rgb(97, 175, 239);
pub const ACCENT_SUCCESS: Color = Color::Rgb(152, 195, 121);
pub const ACCENT_ERROR: Color = Color::Rgb(224, 108, 117);
pub const ACCENT_WARNING: Color = Color::Rgb(229, 192, 123);

/// Hearts and diamonds
pub const SUIT_RED: Color = Color::Rgb(232, 84, 84);
/// Spades and clubs
pub const SUIT_BLACK: Color = Color::Rgb(220, 220, 220);

pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);
pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 120);
pub const TEXT_FAINT: Color = Color::Rgb(80, 80, 80);

pub const SELECTED_BG: Color = Color::Rgb(40, 60, 80);
pub const BORDER: Color = Color::Rgb(70, 70, 70);
pub const FOOTER_BG: Color = Color::Rgb(25, 25, 25);
pub const KEY_HINT_BG: Color = Color::Rgb(60, 60, 60);
