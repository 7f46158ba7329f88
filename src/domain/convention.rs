use std::fmt;

use serde::{Deserialize, Serialize};

/// Bidding system a quiz is played under.
///
/// The selector only offers the five known systems, but any other value the
/// server sends is kept verbatim in `Other` and sent back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Convention {
    #[default]
    Natural,
    TwoOverOne,
    Precision,
    PolishClub,
    Acol,
    Other(String),
}

impl Convention {
    /// Conventions offered by the selector, in display order
    pub const SELECTABLE: [Convention; 5] = [
        Convention::Natural,
        Convention::TwoOverOne,
        Convention::Precision,
        Convention::PolishClub,
        Convention::Acol,
    ];

    /// Wire value
    pub fn as_str(&self) -> &str {
        match self {
            Convention::Natural => "natural",
            Convention::TwoOverOne => "2/1",
            Convention::Precision => "precision",
            Convention::PolishClub => "polish club",
            Convention::Acol => "acol",
            Convention::Other(value) => value,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Convention::Natural => "Natural",
            Convention::TwoOverOne => "2/1 Game Force",
            Convention::Precision => "Precision",
            Convention::PolishClub => "Polish Club",
            Convention::Acol => "Acol",
            Convention::Other(value) => alias_display_name(value).unwrap_or(value),
        }
    }

    /// Parse a wire value.
    ///
    /// Only exact wire values map to a known system; anything else, aliases
    /// included, is kept untouched so it goes back to the server as received.
    pub fn parse(s: &str) -> Self {
        match s {
            "natural" => Convention::Natural,
            "2/1" => Convention::TwoOverOne,
            "precision" => Convention::Precision,
            "polish club" => Convention::PolishClub,
            "acol" => Convention::Acol,
            _ => Convention::Other(s.to_string()),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.as_str().trim().is_empty()
    }

    /// Next selectable convention, wrapping around
    pub fn next(&self) -> Self {
        self.step(1)
    }

    /// Previous selectable convention, wrapping around
    pub fn prev(&self) -> Self {
        self.step(Self::SELECTABLE.len() - 1)
    }

    fn step(&self, by: usize) -> Self {
        let len = Self::SELECTABLE.len();
        match Self::SELECTABLE.iter().position(|c| c == self) {
            Some(index) => Self::SELECTABLE[(index + by) % len].clone(),
            None => Convention::Natural,
        }
    }
}

/// Display name of the known system a free-form value commonly refers to
fn alias_display_name(value: &str) -> Option<&'static str> {
    match value.trim().to_lowercase().as_str() {
        "natural" | "sayc" | "standard" => Some("Natural"),
        "2/1" | "two-over-one" | "2-over-1" => Some("2/1 Game Force"),
        "precision" => Some("Precision"),
        "polish club" | "polish-club" | "polish_club" => Some("Polish Club"),
        "acol" => Some("Acol"),
        _ => None,
    }
}

impl From<String> for Convention {
    fn from(value: String) -> Self {
        Convention::parse(&value)
    }
}

impl From<Convention> for String {
    fn from(value: Convention) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
