//! Auction decoding.
//!
//! Auctions reach the client in several shapes: a JSON array, a JSON-encoded
//! array inside a string (the archived `auctionJson` column), or a plain
//! comma-separated string. All of them are normalised into `Vec<String>` once,
//! at the deserialisation boundary.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Auction as it arrives on the wire
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawAuction {
    Tokens(Vec<String>),
    Text(String),
}

impl From<&str> for RawAuction {
    fn from(text: &str) -> Self {
        RawAuction::Text(text.to_string())
    }
}

impl From<String> for RawAuction {
    fn from(text: String) -> Self {
        RawAuction::Text(text)
    }
}

impl From<Vec<String>> for RawAuction {
    fn from(tokens: Vec<String>) -> Self {
        RawAuction::Tokens(tokens)
    }
}

impl From<Vec<&str>> for RawAuction {
    fn from(tokens: Vec<&str>) -> Self {
        RawAuction::Tokens(tokens.into_iter().map(str::to_string).collect())
    }
}

/// Normalise any accepted auction shape into ordered bid tokens.
///
/// Never fails: input that cannot be understood yields an empty auction.
pub fn decode_auction(raw: impl Into<RawAuction>) -> Vec<String> {
    match raw.into() {
        RawAuction::Tokens(tokens) => clean_tokens(tokens),
        RawAuction::Text(text) => decode_auction_text(&text),
    }
}

fn decode_auction_text(text: &str) -> Vec<String> {
    let text = text.trim();
    if text.is_empty() {
        return Vec::new();
    }

    if text.starts_with('[') {
        return match serde_json::from_str::<Value>(text) {
            Ok(value) => decode_auction_value(&value),
            Err(e) => {
                tracing::debug!(error = %e, "Unparseable auction JSON, treating as empty");
                Vec::new()
            }
        };
    }

    clean_tokens(text.split(',').map(str::to_string))
}

/// Decode an auction from an arbitrary JSON value.
///
/// Arrays keep their string elements, strings are decoded as text, and
/// everything else (including `null`) is an empty auction.
pub fn decode_auction_value(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => clean_tokens(
            items
                .iter()
                .filter_map(|item| item.as_str().map(str::to_string)),
        ),
        Value::String(text) => decode_auction_text(text),
        _ => Vec::new(),
    }
}

fn clean_tokens(tokens: impl IntoIterator<Item = String>) -> Vec<String> {
    tokens
        .into_iter()
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Serde adapter for auction fields that may be an array, a string, or null
pub fn deserialize_auction<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(decode_auction_value).unwrap_or_default())
}
