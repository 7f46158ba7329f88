use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One of the four seats at the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    North,
    East,
    South,
    West,
}

impl Seat {
    /// Seats in clockwise order starting at North
    pub const ALL: [Seat; 4] = [Seat::North, Seat::East, Seat::South, Seat::West];

    /// Single-letter label used on the wire
    pub fn symbol(&self) -> &'static str {
        match self {
            Seat::North => "N",
            Seat::East => "E",
            Seat::South => "S",
            Seat::West => "W",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Seat::North => "North",
            Seat::East => "East",
            Seat::South => "South",
            Seat::West => "West",
        }
    }

    /// Accepts `N`, `north`, `NORTH` and so on
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "N" | "NORTH" => Some(Seat::North),
            "E" | "EAST" => Some(Seat::East),
            "S" | "SOUTH" => Some(Seat::South),
            "W" | "WEST" => Some(Seat::West),
            _ => None,
        }
    }

    /// Next seat clockwise (the next to bid)
    pub fn next(&self) -> Self {
        match self {
            Seat::North => Seat::East,
            Seat::East => Seat::South,
            Seat::South => Seat::West,
            Seat::West => Seat::North,
        }
    }

    /// Previous seat clockwise
    pub fn prev(&self) -> Self {
        match self {
            Seat::North => Seat::West,
            Seat::East => Seat::North,
            Seat::South => Seat::East,
            Seat::West => Seat::South,
        }
    }

    /// Seat `steps` turns before this one
    pub fn back(&self, steps: usize) -> Self {
        (0..steps % 4).fold(*self, |seat, _| seat.prev())
    }
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Seat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

impl<'de> Deserialize<'de> for Seat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Seat::parse(&raw).ok_or_else(|| serde::de::Error::custom(format!("unknown seat '{raw}'")))
    }
}

/// Serde adapter for optional seats where unknown values become `None`
pub fn deserialize_lenient_seat<'de, D>(deserializer: D) -> Result<Option<Seat>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(Seat::parse))
}
