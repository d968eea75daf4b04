//! Resize handles and the edge sets they activate.
//!
//! A handle id is two characters: the vertical position (`t`, `m`, `b`) then
//! the horizontal position (`l`, `m`, `r`). Corner handles move two adjacent
//! edges; edge-midpoint handles move one.

#[cfg(test)]
#[path = "handle_test.rs"]
mod handle_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::geom::Edge;

/// One of the eight grabbable resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Handle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleRight,
    BottomRight,
    BottomMiddle,
    BottomLeft,
    MiddleLeft,
}

impl Handle {
    /// All handles, clockwise from the top-left corner.
    pub const ALL: [Self; 8] = [
        Self::TopLeft,
        Self::TopMiddle,
        Self::TopRight,
        Self::MiddleRight,
        Self::BottomRight,
        Self::BottomMiddle,
        Self::BottomLeft,
        Self::MiddleLeft,
    ];

    /// The two-character id used by the host.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::TopLeft => "tl",
            Self::TopMiddle => "tm",
            Self::TopRight => "tr",
            Self::MiddleRight => "mr",
            Self::BottomRight => "br",
            Self::BottomMiddle => "bm",
            Self::BottomLeft => "bl",
            Self::MiddleLeft => "ml",
        }
    }

    /// Edges this handle moves while resizing.
    #[must_use]
    pub fn edges(self) -> ActiveEdges {
        ActiveEdges::from_handle_id(self.id())
    }
}

/// Error returned when a string is not one of the eight handle ids.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resize handle id: {0:?}")]
pub struct UnknownHandle(pub String);

impl FromStr for Handle {
    type Err = UnknownHandle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.id() == s)
            .ok_or_else(|| UnknownHandle(s.to_string()))
    }
}

impl fmt::Display for Handle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl Serialize for Handle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for Handle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// The subset of edges moved by a resize.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveEdges {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl ActiveEdges {
    /// Resolve a handle id leniently: unrecognized characters activate nothing.
    #[must_use]
    pub fn from_handle_id(id: &str) -> Self {
        let mut chars = id.chars();
        let vertical = chars.next();
        let horizontal = chars.next();
        Self {
            top: vertical == Some('t'),
            right: horizontal == Some('r'),
            bottom: vertical == Some('b'),
            left: horizontal == Some('l'),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !(self.top || self.right || self.bottom || self.left)
    }

    #[must_use]
    pub fn contains(&self, edge: Edge) -> bool {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    /// Active edges in write order.
    pub fn iter(self) -> impl Iterator<Item = Edge> {
        Edge::ALL.into_iter().filter(move |e| self.contains(*e))
    }
}
