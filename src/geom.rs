//! Geometry primitives: pointer positions, rectangle edges, per-interaction
//! limits, and the rectangle snapshot handed to the host in events.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use serde::Serialize;

use crate::config::{RectConvention, Unit};

/// A pointer position in page pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// One of the four scalar boundaries of a rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl Edge {
    /// All edges in the order they are written during a body drag.
    pub const ALL: [Self; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];
}

/// A rectangle stored as its four edge coordinates.
///
/// `right` and `bottom` are coordinates measured from the parent's top-left
/// origin, not distances from the far side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Edges {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Edges {
    /// Build edges from a top-left position and a size.
    #[must_use]
    pub fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { top: y, right: x + w, bottom: y + h, left: x }
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    #[must_use]
    pub fn get(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }

    pub fn set(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
            Edge::Left => self.left = value,
        }
    }
}

/// Inclusive bounds for one edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bound {
    pub min: f64,
    pub max: f64,
}

impl Bound {
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the bound. The lower bound is checked first, so an
    /// inverted bound (`min > max`) resolves to `min` for low values and `max`
    /// for high ones instead of panicking like `f64::clamp`.
    #[must_use]
    pub fn clamp(self, value: f64) -> f64 {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }
}

/// Min/max bounds for all four edges, fixed for the duration of an interaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Limits {
    pub top: Bound,
    pub right: Bound,
    pub bottom: Bound,
    pub left: Bound,
}

impl Limits {
    /// Every edge may sit anywhere within `[0, extent]` of its axis.
    #[must_use]
    pub fn permissive(extent_x: f64, extent_y: f64) -> Self {
        Self {
            top: Bound::new(0.0, extent_y),
            right: Bound::new(0.0, extent_x),
            bottom: Bound::new(0.0, extent_y),
            left: Bound::new(0.0, extent_x),
        }
    }

    /// Limits for a body drag: the rectangle slides inside the parent without shrinking.
    /// One larger than the parent is held at the near side.
    #[must_use]
    pub fn for_drag(rect: &Edges, extent_x: f64, extent_y: f64) -> Self {
        let width = rect.width();
        let height = rect.height();
        Self {
            top: Bound::new(0.0, (extent_y - height).max(0.0)),
            right: Bound::new(width, extent_x),
            bottom: Bound::new(height, extent_y),
            left: Bound::new(0.0, (extent_x - width).max(0.0)),
        }
    }

    /// Limits for a resize: no moving edge may bring the size below the minimum.
    #[must_use]
    pub fn for_resize(rect: &Edges, min_width: f64, min_height: f64, extent_x: f64, extent_y: f64) -> Self {
        Self {
            top: Bound::new(0.0, rect.top + rect.height() - min_height),
            right: Bound::new(rect.left + min_width, extent_x),
            bottom: Bound::new(rect.top + min_height, extent_y),
            left: Bound::new(0.0, rect.left + rect.width() - min_width),
        }
    }

    #[must_use]
    pub fn bound(&self, edge: Edge) -> Bound {
        match edge {
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
            Edge::Left => self.left,
        }
    }
}

/// The rectangle as reported to the host in `drag`/`resize` events.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RectSnapshot {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
    pub x: f64,
    pub y: f64,
}

impl RectSnapshot {
    /// Describe `rect` in the given unit system and `right`/`bottom` convention.
    ///
    /// Pixel snapshots are rounded to whole pixels; percent snapshots are exact.
    #[must_use]
    pub fn new(rect: &Edges, unit: Unit, convention: RectConvention, extent_x: f64, extent_y: f64) -> Self {
        Self::sized(rect, (rect.width(), rect.height()), unit, convention, extent_x, extent_y)
    }

    /// Like [`RectSnapshot::new`], but reports `size` as the width and height
    /// instead of measuring the edges.
    #[must_use]
    pub fn sized(
        rect: &Edges,
        size: (f64, f64),
        unit: Unit,
        convention: RectConvention,
        extent_x: f64,
        extent_y: f64,
    ) -> Self {
        let (right, bottom) = match convention {
            RectConvention::FarEdgeDistance => (extent_x - rect.right, extent_y - rect.bottom),
            RectConvention::Coordinate => (rect.right, rect.bottom),
        };
        let snap = Self {
            top: rect.top,
            right,
            bottom,
            left: rect.left,
            width: size.0,
            height: size.1,
            x: rect.left,
            y: rect.top,
        };
        match unit {
            Unit::Percent => snap,
            Unit::Pixel => snap.rounded(),
        }
    }

    fn rounded(self) -> Self {
        Self {
            top: self.top.round(),
            right: self.right.round(),
            bottom: self.bottom.round(),
            left: self.left.round(),
            width: self.width.round(),
            height: self.height.round(),
            x: self.x.round(),
            y: self.y.round(),
        }
    }

    /// Divide every component by the parent extent of its axis, giving values in `[0, 1]`.
    ///
    /// A zero extent maps that axis to zero rather than producing NaN.
    #[must_use]
    pub fn normalized(&self, extent_x: f64, extent_y: f64) -> Self {
        let nx = |v: f64| if extent_x > 0.0 { v / extent_x } else { 0.0 };
        let ny = |v: f64| if extent_y > 0.0 { v / extent_y } else { 0.0 };
        Self {
            top: ny(self.top),
            right: nx(self.right),
            bottom: ny(self.bottom),
            left: nx(self.left),
            width: nx(self.width),
            height: ny(self.height),
            x: nx(self.x),
            y: ny(self.y),
        }
    }
}
