//! Grid snapping.
//!
//! A coordinate snaps to the nearer of the two grid lines around it, but only
//! when that line is within the snap distance. Body drags snap the whole
//! rectangle by whichever corner lies closer to the grid, so the size is
//! preserved; resizes snap each moving edge on its own.

#[cfg(test)]
#[path = "snap_test.rs"]
mod snap_test;

use crate::geom::{Edges, Point};

/// Outcome of snapping one coordinate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSnap {
    /// The nearer grid line.
    pub value: f64,
    /// Absolute distance from the input to `value`.
    pub diff: f64,
    /// Whether `diff` is within the snap distance.
    pub snapped: bool,
}

/// Outcome of snapping a point on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointSnap {
    pub x: AxisSnap,
    pub y: AxisSnap,
}

/// Snap `v` to a grid of cell size `grid`. Ties go to the lower line.
///
/// A non-positive or non-finite grid never snaps.
#[must_use]
pub fn snap_value(v: f64, grid: f64, max_distance: f64) -> AxisSnap {
    if !(grid.is_finite() && grid > 0.0) {
        return AxisSnap { value: v, diff: f64::INFINITY, snapped: false };
    }
    let div = v / grid;
    let lower = div.floor() * grid;
    let upper = div.ceil() * grid;
    let (value, diff) = if v - lower <= upper - v { (lower, v - lower) } else { (upper, upper - v) };
    AxisSnap { value, diff, snapped: diff <= max_distance }
}

/// Snap a point with independent x/y grid sizes.
#[must_use]
pub fn snap_point(p: Point, grid_x: f64, grid_y: f64, max_distance: f64) -> PointSnap {
    PointSnap {
        x: snap_value(p.x, grid_x, max_distance),
        y: snap_value(p.y, grid_y, max_distance),
    }
}

/// Snap a dragged rectangle while keeping `width` and `height` exact.
///
/// Per axis, when either corner is within reach of a grid line, the corner
/// with the smaller diff wins (top-left on a tie) and the opposite edge is
/// derived from the size.
#[must_use]
pub fn snap_body(candidate: Edges, width: f64, height: f64, grid_x: f64, grid_y: f64, max_distance: f64) -> Edges {
    let top_left = snap_point(Point::new(candidate.left, candidate.top), grid_x, grid_y, max_distance);
    let bottom_right = snap_point(Point::new(candidate.right, candidate.bottom), grid_x, grid_y, max_distance);
    let mut out = candidate;

    if top_left.x.snapped || bottom_right.x.snapped {
        if top_left.x.diff <= bottom_right.x.diff {
            out.left = top_left.x.value;
            out.right = out.left + width;
        } else {
            out.right = bottom_right.x.value;
            out.left = out.right - width;
        }
    }

    if top_left.y.snapped || bottom_right.y.snapped {
        if top_left.y.diff <= bottom_right.y.diff {
            out.top = top_left.y.value;
            out.bottom = out.top + height;
        } else {
            out.bottom = bottom_right.y.value;
            out.top = out.bottom - height;
        }
    }

    out
}

/// Snap each edge of a resize candidate independently.
#[must_use]
pub fn snap_edges(candidate: Edges, grid_x: f64, grid_y: f64, max_distance: f64) -> Edges {
    let top_left = snap_point(Point::new(candidate.left, candidate.top), grid_x, grid_y, max_distance);
    let bottom_right = snap_point(Point::new(candidate.right, candidate.bottom), grid_x, grid_y, max_distance);
    let pick = |s: AxisSnap, raw: f64| if s.snapped { s.value } else { raw };
    Edges {
        top: pick(top_left.y, candidate.top),
        right: pick(bottom_right.x, candidate.right),
        bottom: pick(bottom_right.y, candidate.bottom),
        left: pick(top_left.x, candidate.left),
    }
}
