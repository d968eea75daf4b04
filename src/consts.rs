//! Shared numeric constants for the drag-resize engine.

// ── Extents ─────────────────────────────────────────────────────

/// Far bound of either axis when the engine works in percent units.
pub const PERCENT_EXTENT: f64 = 100.0;

// ── Snapping ────────────────────────────────────────────────────

/// A coordinate only snaps to the grid when it lies within this many units of a grid line.
pub const MIN_SNAP_DISTANCE: f64 = 5.0;

/// Default grid cell size on both axes.
pub const DEFAULT_GRID: f64 = 5.0;

// ── Geometry defaults ───────────────────────────────────────────

/// Default rectangle width and height.
pub const DEFAULT_SIZE: f64 = 10.0;

/// Default minimum width and height while resizing.
pub const DEFAULT_MIN_SIZE: f64 = 5.0;

// ── Pointer ─────────────────────────────────────────────────────

/// Maximum pointer travel, in pixels, for a body press-release to count as a click.
pub const CLICK_SLOP_PX: f64 = 3.0;
