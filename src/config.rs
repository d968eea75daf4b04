//! Engine configuration supplied by the host.
//!
//! Field names follow the host's camelCase prop names so a config can be
//! deserialized straight from the host's JSON. Every field has the same
//! default the component used when the prop was omitted.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_GRID, DEFAULT_MIN_SIZE, DEFAULT_SIZE, MIN_SNAP_DISTANCE, PERCENT_EXTENT};
use crate::handle::Handle;

/// Error returned when a host config fails validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A size-like field is zero, negative, or not a number.
    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    /// A percent-unit field exceeds the full parent extent.
    #[error("{field} must be at most 100 in percent units, got {value}")]
    AbovePercentExtent { field: &'static str, value: f64 },
    /// A pixel-unit size exceeds the known parent size.
    #[error("{field} must fit the parent in pixel units, got {value} for a parent of {parent}")]
    LargerThanParent { field: &'static str, value: f64, parent: f64 },
    /// A parent dimension is negative or not a number.
    #[error("{field} must be a finite non-negative number, got {value}")]
    InvalidParentDimension { field: &'static str, value: f64 },
    /// A position is not a finite number.
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    /// The snap distance is negative or not a number.
    #[error("snapDistance must be a finite non-negative number, got {0}")]
    InvalidSnapDistance(f64),
    /// The config JSON could not be parsed.
    #[error("invalid config JSON: {0}")]
    Json(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Which axes a body drag may move along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// Horizontal movement only.
    X,
    /// Vertical movement only.
    Y,
    /// Free movement.
    #[default]
    Both,
}

/// The unit edges are stored and reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    /// Percent of the parent container; both axes span `[0, 100]`.
    #[default]
    Percent,
    /// Absolute pixels; each axis spans the parent's pixel size.
    Pixel,
}

/// How `right` and `bottom` are expressed in event snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RectConvention {
    /// Distance from the parent's far edge (`extent - right`).
    #[default]
    FarEdgeDistance,
    /// Raw edge coordinate measured from the parent's origin.
    Coordinate,
}

/// Stacking order passthrough: `"auto"` or a non-negative integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawZIndex", into = "RawZIndex")]
pub enum ZIndex {
    #[default]
    Auto,
    Level(u32),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum RawZIndex {
    Level(u32),
    Word(String),
}

impl TryFrom<RawZIndex> for ZIndex {
    type Error = String;

    fn try_from(raw: RawZIndex) -> Result<Self, Self::Error> {
        match raw {
            RawZIndex::Level(n) => Ok(Self::Level(n)),
            RawZIndex::Word(w) if w == "auto" => Ok(Self::Auto),
            RawZIndex::Word(w) => Err(format!("z must be \"auto\" or a non-negative integer, got {w:?}")),
        }
    }
}

impl From<ZIndex> for RawZIndex {
    fn from(z: ZIndex) -> Self {
        match z {
            ZIndex::Auto => Self::Word("auto".into()),
            ZIndex::Level(n) => Self::Level(n),
        }
    }
}

/// Host-supplied props for one rectangle.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Initial left edge.
    pub x: f64,
    /// Initial top edge.
    pub y: f64,
    /// Initial width.
    pub w: f64,
    /// Initial height.
    pub h: f64,
    /// Minimum width while resizing.
    pub min_w: f64,
    /// Minimum height while resizing.
    pub min_h: f64,
    /// Parent container width in pixels.
    pub parent_pixel_w: f64,
    /// Parent container height in pixels.
    pub parent_pixel_h: f64,
    /// Stacking order, passed through untouched.
    pub z: ZIndex,
    /// Whether the rectangle starts selected.
    pub is_active: bool,
    /// Suppress automatic select on press and deselect on outside press.
    pub prevent_active_behavior: bool,
    pub is_draggable: bool,
    pub is_resizable: bool,
    /// Axis lock for body drags.
    pub axis: Axis,
    pub snap_to_grid: bool,
    pub grid_x: f64,
    pub grid_y: f64,
    /// Maximum distance to a grid line for a coordinate to snap.
    pub snap_distance: f64,
    /// Handles the host renders; presses on any other handle are ignored.
    pub sticks: Vec<Handle>,
    pub unit: Unit,
    pub rect_convention: RectConvention,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: DEFAULT_SIZE,
            h: DEFAULT_SIZE,
            min_w: DEFAULT_MIN_SIZE,
            min_h: DEFAULT_MIN_SIZE,
            parent_pixel_w: 0.0,
            parent_pixel_h: 0.0,
            z: ZIndex::Auto,
            is_active: false,
            prevent_active_behavior: false,
            is_draggable: true,
            is_resizable: true,
            axis: Axis::Both,
            snap_to_grid: false,
            grid_x: DEFAULT_GRID,
            grid_y: DEFAULT_GRID,
            snap_distance: MIN_SNAP_DISTANCE,
            sticks: Handle::ALL.to_vec(),
            unit: Unit::Percent,
            rect_convention: RectConvention::FarEdgeDistance,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a config from the host's JSON props.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] for malformed JSON or unknown enum values,
    /// and any error from [`EngineConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the ranges the host is expected to respect.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [("parentPixelW", self.parent_pixel_w), ("parentPixelH", self.parent_pixel_h)] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ConfigError::InvalidParentDimension { field, value });
            }
        }
        for (field, value) in [("x", self.x), ("y", self.y)] {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { field, value });
            }
        }
        if !(self.snap_distance.is_finite() && self.snap_distance >= 0.0) {
            return Err(ConfigError::InvalidSnapDistance(self.snap_distance));
        }
        let sized = [
            ("w", self.w),
            ("h", self.h),
            ("minW", self.min_w),
            ("minH", self.min_h),
            ("gridX", self.grid_x),
            ("gridY", self.grid_y),
        ];
        for (field, value) in sized {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NotPositive { field, value });
            }
            if self.unit == Unit::Percent && value > PERCENT_EXTENT {
                return Err(ConfigError::AbovePercentExtent { field, value });
            }
        }
        if self.unit == Unit::Pixel {
            for (field, value, parent) in [("w", self.w, self.parent_pixel_w), ("h", self.h, self.parent_pixel_h)] {
                if parent > 0.0 && value > parent {
                    return Err(ConfigError::LargerThanParent { field, value, parent });
                }
            }
        }
        Ok(())
    }

    /// Far bound of each axis in the configured unit.
    #[must_use]
    pub fn extent(&self) -> (f64, f64) {
        match self.unit {
            Unit::Percent => (PERCENT_EXTENT, PERCENT_EXTENT),
            Unit::Pixel => (self.parent_pixel_w, self.parent_pixel_h),
        }
    }

    /// Factor converting a pointer delta in pixels into the configured unit.
    ///
    /// A zero parent size in percent units yields zero, freezing that axis.
    #[must_use]
    pub fn pointer_scale(&self) -> (f64, f64) {
        match self.unit {
            Unit::Percent => (percent_per_px(self.parent_pixel_w), percent_per_px(self.parent_pixel_h)),
            Unit::Pixel => (1.0, 1.0),
        }
    }

    /// Whether the host renders `handle`.
    #[must_use]
    pub fn has_stick(&self, handle: Handle) -> bool {
        self.sticks.contains(&handle)
    }
}

fn percent_per_px(parent_px: f64) -> f64 {
    if parent_px > 0.0 { PERCENT_EXTENT / parent_px } else { 0.0 }
}
