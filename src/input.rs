//! Input model: mouse buttons and the interaction state machine.
//!
//! `InteractionState` is the gesture being tracked between pointer-down and
//! pointer-up. `Anchor` is the snapshot taken when that gesture began; every
//! pointer sample is measured against it rather than against the previous
//! sample.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use serde::Deserialize;

use crate::geom::{Edges, Point};
use crate::handle::ActiveEdges;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// The gesture currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// No gesture in progress; waiting for the next press.
    #[default]
    Idle,
    /// The whole rectangle is being moved.
    BodyDragging,
    /// One or two edges are being moved by a resize handle.
    EdgeResizing(ActiveEdges),
}

impl InteractionState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// Pointer position and rectangle captured when an interaction begins.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Anchor {
    /// Pointer position at the press.
    pub pointer: Point,
    /// Rectangle edges at the press.
    pub rect: Edges,
}
