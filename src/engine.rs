//! The rectangle constraint engine.
//!
//! `RectEngine` owns one rectangle and turns host input (presses, pointer
//! samples, releases, prop changes) into clamped edge updates. Every handler
//! returns the [`Event`]s the host should relay to the application, in order.

use serde::{Deserialize, Serialize};

use crate::config::{Axis, ConfigError, EngineConfig, ZIndex};
use crate::consts::CLICK_SLOP_PX;
use crate::geom::{Edge, Edges, Limits, Point, RectSnapshot};
use crate::handle::{ActiveEdges, Handle};
use crate::input::{Anchor, Button, InteractionState};
use crate::snap::{snap_body, snap_edges};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Events returned from input handlers for the host to relay.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum Event {
    /// The rectangle became active.
    Select,
    /// The rectangle stopped being active.
    Deselect,
    /// The rectangle moved during a body drag.
    Drag(RectSnapshot),
    /// A body drag finished.
    StopDrag(RectSnapshot),
    /// The rectangle changed size during a resize.
    Resize(RectSnapshot),
    /// A resize finished.
    StopResize(RectSnapshot),
    /// A body press was released without moving.
    Click(Point),
}

impl Event {
    /// The rectangle carried by geometry events.
    #[must_use]
    pub fn rect(&self) -> Option<&RectSnapshot> {
        match self {
            Self::Drag(r) | Self::StopDrag(r) | Self::Resize(r) | Self::StopResize(r) => Some(r),
            Self::Select | Self::Deselect | Self::Click(_) => None,
        }
    }
}

/// Sparse prop update pushed by the host between interactions. Only present fields are applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PropsUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_pixel_w: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_pixel_h: Option<f64>,
}

/// Drag/resize state for one rectangle.
#[derive(Debug, Clone)]
pub struct RectEngine {
    config: EngineConfig,
    /// Clamped edges; what the host renders.
    rect: Edges,
    /// Last values written before clamping.
    raw: Edges,
    /// Nominal width and height. Body drags carry it unchanged; resizes and prop updates set it.
    size: (f64, f64),
    limits: Limits,
    state: InteractionState,
    anchor: Anchor,
    active: bool,
}

impl RectEngine {
    /// Build an engine from validated host props.
    ///
    /// The initial rectangle is taken as given; clamping starts with the first write.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the props fail [`EngineConfig::validate`].
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let rect = Edges::from_xywh(config.x, config.y, config.w, config.h);
        let (extent_x, extent_y) = config.extent();
        Ok(Self {
            rect,
            raw: rect,
            size: (config.w, config.h),
            limits: Limits::permissive(extent_x, extent_y),
            state: InteractionState::Idle,
            anchor: Anchor::default(),
            active: config.is_active,
            config,
        })
    }

    // --- Queries ---

    /// The clamped rectangle.
    #[must_use]
    pub fn rect(&self) -> Edges {
        self.rect
    }

    /// The rectangle as last written, before clamping.
    #[must_use]
    pub fn raw_rect(&self) -> Edges {
        self.raw
    }

    /// The rectangle in the host-facing form.
    #[must_use]
    pub fn snapshot(&self) -> RectSnapshot {
        let (extent_x, extent_y) = self.config.extent();
        RectSnapshot::sized(&self.rect, self.size, self.config.unit, self.config.rect_convention, extent_x, extent_y)
    }

    /// The snapshot divided by the parent extent, every component in `[0, 1]`.
    #[must_use]
    pub fn normalized(&self) -> RectSnapshot {
        let (extent_x, extent_y) = self.config.extent();
        self.snapshot().normalized(extent_x, extent_y)
    }

    #[must_use]
    pub fn limits(&self) -> Limits {
        self.limits
    }

    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn z_index(&self) -> ZIndex {
        self.config.z
    }

    // --- Interaction ---

    /// Press on the rectangle body.
    ///
    /// Activates the rectangle (unless active behavior is prevented) before
    /// checking whether a drag may start, so a press on a non-draggable
    /// rectangle still selects it.
    pub fn begin_body_drag(&mut self, pointer: Point, button: Button) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.state.is_idle() {
            tracing::debug!(state = ?self.state, "body press ignored: interaction already in progress");
            return events;
        }

        if !self.config.prevent_active_behavior {
            self.set_active(true, &mut events);
        }

        if button != Button::Primary || !self.config.is_draggable || !self.active {
            return events;
        }

        let (extent_x, extent_y) = self.config.extent();
        self.anchor = Anchor { pointer, rect: self.rect };
        self.limits = Limits::for_drag(&self.rect, extent_x, extent_y);
        self.state = InteractionState::BodyDragging;
        self.warn_if_frozen();
        tracing::debug!(x = pointer.x, y = pointer.y, "body drag started");
        events
    }

    /// Press on the resize handle `handle_id`.
    ///
    /// Ids that name no edge, and handles the host does not render, are ignored.
    pub fn begin_edge_resize(&mut self, handle_id: &str, pointer: Point) -> Vec<Event> {
        if !self.state.is_idle() {
            tracing::debug!(state = ?self.state, handle_id, "handle press ignored: interaction already in progress");
            return Vec::new();
        }
        if !self.config.is_resizable || !self.active {
            return Vec::new();
        }
        if let Ok(handle) = handle_id.parse::<Handle>() {
            if !self.config.has_stick(handle) {
                tracing::debug!(%handle, "handle press ignored: handle disabled");
                return Vec::new();
            }
        }

        let edges = ActiveEdges::from_handle_id(handle_id);
        if edges.is_empty() {
            tracing::debug!(handle_id, "handle press ignored: no edges");
            return Vec::new();
        }

        let (extent_x, extent_y) = self.config.extent();
        self.anchor = Anchor { pointer, rect: self.rect };
        self.limits = Limits::for_resize(&self.rect, self.config.min_w, self.config.min_h, extent_x, extent_y);
        self.state = InteractionState::EdgeResizing(edges);
        self.warn_if_frozen();
        tracing::debug!(handle_id, ?edges, "resize started");
        Vec::new()
    }

    /// Pointer sample while a press is held.
    pub fn on_pointer_move(&mut self, pointer: Point) -> Vec<Event> {
        let (scale_x, scale_y) = self.config.pointer_scale();
        let mut dx = (self.anchor.pointer.x - pointer.x) * scale_x;
        let mut dy = (self.anchor.pointer.y - pointer.y) * scale_y;
        let start = self.anchor.rect;

        match self.state {
            InteractionState::Idle => Vec::new(),
            InteractionState::BodyDragging => {
                match self.config.axis {
                    Axis::X => dy = 0.0,
                    Axis::Y => dx = 0.0,
                    Axis::Both => {}
                }
                let (width, height) = self.size;
                let mut candidate = offset(start, dx, dy);
                if self.config.snap_to_grid {
                    candidate = snap_body(
                        candidate,
                        width,
                        height,
                        self.config.grid_x,
                        self.config.grid_y,
                        self.config.snap_distance,
                    );
                }
                self.place_body(candidate.left, candidate.top);
                tracing::trace!(dx, dy, "drag");
                vec![Event::Drag(self.snapshot())]
            }
            InteractionState::EdgeResizing(edges) => {
                let mut candidate = offset(start, dx, dy);
                if self.config.snap_to_grid {
                    candidate =
                        snap_edges(candidate, self.config.grid_x, self.config.grid_y, self.config.snap_distance);
                }
                for edge in edges.iter() {
                    self.set_raw(edge, candidate.get(edge));
                }
                if edges.left || edges.right {
                    self.size.0 = self.rect.width();
                }
                if edges.top || edges.bottom {
                    self.size.1 = self.rect.height();
                }
                tracing::trace!(dx, dy, "resize");
                vec![Event::Resize(self.snapshot())]
            }
        }
    }

    /// Finish the current interaction and reset the limits to the full parent extent.
    pub fn end_interaction(&mut self) -> Vec<Event> {
        let snap = self.snapshot();
        let events = match self.state {
            InteractionState::Idle => return Vec::new(),
            InteractionState::BodyDragging => vec![Event::Drag(snap), Event::StopDrag(snap)],
            InteractionState::EdgeResizing(_) => vec![Event::Resize(snap), Event::StopResize(snap)],
        };

        let (extent_x, extent_y) = self.config.extent();
        tracing::debug!(state = ?self.state, "interaction ended");
        self.state = InteractionState::Idle;
        self.anchor = Anchor::default();
        self.limits = Limits::permissive(extent_x, extent_y);
        events
    }

    /// Pointer release. A body press released within the click slop also emits [`Event::Click`].
    pub fn on_pointer_up(&mut self, pointer: Point) -> Vec<Event> {
        let mut events = Vec::new();
        if self.state == InteractionState::BodyDragging && self.anchor.pointer.distance(pointer) <= CLICK_SLOP_PX {
            events.push(Event::Click(pointer));
        }
        events.extend(self.end_interaction());
        events
    }

    /// Press outside the rectangle.
    pub fn deselect(&mut self) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.config.prevent_active_behavior {
            self.set_active(false, &mut events);
        }
        events
    }

    // --- Host prop changes ---

    /// Apply host prop changes made outside an interaction.
    ///
    /// Ignored entirely while a drag or resize is in progress.
    pub fn reconcile(&mut self, update: &PropsUpdate) -> Vec<Event> {
        let mut events = Vec::new();
        if !self.state.is_idle() {
            tracing::debug!(state = ?self.state, "prop update ignored: interaction in progress");
            return events;
        }

        if let Some(pw) = update.parent_pixel_w.filter(|v| v.is_finite() && *v >= 0.0) {
            self.config.parent_pixel_w = pw;
        }
        if let Some(ph) = update.parent_pixel_h.filter(|v| v.is_finite() && *v >= 0.0) {
            self.config.parent_pixel_h = ph;
        }
        let (extent_x, extent_y) = self.config.extent();
        self.limits = Limits::permissive(extent_x, extent_y);

        if let Some(active) = update.is_active {
            self.config.is_active = active;
            self.set_active(active, &mut events);
        }
        if let Some(w) = update.w {
            if self.resize_axis(w, Edge::Left, Edge::Right, extent_x) {
                self.size.0 = w;
            }
        }
        if let Some(h) = update.h {
            if self.resize_axis(h, Edge::Top, Edge::Bottom, extent_y) {
                self.size.1 = h;
            }
        }
        if let Some(x) = update.x.filter(|v| v.is_finite()) {
            self.move_axis(x, self.size.0, Edge::Left, Edge::Right, extent_x);
        }
        if let Some(y) = update.y.filter(|v| v.is_finite()) {
            self.move_axis(y, self.size.1, Edge::Top, Edge::Bottom, extent_y);
        }

        tracing::debug!(?update, rect = ?self.rect, "props reconciled");
        events
    }

    // --- Internals ---

    /// Write one raw edge and store its clamped value.
    fn set_raw(&mut self, edge: Edge, value: f64) {
        self.raw.set(edge, value);
        self.rect.set(edge, self.limits.bound(edge).clamp(value));
    }

    /// Clamp the near edges of a dragged rectangle and hang the far edges off the nominal size.
    fn place_body(&mut self, left: f64, top: f64) {
        let (width, height) = self.size;
        self.set_raw(Edge::Left, left);
        self.set_raw(Edge::Top, top);
        self.raw.right = left + width;
        self.raw.bottom = top + height;
        self.rect.right = self.rect.left + width;
        self.rect.bottom = self.rect.top + height;
    }

    fn set_active(&mut self, active: bool, events: &mut Vec<Event>) {
        if self.active == active {
            return;
        }
        self.active = active;
        events.push(if active { Event::Select } else { Event::Deselect });
    }

    /// Keep the near edge and grow toward the far side, or pin to the far side when out of room.
    /// Returns false when `size` does not fit the parent and nothing changed.
    fn resize_axis(&mut self, size: f64, near: Edge, far: Edge, extent: f64) -> bool {
        if !(size > 0.0 && size <= extent) {
            return false;
        }
        let start = self.rect.get(near);
        if start + size > extent {
            self.set_raw(near, extent - size);
            self.set_raw(far, extent);
        } else {
            self.set_raw(far, start + size);
        }
        true
    }

    /// Move to `pos` keeping the current size, pinning to the far side when out of room.
    fn move_axis(&mut self, pos: f64, size: f64, near: Edge, far: Edge, extent: f64) {
        if extent - pos - size <= 0.0 {
            self.set_raw(near, extent - size);
            self.set_raw(far, extent);
        } else {
            self.set_raw(near, pos);
            self.set_raw(far, pos + size);
        }
    }

    fn warn_if_frozen(&self) {
        let (scale_x, scale_y) = self.config.pointer_scale();
        let (extent_x, extent_y) = self.config.extent();
        if scale_x <= 0.0 || scale_y <= 0.0 || extent_x <= 0.0 || extent_y <= 0.0 {
            tracing::warn!(
                parent_w = self.config.parent_pixel_w,
                parent_h = self.config.parent_pixel_h,
                "parent size unknown: rectangle cannot follow the pointer"
            );
        }
    }
}

/// Shift every edge against the pointer delta.
fn offset(start: Edges, dx: f64, dy: f64) -> Edges {
    Edges {
        top: start.top - dy,
        right: start.right - dx,
        bottom: start.bottom - dy,
        left: start.left - dx,
    }
}
