//! Replay scripts: one host command per JSON line, applied to a `RectEngine`.

#[cfg(test)]
#[path = "script_test.rs"]
mod script_test;

use drag_resize::input::Button;
use drag_resize::{Event, Point, PropsUpdate, RectEngine};
use serde::Deserialize;

/// One host-side input, as it would arrive from DOM listeners.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum HostCommand {
    /// Press on the rectangle body.
    BodyDown {
        x: f64,
        y: f64,
        #[serde(default)]
        button: Button,
    },
    /// Press on a resize handle.
    StickDown { handle: String, x: f64, y: f64 },
    /// Pointer sample.
    Move { x: f64, y: f64 },
    /// Pointer release at a position.
    Up { x: f64, y: f64 },
    /// Pointer left the tracked surface.
    End,
    /// Press outside the rectangle.
    Deselect,
    /// Host prop change.
    Reconcile(PropsUpdate),
}

/// Parse one script line. Blank lines and `#` comments yield `None`.
///
/// # Errors
///
/// Returns the JSON error for a malformed command.
pub fn parse_line(line: &str) -> Result<Option<HostCommand>, serde_json::Error> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }
    serde_json::from_str(trimmed).map(Some)
}

/// Drives one engine from a command stream.
///
/// Owns the interaction lifetime the way a host owns its pointer listeners:
/// whatever happens to the stream, [`Replay::finish`] releases a pending press.
pub struct Replay {
    engine: RectEngine,
}

impl Replay {
    #[must_use]
    pub fn new(engine: RectEngine) -> Self {
        Self { engine }
    }

    #[must_use]
    pub fn engine(&self) -> &RectEngine {
        &self.engine
    }

    /// Apply one command, returning the events it produced.
    pub fn apply(&mut self, command: &HostCommand) -> Vec<Event> {
        match command {
            HostCommand::BodyDown { x, y, button } => self.engine.begin_body_drag(Point::new(*x, *y), *button),
            HostCommand::StickDown { handle, x, y } => self.engine.begin_edge_resize(handle, Point::new(*x, *y)),
            HostCommand::Move { x, y } => self.engine.on_pointer_move(Point::new(*x, *y)),
            HostCommand::Up { x, y } => self.engine.on_pointer_up(Point::new(*x, *y)),
            HostCommand::End => self.engine.end_interaction(),
            HostCommand::Deselect => self.engine.deselect(),
            HostCommand::Reconcile(update) => self.engine.reconcile(update),
        }
    }

    /// End any interaction the script left open.
    pub fn finish(&mut self) -> Vec<Event> {
        if !self.engine.state().is_idle() {
            tracing::info!(state = ?self.engine.state(), "script ended mid-interaction; releasing");
        }
        self.engine.end_interaction()
    }
}
