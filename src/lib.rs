//! Constraint engine for a draggable, resizable rectangle inside a parent container.
//!
//! The host UI layer resolves which part of the rectangle was pressed, feeds
//! pointer samples and container sizes in, and relays the returned
//! [`engine::Event`]s to the application. This crate owns everything in
//! between: anchoring each gesture, clamping edges against per-gesture
//! limits, snapping to a grid, and keeping the rectangle consistent when the
//! host changes its props.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | [`engine::RectEngine`], its events, and host prop reconciliation |
//! | [`config`] | Host props, units, and validation |
//! | [`geom`] | Points, edges, limits, and event snapshots |
//! | [`handle`] | Resize handles and the edges they move |
//! | [`input`] | Mouse buttons and the interaction state machine |
//! | [`snap`] | Grid snapping |
//! | [`consts`] | Shared numeric constants (snap distance, defaults, etc.) |

pub mod config;
pub mod consts;
pub mod engine;
pub mod geom;
pub mod handle;
pub mod input;
pub mod snap;

pub use config::{ConfigError, EngineConfig};
pub use engine::{Event, PropsUpdate, RectEngine};
pub use geom::{Edges, Point, RectSnapshot};
