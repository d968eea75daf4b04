#![allow(clippy::float_cmp)]

use super::*;

// =============================================================
// Button
// =============================================================

#[test]
fn button_default_is_primary() {
    assert_eq!(Button::default(), Button::Primary);
}

#[test]
fn button_variants_distinct() {
    assert_ne!(Button::Primary, Button::Middle);
    assert_ne!(Button::Primary, Button::Secondary);
    assert_ne!(Button::Middle, Button::Secondary);
}

// =============================================================
// InteractionState
// =============================================================

#[test]
fn interaction_state_default_is_idle() {
    assert!(InteractionState::default().is_idle());
}

#[test]
fn active_states_are_not_idle() {
    assert!(!InteractionState::BodyDragging.is_idle());
    let edges = ActiveEdges::from_handle_id("tl");
    assert!(!InteractionState::EdgeResizing(edges).is_idle());
}

#[test]
fn resizing_states_compare_by_edges() {
    let tl = InteractionState::EdgeResizing(ActiveEdges::from_handle_id("tl"));
    let br = InteractionState::EdgeResizing(ActiveEdges::from_handle_id("br"));
    assert_ne!(tl, br);
    assert_eq!(tl, InteractionState::EdgeResizing(ActiveEdges { top: true, left: true, ..Default::default() }));
}

// =============================================================
// Anchor
// =============================================================

#[test]
fn anchor_default_is_zeroed() {
    let a = Anchor::default();
    assert_eq!(a.pointer, Point::new(0.0, 0.0));
    assert_eq!(a.rect, Edges::default());
    assert_eq!(a.rect.width(), 0.0);
}
