use super::*;

// =============================================================
// Handle
// =============================================================

#[test]
fn handle_ids_parse_back() {
    for handle in Handle::ALL {
        assert_eq!(handle.id().parse::<Handle>(), Ok(handle));
    }
}

#[test]
fn handle_unknown_id_is_error() {
    let err = "xx".parse::<Handle>().unwrap_err();
    assert_eq!(err, UnknownHandle("xx".into()));
    assert_eq!(err.to_string(), "unknown resize handle id: \"xx\"");
}

#[test]
fn handle_display_is_id() {
    assert_eq!(Handle::MiddleRight.to_string(), "mr");
}

#[test]
fn handle_deserializes_from_id() {
    let handles: Vec<Handle> = serde_json::from_str(r#"["tl", "bm"]"#).unwrap();
    assert_eq!(handles, vec![Handle::TopLeft, Handle::BottomMiddle]);
}

#[test]
fn handle_deserialize_rejects_unknown_id() {
    assert!(serde_json::from_str::<Handle>(r#""mm""#).is_err());
}

#[test]
fn handle_serializes_to_id() {
    assert_eq!(serde_json::to_string(&Handle::BottomLeft).unwrap(), r#""bl""#);
}

// =============================================================
// ActiveEdges
// =============================================================

#[test]
fn corner_handle_activates_two_edges() {
    let e = ActiveEdges::from_handle_id("tl");
    assert_eq!(e, ActiveEdges { top: true, right: false, bottom: false, left: true });

    let e = Handle::BottomRight.edges();
    assert_eq!(e, ActiveEdges { top: false, right: true, bottom: true, left: false });
}

#[test]
fn midpoint_handle_activates_one_edge() {
    assert_eq!(ActiveEdges::from_handle_id("tm"), ActiveEdges { top: true, ..Default::default() });
    assert_eq!(ActiveEdges::from_handle_id("bm"), ActiveEdges { bottom: true, ..Default::default() });
    assert_eq!(ActiveEdges::from_handle_id("ml"), ActiveEdges { left: true, ..Default::default() });
    assert_eq!(ActiveEdges::from_handle_id("mr"), ActiveEdges { right: true, ..Default::default() });
}

#[test]
fn unrecognized_handle_activates_nothing() {
    assert!(ActiveEdges::from_handle_id("zz").is_empty());
    assert!(ActiveEdges::from_handle_id("").is_empty());
    assert!(ActiveEdges::from_handle_id("mm").is_empty());
}

#[test]
fn every_handle_activates_something() {
    for handle in Handle::ALL {
        assert!(!handle.edges().is_empty(), "{handle} should move at least one edge");
    }
}

#[test]
fn active_edges_iter_yields_only_active() {
    let edges: Vec<Edge> = ActiveEdges::from_handle_id("br").iter().collect();
    assert_eq!(edges, vec![Edge::Bottom, Edge::Right]);
}

#[test]
fn active_edges_contains() {
    let e = ActiveEdges::from_handle_id("tr");
    assert!(e.contains(Edge::Top));
    assert!(e.contains(Edge::Right));
    assert!(!e.contains(Edge::Bottom));
    assert!(!e.contains(Edge::Left));
}
