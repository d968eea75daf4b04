#![allow(clippy::float_cmp)]

use drag_resize::EngineConfig;

use super::*;

fn replay() -> Replay {
    let config = EngineConfig {
        x: 10.0,
        y: 10.0,
        w: 30.0,
        h: 20.0,
        parent_pixel_w: 100.0,
        parent_pixel_h: 100.0,
        ..Default::default()
    };
    Replay::new(RectEngine::new(config).unwrap())
}

fn run(replay: &mut Replay, lines: &[&str]) -> Vec<Event> {
    lines
        .iter()
        .filter_map(|line| parse_line(line).unwrap())
        .flat_map(|command| replay.apply(&command))
        .collect()
}

// =============================================================
// parse_line
// =============================================================

#[test]
fn parses_body_down_with_default_button() {
    let cmd = parse_line(r#"{"op": "bodyDown", "x": 1, "y": 2}"#).unwrap();
    assert_eq!(cmd, Some(HostCommand::BodyDown { x: 1.0, y: 2.0, button: Button::Primary }));
}

#[test]
fn parses_explicit_button() {
    let cmd = parse_line(r#"{"op": "bodyDown", "x": 1, "y": 2, "button": "secondary"}"#).unwrap();
    assert_eq!(cmd, Some(HostCommand::BodyDown { x: 1.0, y: 2.0, button: Button::Secondary }));
}

#[test]
fn parses_stick_down() {
    let cmd = parse_line(r#"{"op": "stickDown", "handle": "br", "x": 40, "y": 30}"#).unwrap();
    assert_eq!(cmd, Some(HostCommand::StickDown { handle: "br".into(), x: 40.0, y: 30.0 }));
}

#[test]
fn parses_unit_commands() {
    assert_eq!(parse_line(r#"{"op": "end"}"#).unwrap(), Some(HostCommand::End));
    assert_eq!(parse_line(r#"{"op": "deselect"}"#).unwrap(), Some(HostCommand::Deselect));
}

#[test]
fn parses_reconcile_fields_inline() {
    let cmd = parse_line(r#"{"op": "reconcile", "w": 25, "isActive": true}"#).unwrap();
    let Some(HostCommand::Reconcile(update)) = cmd else {
        panic!("expected reconcile, got {cmd:?}");
    };
    assert_eq!(update.w, Some(25.0));
    assert_eq!(update.is_active, Some(true));
}

#[test]
fn skips_blank_and_comment_lines() {
    assert_eq!(parse_line("   ").unwrap(), None);
    assert_eq!(parse_line("# drag to the right").unwrap(), None);
}

#[test]
fn rejects_unknown_op() {
    assert!(parse_line(r#"{"op": "teleport"}"#).is_err());
}

// =============================================================
// Replay
// =============================================================

#[test]
fn replays_a_drag() {
    let mut r = replay();
    let events = run(
        &mut r,
        &[
            r#"{"op": "bodyDown", "x": 0, "y": 0}"#,
            r#"{"op": "move", "x": 5, "y": 0}"#,
            r#"{"op": "move", "x": 20, "y": 0}"#,
            r#"{"op": "up", "x": 20, "y": 0}"#,
        ],
    );
    assert!(matches!(events[0], Event::Select));
    assert!(matches!(events.last(), Some(Event::StopDrag(_))));
    assert_eq!(r.engine().rect().left, 30.0);
}

#[test]
fn replays_a_resize() {
    let mut r = replay();
    let events = run(
        &mut r,
        &[
            r#"{"op": "reconcile", "isActive": true}"#,
            r#"{"op": "stickDown", "handle": "mr", "x": 40, "y": 20}"#,
            r#"{"op": "move", "x": 50, "y": 90}"#,
            r#"{"op": "end"}"#,
        ],
    );
    assert!(matches!(events.last(), Some(Event::StopResize(_))));
    assert_eq!(r.engine().rect().right, 50.0);
    assert_eq!(r.engine().rect().bottom, 30.0);
}

#[test]
fn finish_releases_open_interaction() {
    let mut r = replay();
    run(&mut r, &[r#"{"op": "bodyDown", "x": 0, "y": 0}"#, r#"{"op": "move", "x": 5, "y": 5}"#]);
    let events = r.finish();
    assert!(matches!(events.last(), Some(Event::StopDrag(_))));
    assert!(r.engine().state().is_idle());
}

#[test]
fn finish_when_idle_emits_nothing() {
    let mut r = replay();
    assert!(r.finish().is_empty());
}
