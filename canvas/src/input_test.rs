#![allow(clippy::float_cmp)]

use super::*;

fn id(raw: &str) -> ItemId {
    raw.parse().unwrap()
}

fn pressing() -> InputState {
    InputState::Pressing { id: id("i1"), start: Point::new(100.0, 100.0), origin: Point::new(90.0, 95.0) }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults() {
    assert_eq!(InputState::default(), InputState::Idle);
    assert_eq!(UiState::default().selected_id, None);
    assert_eq!(Button::default(), Button::Primary);
}

// =============================================================
// Gesture transitions
// =============================================================

#[test]
fn idle_ignores_moves() {
    assert_eq!(InputState::Idle.moved_to(Point::new(5.0, 5.0)), InputState::Idle);
    assert_eq!(InputState::Idle.target(), None);
}

#[test]
fn press_stays_press_within_threshold() {
    let state = pressing().moved_to(Point::new(102.0, 101.0));
    assert_eq!(state, pressing());
    assert!(state.drag_preview().is_none());
}

#[test]
fn press_becomes_drag_past_threshold() {
    let state = pressing().moved_to(Point::new(110.0, 100.0));
    assert!(matches!(state, InputState::Dragging { current, .. } if current == Point::new(110.0, 100.0)));
    assert_eq!(state.target(), Some(id("i1")));
}

#[test]
fn drag_tracks_pointer_and_previews_offset() {
    let state = pressing().moved_to(Point::new(110.0, 100.0)).moved_to(Point::new(130.0, 80.0));
    let preview = state.drag_preview().unwrap();
    assert_eq!(preview.id, id("i1"));
    assert_eq!(preview.position, Point::new(120.0, 75.0));
}

#[test]
fn drag_returning_inside_threshold_stays_drag() {
    let state = pressing().moved_to(Point::new(120.0, 100.0)).moved_to(Point::new(100.0, 100.0));
    assert_eq!(state.drag_preview().unwrap().position, Point::new(90.0, 95.0));
}
