#![allow(clippy::float_cmp)]

use std::cell::RefCell;
use std::rc::Rc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::consts::{ADD_PALETTE, RECOLOR_PALETTE};

// =============================================================
// Helpers
// =============================================================

fn rng() -> StdRng {
    StdRng::seed_from_u64(7)
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn engine_with_stone(x: f64, y: f64) -> (EngineCore, ItemId) {
    let mut engine = EngineCore::new();
    let id = engine.place(NewItem::new(ItemKind::Stone, pt(x, y), "#fff"));
    (engine, id)
}

fn drag(engine: &mut EngineCore, from: Point, to: Point) -> Vec<Action> {
    let mut actions = engine.on_pointer_down(from, Button::Primary);
    actions.extend(engine.on_pointer_move(to));
    actions.extend(engine.on_pointer_up(to, Button::Primary));
    actions
}

// =============================================================
// Stage
// =============================================================

#[test]
fn set_stage_size_accepts_positive() {
    let mut engine = EngineCore::new();
    assert!(engine.set_stage_size(1200.0, 900.0));
    assert_eq!(engine.stage.center(), pt(600.0, 450.0));
}

#[test]
fn set_stage_size_rejects_degenerate() {
    let mut engine = EngineCore::with_stage(Stage::new(400.0, 300.0));
    assert!(!engine.set_stage_size(0.0, 900.0));
    assert!(!engine.set_stage_size(100.0, f64::NAN));
    assert_eq!(engine.stage, Stage::new(400.0, 300.0));
}

// =============================================================
// Palette adds
// =============================================================

#[test]
fn add_shape_uses_palette_jitter_and_default_label() {
    let mut engine = EngineCore::with_stage(Stage::new(800.0, 600.0));
    let mut rng = rng();
    for kind in ItemKind::ALL {
        let id = engine.add_shape(kind, &mut rng);
        let item = engine.item(id).unwrap();
        assert_eq!(item.kind, kind);
        assert_eq!(item.label.as_deref(), Some(kind.default_label()));
        assert!(ADD_PALETTE.contains(&item.color.as_str()));
        assert!((350.0..=450.0).contains(&item.position.x));
        assert!((250.0..=350.0).contains(&item.position.y));
    }
    assert_eq!(engine.item_count(), 3);
}

#[test]
fn add_shape_is_deterministic_for_a_seed() {
    let mut a = EngineCore::new();
    let mut b = EngineCore::new();
    let id_a = a.add_shape(ItemKind::Emotion, &mut rng());
    let id_b = b.add_shape(ItemKind::Emotion, &mut rng());
    assert_eq!(a.item(id_a), b.item(id_b));
}

#[test]
fn add_shape_does_not_select() {
    let mut engine = EngineCore::new();
    engine.add_shape(ItemKind::Stone, &mut rng());
    assert_eq!(engine.selection(), None);
}

// =============================================================
// Selection
// =============================================================

#[test]
fn select_existing_item() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    assert_eq!(engine.select(id), Action::SelectionChanged(Some(id)));
    assert_eq!(engine.selection(), Some(id));
    assert_eq!(engine.select(id), Action::None);
}

#[test]
fn select_unknown_item_deselects() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    engine.remove(id);
    assert_eq!(engine.select(id), Action::None);
    assert_eq!(engine.selection(), None);
}

#[test]
fn deselect_clears_selection() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    assert_eq!(engine.deselect(), Action::SelectionChanged(None));
    assert_eq!(engine.deselect(), Action::None);
}

// =============================================================
// Properties panel
// =============================================================

#[test]
fn recolor_selected_changes_only_color() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    let action = engine.recolor_selected_from_palette(1);
    assert_eq!(action, Action::ItemUpdated { id, patch: ItemPatch::new().color(RECOLOR_PALETTE[1]) });
    let item = engine.item(id).unwrap();
    assert_eq!(item.color.as_str(), "#3b82f6");
    assert_eq!(item.position, pt(10.0, 10.0));
}

#[test]
fn recolor_without_selection_is_noop() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    assert_eq!(engine.recolor_selected(Color::from("#000")), Action::None);
    assert_eq!(engine.item(id).unwrap().color.as_str(), "#fff");
}

#[test]
fn recolor_palette_index_out_of_range_is_noop() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    assert_eq!(engine.recolor_selected_from_palette(RECOLOR_PALETTE.len()), Action::None);
}

#[test]
fn remove_selected_drops_item_and_selection() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    assert_eq!(engine.remove_selected(), Action::ItemRemoved(id));
    assert_eq!(engine.item_count(), 0);
    assert_eq!(engine.selection(), None);
    assert_eq!(engine.remove_selected(), Action::None);
}

#[test]
fn remove_other_item_keeps_selection() {
    let (mut engine, a) = engine_with_stone(10.0, 10.0);
    let b = engine.place(NewItem::new(ItemKind::Abstract, pt(100.0, 100.0), "#000"));
    engine.select(a);
    engine.remove(b);
    assert_eq!(engine.selection(), Some(a));
}

#[test]
fn clear_stage_drops_selection() {
    let (mut engine, id) = engine_with_stone(10.0, 10.0);
    engine.select(id);
    assert_eq!(engine.clear_stage(), Action::Cleared);
    assert_eq!(engine.item_count(), 0);
    assert_eq!(engine.selection(), None);
}

#[test]
fn update_unknown_id_reports_none() {
    let mut engine = EngineCore::new();
    let ghost: ItemId = "i3".parse().unwrap();
    assert_eq!(engine.update(ghost, ItemPatch::new().label("x")), Action::None);
    assert_eq!(engine.remove(ghost), Action::None);
}

// =============================================================
// Pointer: click
// =============================================================

#[test]
fn click_on_item_selects() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    let actions = engine.on_pointer_down(pt(105.0, 100.0), Button::Primary);
    assert_eq!(actions, vec![Action::SelectionChanged(Some(id)), Action::RenderNeeded]);
    assert!(engine.on_pointer_up(pt(105.0, 100.0), Button::Primary).is_empty());
    assert_eq!(engine.item(id).unwrap().position, pt(100.0, 100.0));
}

#[test]
fn click_on_empty_stage_deselects() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    engine.select(id);
    let actions = engine.on_pointer_down(pt(500.0, 500.0), Button::Primary);
    assert_eq!(actions, vec![Action::SelectionChanged(None), Action::RenderNeeded]);
    assert_eq!(engine.input, InputState::Idle);
}

#[test]
fn secondary_button_is_ignored() {
    let (mut engine, _) = engine_with_stone(100.0, 100.0);
    assert!(engine.on_pointer_down(pt(100.0, 100.0), Button::Secondary).is_empty());
    assert_eq!(engine.selection(), None);
}

// =============================================================
// Pointer: drag
// =============================================================

#[test]
fn drag_end_updates_position_once() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    let writes = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&writes);
    engine.store.subscribe(move |_| *sink.borrow_mut() += 1);

    engine.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    engine.on_pointer_move(pt(120.0, 110.0));
    engine.on_pointer_move(pt(140.0, 130.0));
    assert_eq!(*writes.borrow(), 0, "moves must not write to the store");

    let actions = engine.on_pointer_up(pt(150.0, 140.0), Button::Primary);
    let expected = ItemPatch::new().position(pt(150.0, 140.0));
    assert_eq!(actions, vec![Action::ItemUpdated { id, patch: expected }, Action::RenderNeeded]);
    assert_eq!(engine.item(id).unwrap().position, pt(150.0, 140.0));
    assert_eq!(*writes.borrow(), 1);
    assert_eq!(engine.input, InputState::Idle);
}

#[test]
fn drag_keeps_grab_offset() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    drag(&mut engine, pt(110.0, 90.0), pt(210.0, 190.0));
    assert_eq!(engine.item(id).unwrap().position, pt(200.0, 200.0));
}

#[test]
fn drag_preview_visible_in_scene_before_release() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    engine.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    assert_eq!(engine.on_pointer_move(pt(160.0, 100.0)), vec![Action::RenderNeeded]);
    let scene = engine.scene();
    assert_eq!(scene[0].id, id);
    assert_eq!(scene[0].geometry, render::Geometry::Circle { center: pt(160.0, 100.0), radius: 30.0 });
    assert_eq!(engine.item(id).unwrap().position, pt(100.0, 100.0));
}

#[test]
fn jitter_below_threshold_is_not_a_drag() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    let actions = drag(&mut engine, pt(100.0, 100.0), pt(101.0, 101.0));
    assert!(!actions.iter().any(|a| matches!(a, Action::ItemUpdated { .. })));
    assert_eq!(engine.item(id).unwrap().position, pt(100.0, 100.0));
}

#[test]
fn drag_topmost_of_overlapping_items() {
    let (mut engine, below) = engine_with_stone(100.0, 100.0);
    let above = engine.place(NewItem::new(ItemKind::Stone, pt(110.0, 100.0), "#000"));
    drag(&mut engine, pt(105.0, 100.0), pt(305.0, 100.0));
    assert_eq!(engine.item(above).unwrap().position, pt(310.0, 100.0));
    assert_eq!(engine.item(below).unwrap().position, pt(100.0, 100.0));
}

#[test]
fn removing_dragged_item_cancels_gesture() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    engine.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    engine.on_pointer_move(pt(150.0, 100.0));
    engine.remove(id);
    assert_eq!(engine.input, InputState::Idle);
    assert!(engine.on_pointer_up(pt(160.0, 100.0), Button::Primary).is_empty());
    assert_eq!(engine.item_count(), 0);
}

#[test]
fn drag_ending_on_vanished_item_is_noop() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    engine.on_pointer_down(pt(100.0, 100.0), Button::Primary);
    engine.on_pointer_move(pt(150.0, 100.0));
    // Bypass the engine so the gesture is left dangling.
    engine.store.remove(id);
    assert_eq!(engine.on_pointer_up(pt(160.0, 100.0), Button::Primary), vec![Action::RenderNeeded]);
    assert!(engine.store.is_empty());
}

// =============================================================
// Scene
// =============================================================

#[test]
fn scene_marks_selection() {
    let (mut engine, id) = engine_with_stone(100.0, 100.0);
    engine.select(id);
    let scene = engine.scene();
    assert!(scene[0].selected);
    assert_eq!(scene[0].style.shadow_blur, 15.0);
}
