//! Scene building: turns a collection snapshot into draw primitives.
//!
//! This module never touches the store. It receives a read-only slice of
//! items plus the UI state and produces one [`Shape`] per item, in insertion
//! order (bottom first). The host's drawing layer maps each shape onto its
//! own canvas API.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use serde::Serialize;

use crate::consts::{
    ABSTRACT_CORNER_RADIUS, ABSTRACT_HEIGHT, ABSTRACT_WIDTH, EMOTION_CORNER_RADIUS, EMOTION_ROTATION_DEG,
    EMOTION_SIZE, SELECTION_STROKE, SHADOW_BLUR, SHADOW_BLUR_SELECTED, SHADOW_OFFSET, SHADOW_OPACITY, STONE_RADIUS,
    STROKE_WIDTH,
};
use crate::doc::{Color, Item, ItemId, ItemKind};
use crate::input::{DragPreview, UiState};
use crate::stage::Point;

/// Outline of a shape in stage coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Circle centered on `center`.
    Circle { center: Point, radius: f64 },
    /// Rectangle anchored at its top-left `origin`, turned clockwise by
    /// `rotation` degrees around that origin.
    RoundedRect { origin: Point, width: f64, height: f64, corner_radius: f64, rotation: f64 },
}

/// Paint parameters for a shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub fill: Color,
    /// Outline color; `None` draws no outline.
    pub stroke: Option<Color>,
    pub stroke_width: f64,
    pub shadow_blur: f64,
    pub shadow_opacity: f64,
    pub shadow_offset: Point,
}

/// One drawable primitive, tied back to the item it represents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub id: ItemId,
    pub selected: bool,
    pub geometry: Geometry,
    pub style: Style,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Build the scene for `items`. An in-flight drag draws its item at the
/// preview position instead of the stored one.
#[must_use]
pub fn build_scene(items: &[Item], ui: &UiState, drag: Option<DragPreview>) -> Vec<Shape> {
    items
        .iter()
        .map(|item| {
            let position = drag.filter(|d| d.id == item.id).map_or(item.position, |d| d.position);
            shape_for(item, ui.selected_id == Some(item.id), position)
        })
        .collect()
}

/// Build the primitive for a single item drawn at `position`.
#[must_use]
pub fn shape_for(item: &Item, selected: bool, position: Point) -> Shape {
    let geometry = match item.kind {
        ItemKind::Stone => Geometry::Circle { center: position, radius: STONE_RADIUS },
        ItemKind::Emotion => Geometry::RoundedRect {
            origin: position,
            width: EMOTION_SIZE,
            height: EMOTION_SIZE,
            corner_radius: EMOTION_CORNER_RADIUS,
            rotation: EMOTION_ROTATION_DEG,
        },
        ItemKind::Abstract => Geometry::RoundedRect {
            origin: position,
            width: ABSTRACT_WIDTH,
            height: ABSTRACT_HEIGHT,
            corner_radius: ABSTRACT_CORNER_RADIUS,
            rotation: 0.0,
        },
    };
    let style = Style {
        fill: item.color.clone(),
        stroke: selected.then(|| Color::from(SELECTION_STROKE)),
        stroke_width: STROKE_WIDTH,
        shadow_blur: if selected { SHADOW_BLUR_SELECTED } else { SHADOW_BLUR },
        shadow_opacity: SHADOW_OPACITY,
        shadow_offset: Point::new(SHADOW_OFFSET, SHADOW_OFFSET),
    };
    Shape { id: item.id, selected, geometry, style, label: item.label.clone() }
}
