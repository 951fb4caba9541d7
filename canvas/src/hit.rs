//! Hit-testing against placed items.
//!
//! Each kind is tested against the outline it is drawn with: stones are
//! circles centered on their position; emotion tiles and abstract pills are
//! rectangles anchored at their top-left position, emotion tiles turned 45°
//! clockwise around that anchor. Rounded corners are ignored.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::{ABSTRACT_HEIGHT, ABSTRACT_WIDTH, EMOTION_ROTATION_DEG, EMOTION_SIZE, STONE_RADIUS};
use crate::doc::{Item, ItemId, ItemKind};
use crate::stage::Point;

/// Return the topmost item under `pt`. Later items are drawn above earlier
/// ones, so the collection is scanned back to front.
#[must_use]
pub fn hit_test(pt: Point, items: &[Item]) -> Option<ItemId> {
    items.iter().rev().find(|item| contains(item, pt)).map(|item| item.id)
}

/// Whether `pt` falls inside the drawn outline of `item`.
#[must_use]
pub fn contains(item: &Item, pt: Point) -> bool {
    let anchor = item.position;
    match item.kind {
        ItemKind::Stone => anchor.distance(pt) <= STONE_RADIUS,
        ItemKind::Emotion => {
            let local = to_local(anchor, EMOTION_ROTATION_DEG, pt);
            in_rect(local, EMOTION_SIZE, EMOTION_SIZE)
        }
        ItemKind::Abstract => in_rect(Point::new(pt.x - anchor.x, pt.y - anchor.y), ABSTRACT_WIDTH, ABSTRACT_HEIGHT),
    }
}

/// Map a stage point into the unrotated frame of a shape anchored at
/// `anchor` and turned clockwise by `rotation_deg`.
fn to_local(anchor: Point, rotation_deg: f64, pt: Point) -> Point {
    let (sin, cos) = rotation_deg.to_radians().sin_cos();
    let dx = pt.x - anchor.x;
    let dy = pt.y - anchor.y;
    Point::new(dx * cos + dy * sin, -dx * sin + dy * cos)
}

fn in_rect(local: Point, width: f64, height: f64) -> bool {
    (0.0..=width).contains(&local.x) && (0.0..=height).contains(&local.y)
}
