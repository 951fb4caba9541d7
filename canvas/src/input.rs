//! Input model: pointer buttons, persistent UI state, and the drag gesture.
//!
//! `UiState` is what the renderer needs to know about the user's focus.
//! `InputState` tracks a press on an item between pointer-down and
//! pointer-up. A press only turns into a drag after the pointer travels past
//! [`crate::consts::DRAG_THRESHOLD_PX`]; the store is written once, when the
//! drag ends.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::consts::DRAG_THRESHOLD_PX;
use crate::doc::ItemId;
use crate::stage::Point;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    #[default]
    Primary,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Secondary,
}

/// Persistent UI state visible to the renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UiState {
    /// The id of the currently selected item, if any.
    pub selected_id: Option<ItemId>,
}

/// Gesture state between pointer-down and pointer-up.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// Pointer is down on an item but has not moved far enough to drag.
    Pressing {
        /// Item under the pointer at press time.
        id: ItemId,
        /// Pointer position at press time.
        start: Point,
        /// Item position at press time.
        origin: Point,
    },
    /// The user is moving an item across the stage.
    Dragging {
        /// Item being dragged.
        id: ItemId,
        /// Pointer position at press time.
        start: Point,
        /// Item position at press time.
        origin: Point,
        /// Latest pointer position.
        current: Point,
    },
}

impl InputState {
    /// Id of the item the active gesture refers to.
    #[must_use]
    pub fn target(&self) -> Option<ItemId> {
        match *self {
            Self::Idle => None,
            Self::Pressing { id, .. } | Self::Dragging { id, .. } => Some(id),
        }
    }

    /// Advance the gesture for a pointer move to `pt`.
    ///
    /// A press becomes a drag once the pointer leaves the threshold circle;
    /// a drag just tracks the pointer.
    #[must_use]
    pub fn moved_to(self, pt: Point) -> Self {
        match self {
            Self::Idle => Self::Idle,
            Self::Pressing { id, start, origin } => {
                if start.distance(pt) > DRAG_THRESHOLD_PX {
                    Self::Dragging { id, start, origin, current: pt }
                } else {
                    self
                }
            }
            Self::Dragging { id, start, origin, .. } => Self::Dragging { id, start, origin, current: pt },
        }
    }

    /// Where the dragged item should be drawn, if a drag is in flight.
    #[must_use]
    pub fn drag_preview(&self) -> Option<DragPreview> {
        match *self {
            Self::Dragging { id, start, origin, current } => {
                Some(DragPreview { id, position: origin.offset(current.x - start.x, current.y - start.y) })
            }
            Self::Idle | Self::Pressing { .. } => None,
        }
    }
}

/// Provisional position of an item mid-drag. Never written to the store.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragPreview {
    pub id: ItemId,
    pub position: Point,
}
