use rand::Rng;

use crate::consts::{ADD_JITTER, ADD_PALETTE, RECOLOR_PALETTE};
use crate::doc::{Color, Item, ItemId, ItemKind, ItemPatch, ItemStore, NewItem};
use crate::hit;
use crate::input::{Button, InputState, UiState};
use crate::render::{self, Shape};
use crate::stage::{Point, Stage};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned to the host after each call, describing what changed.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    None,
    ItemCreated(ItemId),
    ItemUpdated { id: ItemId, patch: ItemPatch },
    ItemRemoved(ItemId),
    Cleared,
    SelectionChanged(Option<ItemId>),
    RenderNeeded,
}

/// Stage session: the item store plus the transient UI state around it.
///
/// Every change to the collection goes through the store's four mutators;
/// the engine only decides which mutation a gesture or button maps to.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub store: ItemStore,
    pub ui: UiState,
    pub input: InputState,
    pub stage: Stage,
}

impl EngineCore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_stage(stage: Stage) -> Self {
        Self { stage, ..Self::default() }
    }

    // --- Stage ---

    /// Update the stage size reported by the host. Ignores non-positive or
    /// non-finite sizes and returns whether the size was accepted.
    pub fn set_stage_size(&mut self, width: f64, height: f64) -> bool {
        let stage = Stage::new(width, height);
        if !stage.is_valid() {
            tracing::debug!(width, height, "ignoring invalid stage size");
            return false;
        }
        self.stage = stage;
        true
    }

    // --- Palette / properties panel ---

    /// Add a shape of `kind` the way the palette does: a random soft fill,
    /// jittered around the stage center, labelled with the kind's default.
    pub fn add_shape<R: Rng>(&mut self, kind: ItemKind, rng: &mut R) -> ItemId {
        let center = self.stage.center();
        let position = center.offset(
            rng.random_range(-ADD_JITTER..=ADD_JITTER),
            rng.random_range(-ADD_JITTER..=ADD_JITTER),
        );
        let fill = ADD_PALETTE[rng.random_range(0..ADD_PALETTE.len())];
        self.place(NewItem::new(kind, position, fill).with_label(kind.default_label()))
    }

    /// Add an item with explicit fields.
    pub fn place(&mut self, new: NewItem) -> ItemId {
        self.store.add(new)
    }

    /// Apply a partial update to any item.
    pub fn update(&mut self, id: ItemId, patch: ItemPatch) -> Action {
        if self.store.update(id, &patch) {
            Action::ItemUpdated { id, patch }
        } else {
            Action::None
        }
    }

    /// Remove any item, dropping a selection or gesture that pointed at it.
    pub fn remove(&mut self, id: ItemId) -> Action {
        if !self.store.remove(id) {
            return Action::None;
        }
        self.forget_missing();
        Action::ItemRemoved(id)
    }

    /// Select an item. Selecting an id that is not on the stage deselects.
    pub fn select(&mut self, id: ItemId) -> Action {
        let next = self.store.contains(id).then_some(id);
        self.set_selection(next)
    }

    pub fn deselect(&mut self) -> Action {
        self.set_selection(None)
    }

    /// Recolor the selected item. No-op without a selection.
    pub fn recolor_selected(&mut self, color: Color) -> Action {
        match self.ui.selected_id {
            Some(id) => self.update(id, ItemPatch::new().color(color)),
            None => Action::None,
        }
    }

    /// Recolor the selected item with swatch `index` of the recolor palette.
    pub fn recolor_selected_from_palette(&mut self, index: usize) -> Action {
        match RECOLOR_PALETTE.get(index) {
            Some(swatch) => self.recolor_selected(Color::from(*swatch)),
            None => Action::None,
        }
    }

    /// Remove the selected item. No-op without a selection.
    pub fn remove_selected(&mut self) -> Action {
        match self.ui.selected_id {
            Some(id) => self.remove(id),
            None => Action::None,
        }
    }

    /// Remove everything from the stage.
    pub fn clear_stage(&mut self) -> Action {
        self.store.clear();
        self.forget_missing();
        Action::Cleared
    }

    // --- Pointer input ---

    /// Pointer pressed at `pt`. Pressing an item selects it and arms a drag;
    /// pressing empty stage deselects.
    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let Some(id) = hit::hit_test(pt, self.store.items()) else {
            self.input = InputState::Idle;
            return self.selection_actions(None);
        };
        let origin = self.store.get(id).map_or(pt, |item| item.position);
        self.input = InputState::Pressing { id, start: pt, origin };
        self.selection_actions(Some(id))
    }

    /// Pointer moved to `pt`.
    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        let next = self.input.moved_to(pt);
        let dragging = matches!(next, InputState::Dragging { .. });
        self.input = next;
        if dragging { vec![Action::RenderNeeded] } else { Vec::new() }
    }

    /// Pointer released at `pt`. Ending a drag writes the final position.
    pub fn on_pointer_up(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }
        let finished = std::mem::take(&mut self.input).moved_to(pt);
        let Some(preview) = finished.drag_preview() else {
            return Vec::new();
        };
        tracing::debug!(id = %preview.id, x = preview.position.x, y = preview.position.y, "drag ended");
        match self.update(preview.id, ItemPatch::new().position(preview.position)) {
            Action::None => vec![Action::RenderNeeded],
            updated => vec![updated, Action::RenderNeeded],
        }
    }

    // --- Queries ---

    /// The currently selected item, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ItemId> {
        self.ui.selected_id
    }

    /// Look up an item by id.
    #[must_use]
    pub fn item(&self, id: ItemId) -> Option<&Item> {
        self.store.get(id)
    }

    /// Number of items on the stage.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.store.len()
    }

    /// Draw primitives for the current state, including any drag in flight.
    #[must_use]
    pub fn scene(&self) -> Vec<Shape> {
        render::build_scene(self.store.items(), &self.ui, self.input.drag_preview())
    }

    // --- Internals ---

    fn set_selection(&mut self, next: Option<ItemId>) -> Action {
        if self.ui.selected_id == next {
            return Action::None;
        }
        self.ui.selected_id = next;
        Action::SelectionChanged(next)
    }

    fn selection_actions(&mut self, next: Option<ItemId>) -> Vec<Action> {
        match self.set_selection(next) {
            Action::None => Vec::new(),
            changed => vec![changed, Action::RenderNeeded],
        }
    }

    /// Drop selection and gesture state that refer to items no longer present.
    fn forget_missing(&mut self) {
        if let Some(id) = self.ui.selected_id {
            if !self.store.contains(id) {
                self.ui.selected_id = None;
            }
        }
        if let Some(id) = self.input.target() {
            if !self.store.contains(id) {
                self.input = InputState::Idle;
            }
        }
    }
}
