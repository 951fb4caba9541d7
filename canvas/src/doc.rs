//! Document model: placed items, their sparse-update type, and the store.
//!
//! This module defines what sits on the stage (`Item`, `ItemKind`), the
//! request shape for creating one (`NewItem`), a sparse-update type that can
//! only touch mutable fields (`ItemPatch`), and the store that owns the live
//! collection (`ItemStore`).
//!
//! `ItemStore` is the single source of truth. Its four mutators (`add`,
//! `update`, `remove`, `clear`) are the only way the collection changes, and
//! every effective mutation synchronously notifies subscribed listeners
//! before returning. The renderer reads from `list`/`items` in insertion
//! order, which is also draw order.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::notify::{Listener, Listeners, SubscriptionId};
use crate::stage::Point;

// =============================================================================
// ERRORS
// =============================================================================

/// Error returned when parsing an [`ItemKind`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum KindError {
    #[error("unknown item kind: {0:?} (expected stone, emotion or abstract)")]
    Unknown(String),
}

/// Error returned by [`Color::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("color is empty")]
    Empty,
    #[error("invalid color {0:?}: expected #rgb, #rrggbb or #rrggbbaa")]
    Invalid(String),
}

/// Error returned when parsing an [`ItemId`] from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemIdError {
    #[error("invalid item id: {0:?}")]
    Invalid(String),
}

// =============================================================================
// ITEM ID
// =============================================================================

/// Opaque item identifier, minted by [`ItemStore::add`].
///
/// Ids come from a per-store monotonic counter, so they are unique for the
/// lifetime of the store and never handed out twice, including after
/// [`ItemStore::clear`]. The text form is `i<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(u64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "i{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ItemIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s
            .strip_prefix('i')
            .filter(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
            .ok_or_else(|| ItemIdError::Invalid(s.to_string()))?;
        digits.parse::<u64>().map(Self).map_err(|_| ItemIdError::Invalid(s.to_string()))
    }
}

impl TryFrom<String> for ItemId {
    type Error = ItemIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.to_string()
    }
}

// =============================================================================
// ITEM KIND
// =============================================================================

/// The kind of a placed item. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Round stone, drawn as a circle centered on its position.
    Stone,
    /// Emotion tile, drawn as a rounded square turned 45° into a diamond.
    Emotion,
    /// Abstract pill, drawn as a wide rounded rectangle.
    Abstract,
}

impl ItemKind {
    /// Every kind, in palette order.
    pub const ALL: [ItemKind; 3] = [Self::Stone, Self::Emotion, Self::Abstract];

    /// Lowercase name used on the wire and in scripts.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Stone => "stone",
            Self::Emotion => "emotion",
            Self::Abstract => "abstract",
        }
    }

    /// Label given to a shape added from the palette.
    #[must_use]
    pub fn default_label(self) -> &'static str {
        match self {
            Self::Stone => "Calm",
            Self::Emotion => "Joy",
            Self::Abstract => "Idea",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = KindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stone" => Ok(Self::Stone),
            "emotion" => Ok(Self::Emotion),
            "abstract" => Ok(Self::Abstract),
            _ => Err(KindError::Unknown(s.to_string())),
        }
    }
}

// =============================================================================
// COLOR
// =============================================================================

/// A CSS color string.
///
/// Literals convert infallibly; untrusted text goes through [`Color::parse`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    /// Validate a hex color (`#rgb`, `#rrggbb` or `#rrggbbaa`).
    ///
    /// # Errors
    ///
    /// Returns `ColorError::Empty` for blank input and `ColorError::Invalid`
    /// for anything that is not hex notation.
    pub fn parse(raw: &str) -> Result<Self, ColorError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }
        let Some(hex) = trimmed.strip_prefix('#') else {
            return Err(ColorError::Invalid(raw.to_string()));
        };
        if !matches!(hex.len(), 3 | 6 | 8) || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::Invalid(raw.to_string()));
        }
        Ok(Self(trimmed.to_ascii_lowercase()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ITEM
// =============================================================================

/// A placed item as stored in the collection and handed to the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier minted by the store.
    pub id: ItemId,
    /// Shape variant; never changes after creation.
    pub kind: ItemKind,
    /// Anchor position in stage coordinates.
    pub position: Point,
    /// Fill color.
    pub color: Color,
    /// Optional annotation shown with the item.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Everything needed to create an item except its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub kind: ItemKind,
    pub position: Point,
    pub color: Color,
    pub label: Option<String>,
}

impl NewItem {
    #[must_use]
    pub fn new(kind: ItemKind, position: Point, color: impl Into<Color>) -> Self {
        Self { kind, position, color: color.into(), label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// Sparse update for an item. Only present fields are applied.
///
/// There is no `kind` or `id` field: neither can change after creation.
/// `label` is tri-state: `None` leaves it alone, `Some(None)` clears it,
/// `Some(Some(text))` replaces it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub position: Option<Point>,
    pub color: Option<Color>,
    pub label: Option<Option<String>>,
}

impl ItemPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(Some(label.into()));
        self
    }

    #[must_use]
    pub fn clear_label(mut self) -> Self {
        self.label = Some(None);
        self
    }

    /// Returns `true` if no field would be touched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.position.is_none() && self.color.is_none() && self.label.is_none()
    }

    fn apply_to(&self, item: &mut Item) {
        if let Some(position) = self.position {
            item.position = position;
        }
        if let Some(ref color) = self.color {
            item.color = color.clone();
        }
        if let Some(ref label) = self.label {
            item.label.clone_from(label);
        }
    }
}

// =============================================================================
// STORE
// =============================================================================

/// Authoritative in-memory collection of placed items.
#[derive(Debug)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
    listeners: Listeners,
}

impl ItemStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new(), next_id: 1, listeners: Listeners::default() }
    }

    // --- Mutations ---

    /// Append a new item and return its freshly minted id.
    pub fn add(&mut self, new: NewItem) -> ItemId {
        let id = ItemId(self.next_id);
        self.next_id += 1;
        tracing::debug!(%id, kind = %new.kind, x = new.position.x, y = new.position.y, "item added");
        self.items.push(Item { id, kind: new.kind, position: new.position, color: new.color, label: new.label });
        self.notify();
        id
    }

    /// Apply a partial update. Returns `false`, leaving state and listeners
    /// untouched, if no item has this id.
    pub fn update(&mut self, id: ItemId, patch: &ItemPatch) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!(%id, "update ignored: unknown item");
            return false;
        };
        patch.apply_to(item);
        tracing::debug!(%id, "item updated");
        self.notify();
        true
    }

    /// Remove an item, keeping the order of the rest. Returns `false` if no
    /// item has this id.
    pub fn remove(&mut self, id: ItemId) -> bool {
        let Some(index) = self.items.iter().position(|item| item.id == id) else {
            tracing::debug!(%id, "remove ignored: unknown item");
            return false;
        };
        self.items.remove(index);
        tracing::debug!(%id, "item removed");
        self.notify();
        true
    }

    /// Remove every item. Always notifies, even when already empty.
    pub fn clear(&mut self) {
        tracing::debug!(count = self.items.len(), "items cleared");
        self.items.clear();
        self.notify();
    }

    // --- Reads ---

    /// Owned snapshot of the collection in insertion order.
    #[must_use]
    pub fn list(&self) -> Vec<Item> {
        self.items.clone()
    }

    /// Borrowed view of the collection in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Returns `true` if an item with this id is present.
    #[must_use]
    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    /// Number of items currently in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store contains no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // --- Subscriptions ---

    /// Register a listener called with the full collection after every
    /// effective mutation.
    pub fn subscribe(&mut self, listener: impl FnMut(&[Item]) + 'static) -> SubscriptionId {
        let boxed: Listener = Box::new(listener);
        self.listeners.subscribe(boxed)
    }

    /// Remove a listener. Returns `false` if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.listeners.len()
    }

    fn notify(&mut self) {
        self.listeners.emit(&self.items);
    }
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}
