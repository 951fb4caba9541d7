//! Shared constants for the canvas crate.

// ── Stage ───────────────────────────────────────────────────────

/// Stage width used until the host reports its container size.
pub const DEFAULT_STAGE_WIDTH: f64 = 800.0;

/// Stage height used until the host reports its container size.
pub const DEFAULT_STAGE_HEIGHT: f64 = 600.0;

/// Half-width of the uniform jitter applied around the stage center when a
/// shape is added from the palette.
pub const ADD_JITTER: f64 = 50.0;

// ── Palettes ────────────────────────────────────────────────────

/// Soft fills picked at random for newly added shapes.
pub const ADD_PALETTE: [&str; 5] = ["#e4e4e7", "#f1f5f9", "#dcfce7", "#dbeafe", "#fef3c7"];

/// Swatches offered for recoloring the selected item.
pub const RECOLOR_PALETTE: [&str; 5] = ["#f97316", "#3b82f6", "#10b981", "#ef4444", "#f59e0b"];

// ── Shape geometry ──────────────────────────────────────────────

/// Radius of a stone.
pub const STONE_RADIUS: f64 = 30.0;

/// Side length of an emotion tile.
pub const EMOTION_SIZE: f64 = 50.0;

/// Corner radius of an emotion tile.
pub const EMOTION_CORNER_RADIUS: f64 = 12.0;

/// Clockwise rotation of an emotion tile in degrees (drawn as a diamond).
pub const EMOTION_ROTATION_DEG: f64 = 45.0;

/// Width of an abstract pill.
pub const ABSTRACT_WIDTH: f64 = 70.0;

/// Height of an abstract pill.
pub const ABSTRACT_HEIGHT: f64 = 30.0;

/// Corner radius of an abstract pill.
pub const ABSTRACT_CORNER_RADIUS: f64 = 20.0;

// ── Styling ─────────────────────────────────────────────────────

/// Outline color of the selected item.
pub const SELECTION_STROKE: &str = "#000";

/// Outline width in pixels.
pub const STROKE_WIDTH: f64 = 2.0;

/// Shadow blur for the selected item.
pub const SHADOW_BLUR_SELECTED: f64 = 15.0;

/// Shadow blur for unselected items.
pub const SHADOW_BLUR: f64 = 5.0;

/// Shadow opacity for every item.
pub const SHADOW_OPACITY: f64 = 0.1;

/// Shadow offset along both axes.
pub const SHADOW_OFFSET: f64 = 2.0;

// ── Input ───────────────────────────────────────────────────────

/// Pointer travel in pixels before a press on an item becomes a drag.
pub const DRAG_THRESHOLD_PX: f64 = 3.0;
