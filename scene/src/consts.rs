//! Shared numeric constants for the scene crate.

// ── Ruler ───────────────────────────────────────────────────────

/// Number of intervals each container axis is divided into.
pub const DIVISIONS: u32 = 5;

/// Length of a ruler tick, in render units, measured outward from the container edge.
pub const TICK_LENGTH: f64 = 1.0;

/// Distance of a ruler label from the container edge, in render units.
pub const LABEL_OFFSET: f64 = 2.0;

/// Glyph em size for ruler labels, in render units.
pub const LABEL_SIZE: f64 = 0.75;

/// Extrusion depth of ruler label glyphs, in render units.
pub const LABEL_DEPTH: f64 = 0.1;

/// Line segments used to flatten each glyph curve.
pub const CURVE_SEGMENTS: u32 = 6;

// ── Hover ───────────────────────────────────────────────────────

/// Opacity every box falls back to on each pointer move.
pub const DIMMED_OPACITY: f64 = 0.5;

/// Opacity of the box under the pointer.
pub const HIGHLIGHT_OPACITY: f64 = 1.0;

/// Tooltip offset from the pointer, in CSS pixels.
pub const TOOLTIP_OFFSET_PX: f64 = 16.0;

/// Placeholder for absent display attributes.
pub const MISSING_ATTRIBUTE: &str = "N/A";

// ── Camera ──────────────────────────────────────────────────────

/// Vertical field of view in degrees.
pub const CAMERA_FOV_DEG: f64 = 75.0;

/// Near clip distance.
pub const CAMERA_NEAR: f64 = 0.1;

/// Far clip distance.
pub const CAMERA_FAR: f64 = 1000.0;

/// Initial distance of the camera from the container center along +Z.
pub const CAMERA_DISTANCE: f64 = 80.0;

// ── Form ────────────────────────────────────────────────────────

/// Maximum number of box rows accepted from the form editor.
pub const MAX_BOX_ROWS: usize = 100;

/// Colors are drawn uniformly from `0..RANDOM_COLOR_LIMIT`.
pub const RANDOM_COLOR_LIMIT: u32 = 0x00ff_0000;

/// Default ruler and outline color.
pub const RULER_COLOR: &str = "#ff0000";
