//! Viewer configuration.
//!
//! Every field has a default, so an empty JSON object (or no configuration at
//! all) yields the stock viewer. The host may override individual fields, for
//! example to point the font URL at a self-hosted typeface.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CAMERA_DISTANCE, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CURVE_SEGMENTS, DIMMED_OPACITY, DIVISIONS,
    HIGHLIGHT_OPACITY, LABEL_DEPTH, LABEL_OFFSET, LABEL_SIZE, RULER_COLOR, TICK_LENGTH, TOOLTIP_OFFSET_PX,
};
use crate::wire::CALCULATE_PACKING_PATH;

/// Typeface used for ruler labels when no override is given.
pub const DEFAULT_FONT_URL: &str = "https://threejs.org/examples/fonts/helvetiker_regular.typeface.json";

/// Tunables for the viewer. See the field docs for units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Ruler intervals per container axis.
    pub divisions: u32,
    pub dimmed_opacity: f64,
    pub highlight_opacity: f64,
    /// Render units.
    pub tick_length: f64,
    /// Render units.
    pub label_offset: f64,
    pub label_size: f64,
    pub label_depth: f64,
    pub curve_segments: u32,
    pub ruler_color: String,
    pub font_url: String,
    pub service_url: String,
    /// CSS pixels between the pointer and the tooltip's top-left corner.
    pub tooltip_offset: f64,
    pub camera: CameraConfig,
    pub orbit: OrbitConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            divisions: DIVISIONS,
            dimmed_opacity: DIMMED_OPACITY,
            highlight_opacity: HIGHLIGHT_OPACITY,
            tick_length: TICK_LENGTH,
            label_offset: LABEL_OFFSET,
            label_size: LABEL_SIZE,
            label_depth: LABEL_DEPTH,
            curve_segments: CURVE_SEGMENTS,
            ruler_color: RULER_COLOR.to_owned(),
            font_url: DEFAULT_FONT_URL.to_owned(),
            service_url: CALCULATE_PACKING_PATH.to_owned(),
            tooltip_offset: TOOLTIP_OFFSET_PX,
            camera: CameraConfig::default(),
            orbit: OrbitConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Parse a configuration object; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the JSON error when `raw` is not a valid configuration object.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Division count used for the ruler; zero is treated as one.
    #[must_use]
    pub fn effective_divisions(&self) -> u32 {
        self.divisions.max(1)
    }
}

/// Perspective camera parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub near: f64,
    pub far: f64,
    /// Starting distance from the container center along +Z.
    pub distance: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { fov_deg: CAMERA_FOV_DEG, near: CAMERA_NEAR, far: CAMERA_FAR, distance: CAMERA_DISTANCE }
    }
}

/// Orbit control tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Radians of rotation per CSS pixel of drag, scaled by viewport height.
    pub rotate_speed: f64,
    /// Fraction of the distance changed per 100 px of wheel delta.
    pub zoom_speed: f64,
    /// Fraction of pending motion applied each frame, in `(0, 1]`.
    pub damping: f64,
    pub min_distance: f64,
    pub max_distance: f64,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self { rotate_speed: 1.0, zoom_speed: 0.1, damping: 0.25, min_distance: 5.0, max_distance: 500.0 }
    }
}
