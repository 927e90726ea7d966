//! Display records pushed to the legend/status panel.

#[cfg(test)]
#[path = "legend_test.rs"]
mod legend_test;

use crate::color::Rgb;
use crate::consts::MISSING_ATTRIBUTE;
use crate::scene::RenderableBox;
use crate::wire::{PlacementState, PlacementStatus};

/// One rendered box as listed in the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    pub fragile: bool,
    /// The color the box was drawn with.
    pub color: Rgb,
}

impl DisplayRecord {
    #[must_use]
    pub fn from_renderable(b: &RenderableBox) -> Self {
        Self {
            name: b.info.display_name().to_owned(),
            length: b.info.length,
            width: b.info.width,
            height: b.info.height,
            weight: b.info.weight,
            fragile: b.info.fragile,
            color: b.material.color,
        }
    }

    /// `(label, value)` rows in display order.
    #[must_use]
    pub fn summary_lines(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Name", self.name.clone()),
            ("Length", self.length.to_string()),
            ("Width", self.width.to_string()),
            ("Height", self.height.to_string()),
            ("Weight", format!("{} Kg", self.weight)),
            ("Fragile", if self.fragile { "Yes" } else { "No" }.to_owned()),
        ]
    }
}

/// Legend records for every box in the scene, in group order.
#[must_use]
pub fn display_records(boxes: &[RenderableBox]) -> Vec<DisplayRecord> {
    boxes.iter().map(DisplayRecord::from_renderable).collect()
}

/// Placement outcome of one requested box.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementRecord {
    pub name: String,
    pub placed: bool,
    pub color: Option<Rgb>,
}

impl PlacementRecord {
    #[must_use]
    pub fn from_status(status: &PlacementStatus) -> Self {
        let name = if status.box_name.trim().is_empty() {
            MISSING_ATTRIBUTE.to_owned()
        } else {
            status.box_name.clone()
        };
        Self {
            name,
            placed: status.status == PlacementState::Placed,
            color: status.color.as_deref().and_then(Rgb::parse_hex),
        }
    }

    #[must_use]
    pub fn status_text(&self) -> &'static str {
        if self.placed { "Placed" } else { "Not Placed" }
    }
}

/// Placement records in response order.
#[must_use]
pub fn placement_records(statuses: &[PlacementStatus]) -> Vec<PlacementRecord> {
    statuses.iter().map(PlacementRecord::from_status).collect()
}
