//! Pointer hover inspection and tooltip state.
//!
//! Every pointer move dims every box first, then highlights the nearest hit,
//! so a box never stays highlighted after the pointer leaves it.

#[cfg(test)]
#[path = "hover_test.rs"]
mod hover_test;

use crate::config::ViewerConfig;
use crate::geom::{Point, Ray};
use crate::hit::{Hit, nearest_hit};
use crate::scene::{BoxInfo, SceneContext};

/// Opacities and tooltip placement used by [`inspect`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverStyle {
    pub dimmed_opacity: f64,
    pub highlight_opacity: f64,
    /// CSS pixels from the pointer to the tooltip corner.
    pub tooltip_offset: f64,
}

impl HoverStyle {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            dimmed_opacity: config.dimmed_opacity,
            highlight_opacity: config.highlight_opacity,
            tooltip_offset: config.tooltip_offset,
        }
    }
}

/// Text shown for the hovered box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TooltipContent {
    pub name: String,
    pub size: String,
    pub weight: String,
    pub fragile: String,
}

impl TooltipContent {
    #[must_use]
    pub fn from_info(info: &BoxInfo) -> Self {
        Self {
            name: info.display_name().to_owned(),
            size: info.size_text(),
            weight: format!("{} Kg", info.weight),
            fragile: info.fragile_text().to_owned(),
        }
    }

    /// `(label, value)` rows in display order.
    #[must_use]
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Name", self.name.as_str()),
            ("Size", self.size.as_str()),
            ("Weight", self.weight.as_str()),
            ("Fragile", self.fragile.as_str()),
        ]
    }

    /// Plain-text rendering, one row per line.
    #[must_use]
    pub fn text(&self) -> String {
        self.rows()
            .iter()
            .map(|(label, value)| format!("{label}: {value}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Tooltip visibility and position in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum Tooltip {
    Hidden,
    Shown { left: f64, top: f64, content: TooltipContent },
}

/// Dim every box, then highlight the nearest one `ray` hits.
///
/// A `None` ray (empty viewport, pointer gone) counts as no intersection.
pub fn inspect(scene: &mut SceneContext, ray: Option<&Ray>, pointer: Point, style: HoverStyle) -> Tooltip {
    for b in &mut scene.boxes {
        b.material.set_opacity(style.dimmed_opacity);
    }

    let hit: Option<Hit> = ray.and_then(|r| nearest_hit(r, &scene.boxes));
    scene.hover.highlighted = hit.map(|h| h.index);

    let Some(target) = hit.and_then(|h| scene.boxes.get_mut(h.index)) else {
        return Tooltip::Hidden;
    };
    target.material.set_opacity(style.highlight_opacity);

    Tooltip::Shown {
        left: pointer.x + style.tooltip_offset,
        top: pointer.y + style.tooltip_offset,
        content: TooltipContent::from_info(&target.info),
    }
}
