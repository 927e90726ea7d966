//! Scene context: the ruler and box groups, hover slot, and rebuild generations.
//!
//! Every packing result replaces both groups wholesale. Label glyphs load
//! asynchronously, so each rebuild bumps the [`Generation`] and hands out
//! [`LabelRequest`]s tagged with it. A [`LabelDelivery`] whose generation is no
//! longer current belongs to a ruler that has already been torn down and is
//! dropped instead of attached.

#[cfg(test)]
#[path = "scene_test.rs"]
mod scene_test;

use rand::Rng;

use crate::color::Rgb;
use crate::consts::MISSING_ATTRIBUTE;
use crate::geom::{Aabb, Basis, Vec3};
use crate::glyph::TextGeometry;
use crate::mapper::{render_bounds, render_extents};
use crate::ruler::{LabelSpec, Ruler, RulerParams, TickMark, build_ruler};
use crate::wire::{Container, PlacedBox};

/// Monotonically increasing rebuild counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Surface appearance of one box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Rgb,
    pub opacity: f64,
    pub transparent: bool,
}

impl Material {
    #[must_use]
    pub fn opaque(color: Rgb) -> Self {
        Self { color, opacity: 1.0, transparent: false }
    }

    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
        self.transparent = self.opacity < 1.0;
    }
}

/// Display attributes of the placement a box was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct BoxInfo {
    pub name: Option<String>,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    pub weight: f64,
    pub fragile: bool,
}

impl BoxInfo {
    #[must_use]
    pub fn from_placed(placed: &PlacedBox) -> Self {
        Self {
            name: placed.name.clone(),
            width: placed.width,
            length: placed.length,
            height: placed.height,
            weight: placed.weight,
            fragile: placed.fragile,
        }
    }

    /// The name, or `N/A` when absent or blank.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(n) if !n.trim().is_empty() => n,
            _ => MISSING_ATTRIBUTE,
        }
    }

    /// `"W x L x H"`.
    #[must_use]
    pub fn size_text(&self) -> String {
        format!("{} x {} x {}", self.width, self.length, self.height)
    }

    #[must_use]
    pub fn fragile_text(&self) -> &'static str {
        if self.fragile { "Yes" } else { "No" }
    }
}

/// One packed box in render space.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderableBox {
    pub bounds: Aabb,
    pub material: Material,
    pub info: BoxInfo,
}

impl RenderableBox {
    #[must_use]
    pub fn center(&self) -> Vec3 {
        self.bounds.center()
    }
}

/// A ruler label and, once loaded, its glyph geometry and current orientation.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSlot {
    pub spec: LabelSpec,
    pub geometry: Option<TextGeometry>,
    pub basis: Basis,
}

/// Container outline, ticks, and labels.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RulerGroup {
    pub outline: Vec<(Vec3, Vec3)>,
    pub ticks: Vec<TickMark>,
    pub labels: Vec<LabelSlot>,
}

impl RulerGroup {
    fn from_ruler(ruler: Ruler) -> Self {
        Self {
            outline: ruler.outline,
            ticks: ruler.ticks,
            labels: ruler
                .labels
                .into_iter()
                .map(|spec| LabelSlot { spec, geometry: None, basis: Basis::default() })
                .collect(),
        }
    }

    fn len(&self) -> usize {
        self.outline.len() + self.ticks.len() + self.labels.len()
    }

    /// Number of labels with geometry attached.
    #[must_use]
    pub fn attached_labels(&self) -> usize {
        self.labels.iter().filter(|l| l.geometry.is_some()).count()
    }
}

/// Ask for glyph geometry for one label of one rebuild.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRequest {
    pub generation: Generation,
    pub slot: usize,
    pub text: String,
}

/// Glyph geometry arriving for an earlier [`LabelRequest`].
#[derive(Debug, Clone, PartialEq)]
pub struct LabelDelivery {
    pub generation: Generation,
    pub slot: usize,
    pub geometry: TextGeometry,
}

/// Result of [`SceneContext::attach_label`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachOutcome {
    Attached,
    /// The delivery belongs to a cleared ruler and was dropped.
    Stale,
}

/// The box currently under the pointer, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    pub highlighted: Option<usize>,
}

/// Everything the engine draws apart from the camera.
#[derive(Debug, Clone, Default)]
pub struct SceneContext {
    generation: Generation,
    container: Option<Container>,
    pub ruler: RulerGroup,
    pub boxes: Vec<RenderableBox>,
    pub hover: HoverState,
}

impl SceneContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The container of the current view, if anything has been visualized.
    #[must_use]
    pub fn container(&self) -> Option<Container> {
        self.container
    }

    /// Render-space extents of the current container, or zero before the first rebuild.
    #[must_use]
    pub fn container_extents(&self) -> Vec3 {
        self.container.map_or(Vec3::ZERO, |c| render_extents(c.extents()))
    }

    /// Empty both groups and reset hover. Returns how many renderables were released.
    pub fn clear(&mut self) -> usize {
        let released = self.ruler.len() + self.boxes.len();
        self.ruler = RulerGroup::default();
        self.boxes.clear();
        self.hover = HoverState::default();
        released
    }

    /// Replace the scene with `placed` inside `container`.
    ///
    /// Geometry and materials are built synchronously; the returned requests
    /// describe the label glyphs still to be loaded for this generation.
    pub fn rebuild<R: Rng + ?Sized>(
        &mut self,
        container: Container,
        placed: &[PlacedBox],
        params: RulerParams,
        rng: &mut R,
    ) -> Vec<LabelRequest> {
        let released = self.clear();
        self.generation = self.generation.next();
        self.container = Some(container);

        let extents = container.extents();
        self.ruler = RulerGroup::from_ruler(build_ruler(extents, params));
        self.boxes = placed
            .iter()
            .map(|p| RenderableBox {
                bounds: render_bounds(p.origin(), p.extents(), extents),
                material: Material::opaque(box_color(p, rng)),
                info: BoxInfo::from_placed(p),
            })
            .collect();

        log::debug!(
            "scene: rebuilt generation {} with {} boxes, {} labels ({released} released)",
            self.generation.0,
            self.boxes.len(),
            self.ruler.labels.len()
        );

        self.ruler
            .labels
            .iter()
            .enumerate()
            .map(|(slot, label)| LabelRequest { generation: self.generation, slot, text: label.spec.text.clone() })
            .collect()
    }

    /// Attach delivered glyph geometry if it belongs to the live ruler.
    pub fn attach_label(&mut self, delivery: LabelDelivery) -> AttachOutcome {
        if delivery.generation != self.generation {
            log::debug!(
                "scene: dropping label for generation {} (current {})",
                delivery.generation.0,
                self.generation.0
            );
            return AttachOutcome::Stale;
        }
        let Some(label) = self.ruler.labels.get_mut(delivery.slot) else {
            log::debug!("scene: dropping label for unknown slot {}", delivery.slot);
            return AttachOutcome::Stale;
        };
        label.geometry = Some(delivery.geometry);
        AttachOutcome::Attached
    }
}

/// The service color when it parses, otherwise a random one.
fn box_color<R: Rng + ?Sized>(placed: &PlacedBox, rng: &mut R) -> Rgb {
    placed
        .color
        .as_deref()
        .and_then(Rgb::parse_hex)
        .unwrap_or_else(|| Rgb::random(rng))
}
