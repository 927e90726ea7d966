use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::billboard;
use crate::camera::{PerspectiveCamera, Viewport};
use crate::config::ViewerConfig;
use crate::controls::{Button, OrbitControls, WheelDelta};
use crate::geom::Point;
use crate::glyph::{GlyphError, TextGeometry, Typeface};
use crate::hover::{self, HoverStyle, Tooltip, TooltipContent};
use crate::legend::{DisplayRecord, PlacementRecord, display_records, placement_records};
use crate::render;
use crate::ruler::RulerParams;
use crate::scene::{AttachOutcome, Generation, LabelDelivery, LabelRequest, SceneContext};
use crate::wire::{Container, PackingResponse, ServiceError};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from engine operations for the host to apply to the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Load glyph geometry for these labels and hand it back via
    /// [`EngineCore::attach_label`].
    LoadLabels(Vec<LabelRequest>),
    LegendUpdated(Vec<DisplayRecord>),
    PlacementUpdated(Vec<PlacementRecord>),
    ShowTooltip { left: f64, top: f64, content: TooltipContent },
    HideTooltip,
    /// Tell the user something went wrong; the scene is unchanged.
    ShowError(String),
}

impl From<Tooltip> for Action {
    fn from(tooltip: Tooltip) -> Self {
        match tooltip {
            Tooltip::Hidden => Self::HideTooltip,
            Tooltip::Shown { left, top, content } => Self::ShowTooltip { left, top, content },
        }
    }
}

/// What one render-loop step did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    pub camera_moved: bool,
    pub labels_oriented: usize,
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
/// This is the single context object every per-event and per-frame step
/// receives; nothing in the crate keeps scene state anywhere else.
pub struct EngineCore {
    pub scene: SceneContext,
    pub camera: PerspectiveCamera,
    pub controls: OrbitControls,
    pub viewport: Viewport,
    pub config: ViewerConfig,
    pub tooltip: Tooltip,
    rng: SmallRng,
}

impl Default for EngineCore {
    fn default() -> Self {
        Self::new(ViewerConfig::default(), 0)
    }
}

impl EngineCore {
    /// `seed` drives random box colors.
    #[must_use]
    pub fn new(config: ViewerConfig, seed: u64) -> Self {
        Self {
            scene: SceneContext::new(),
            camera: PerspectiveCamera::new(&config.camera),
            controls: OrbitControls::new(config.orbit),
            viewport: Viewport::default(),
            config,
            tooltip: Tooltip::Hidden,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    // --- Viewport ---

    /// Update viewport dimensions (CSS pixels) and device pixel ratio.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.viewport = Viewport::new(width_css, height_css, dpr);
        self.camera.aspect = self.viewport.aspect();
    }

    // --- Packing results ---

    /// Visualize a service result, or report its failure leaving the scene intact.
    pub fn apply_packing_result(
        &mut self,
        container: Container,
        result: Result<PackingResponse, ServiceError>,
    ) -> Vec<Action> {
        match result {
            Ok(response) => self.visualize(container, &response),
            Err(e) => {
                log::warn!("engine: packing request failed: {e}");
                vec![Action::ShowError(e.user_message())]
            }
        }
    }

    /// Replace the scene with `response` inside `container`.
    pub fn visualize(&mut self, container: Container, response: &PackingResponse) -> Vec<Action> {
        let requests = self.scene.rebuild(
            container,
            &response.packed_boxes,
            RulerParams::from_config(&self.config),
            &mut self.rng,
        );
        self.tooltip = Tooltip::Hidden;

        let mut actions = Vec::with_capacity(4);
        if !requests.is_empty() {
            actions.push(Action::LoadLabels(requests));
        }
        actions.push(Action::LegendUpdated(display_records(&self.scene.boxes)));
        actions.push(Action::PlacementUpdated(placement_records(&response.placement_status)));
        actions.push(Action::HideTooltip);
        actions
    }

    // --- Labels ---

    /// Build glyph geometry for one label request with the configured style.
    ///
    /// # Errors
    ///
    /// Returns the [`GlyphError`] if the typeface outline is malformed.
    pub fn build_label(&self, face: &Typeface, request: &LabelRequest) -> Result<LabelDelivery, GlyphError> {
        let geometry = TextGeometry::build(
            face,
            &request.text,
            self.config.label_size,
            self.config.label_depth,
            self.config.curve_segments,
        )?;
        Ok(LabelDelivery { generation: request.generation, slot: request.slot, geometry })
    }

    /// Attach delivered label geometry; late deliveries for a cleared ruler are dropped.
    pub fn attach_label(&mut self, delivery: LabelDelivery) -> AttachOutcome {
        self.scene.attach_label(delivery)
    }

    /// Record that labels for `generation` could not be loaded. Ticks stay visible.
    pub fn fail_labels(&self, generation: Generation, error: &GlyphError) {
        if generation == self.scene.generation() {
            log::warn!("engine: ruler labels unavailable: {error}");
        } else {
            log::debug!("engine: ignoring label failure for generation {}: {error}", generation.0);
        }
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.controls.pointer_down(screen_pt, button);
        Vec::new()
    }

    /// Feed orbit dragging, then re-run hover inspection at the pointer.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.controls.pointer_move(screen_pt, self.viewport.height);
        let ray = self
            .viewport
            .pointer_to_ndc(screen_pt)
            .and_then(|ndc| self.camera.ray_from_ndc(ndc));
        let tooltip = hover::inspect(&mut self.scene, ray.as_ref(), screen_pt, HoverStyle::from_config(&self.config));
        self.tooltip = tooltip.clone();
        vec![tooltip.into()]
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.controls.pointer_up();
        Vec::new()
    }

    /// The pointer left the canvas: end any drag and clear the highlight.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.controls.pointer_up();
        let tooltip = hover::inspect(&mut self.scene, None, Point::new(0.0, 0.0), HoverStyle::from_config(&self.config));
        self.tooltip = tooltip.clone();
        vec![tooltip.into()]
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.controls.wheel(delta);
        Vec::new()
    }

    // --- Frame ---

    /// One render-loop step minus drawing: apply orbit motion, then billboard labels.
    pub fn tick(&mut self) -> FrameStats {
        let camera_moved = self.controls.update(&mut self.camera);
        let labels_oriented = billboard::update_labels(&mut self.scene.ruler.labels, self.camera.position, self.camera.up);
        FrameStats { camera_moved, labels_oriented }
    }

    // --- Queries ---

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.scene.generation()
    }
}

/// The full engine. Wraps `EngineCore` and owns the browser canvas element.
pub struct Engine {
    canvas: HtmlCanvasElement,
    pub core: EngineCore,
}

impl Engine {
    /// Create a new engine bound to the given canvas element.
    #[must_use]
    pub fn new(canvas: HtmlCanvasElement, config: ViewerConfig, seed: u64) -> Self {
        Self { canvas, core: EngineCore::new(config, seed) }
    }

    // --- Viewport ---

    /// Update viewport dimensions and resize the canvas backing store to match.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64, dpr: f64) {
        self.core.set_viewport(width_css, height_css, dpr);
        self.canvas.set_width((width_css * dpr).round().max(1.0) as u32);
        self.canvas.set_height((height_css * dpr).round().max(1.0) as u32);
    }

    // --- Delegated operations ---

    pub fn apply_packing_result(
        &mut self,
        container: Container,
        result: Result<PackingResponse, ServiceError>,
    ) -> Vec<Action> {
        self.core.apply_packing_result(container, result)
    }

    /// Build and attach one label in a single step.
    ///
    /// # Errors
    ///
    /// Returns the [`GlyphError`] if the label geometry cannot be built.
    pub fn deliver_label(&mut self, face: &Typeface, request: &LabelRequest) -> Result<AttachOutcome, GlyphError> {
        let delivery = self.core.build_label(face, request)?;
        Ok(self.core.attach_label(delivery))
    }

    pub fn fail_labels(&self, generation: Generation, error: &GlyphError) {
        self.core.fail_labels(generation, error);
    }

    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(screen_pt, button)
    }

    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(screen_pt)
    }

    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.core.on_pointer_up()
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    pub fn on_wheel(&mut self, delta: WheelDelta) -> Vec<Action> {
        self.core.on_wheel(delta)
    }

    // --- Render ---

    /// One full render-loop step: update controls and labels, then draw.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a canvas call fails.
    pub fn frame(&mut self) -> Result<FrameStats, JsValue> {
        let stats = self.core.tick();
        self.render()?;
        Ok(stats)
    }

    /// Draw the current state to the canvas.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the 2D context is unavailable or a canvas call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        let ctx = self
            .canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        render::draw(&ctx, &self.core)
    }
}
