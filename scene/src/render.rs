//! Rendering: projects the scene through the camera and draws it to a 2D context.
//!
//! Projection into screen-space polygons is kept separate from the canvas
//! calls so it can be tested without a browser. Boxes are drawn as flat-shaded
//! faces with back faces culled and the rest painted far to near. The ruler
//! outline, ticks, and labels go on top.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::camera::{PerspectiveCamera, Viewport};
use crate::color::Rgb;
use crate::engine::EngineCore;
use crate::geom::{Point, Vec3};
use crate::scene::{LabelSlot, RenderableBox};

/// Corner indices (see [`crate::geom::Aabb::corners`]), outward normal, and
/// shade factor for each box face.
const FACES: [([usize; 4], Vec3, f64); 6] = [
    ([0, 2, 6, 4], Vec3 { x: -1.0, y: 0.0, z: 0.0 }, 0.75),
    ([1, 5, 7, 3], Vec3 { x: 1.0, y: 0.0, z: 0.0 }, 0.75),
    ([0, 4, 5, 1], Vec3 { x: 0.0, y: -1.0, z: 0.0 }, 0.55),
    ([2, 3, 7, 6], Vec3 { x: 0.0, y: 1.0, z: 0.0 }, 1.0),
    ([0, 1, 3, 2], Vec3 { x: 0.0, y: 0.0, z: -1.0 }, 0.85),
    ([4, 6, 7, 5], Vec3 { x: 0.0, y: 0.0, z: 1.0 }, 0.85),
];

/// Shade factor for the back face of an extruded label.
const LABEL_BACK_SHADE: f64 = 0.6;

/// Box edge stroke alpha, scaled by the box opacity.
const EDGE_ALPHA: f64 = 0.35;

/// One visible box face in CSS pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct FacePolygon {
    pub box_index: usize,
    pub points: [Point; 4],
    /// Distance from the eye to the face center.
    pub depth: f64,
    pub color: Rgb,
    pub opacity: f64,
}

/// A projected line segment in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenSegment {
    pub from: Point,
    pub to: Point,
}

/// One projected label contour.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelPolygon {
    pub points: Vec<Point>,
    /// Part of the extruded back face.
    pub back: bool,
}

/// Project a render-space point to CSS pixels with its view depth.
#[must_use]
pub fn project_point(camera: &PerspectiveCamera, viewport: &Viewport, world: Vec3) -> Option<(Point, f64)> {
    let p = camera.project(world)?;
    Some((viewport.ndc_to_screen(p.ndc), p.depth))
}

/// Camera-facing faces of every box, sorted far to near.
///
/// Faces with any corner at or behind the near plane are dropped.
#[must_use]
pub fn box_faces(camera: &PerspectiveCamera, viewport: &Viewport, boxes: &[RenderableBox]) -> Vec<FacePolygon> {
    let mut faces = Vec::with_capacity(boxes.len() * 3);
    for (box_index, b) in boxes.iter().enumerate() {
        let corners = b.bounds.corners();
        for (idx, normal, shade) in FACES {
            let center = idx.iter().fold(Vec3::ZERO, |acc, &i| acc + corners[i]) * 0.25;
            if (camera.position - center).dot(normal) <= 0.0 {
                continue;
            }
            let Some(points) = project_quad(camera, viewport, idx.map(|i| corners[i])) else {
                continue;
            };
            faces.push(FacePolygon {
                box_index,
                points,
                depth: (center - camera.position).length(),
                color: b.material.color.shaded(shade),
                opacity: b.material.opacity,
            });
        }
    }
    faces.sort_by(|a, b| b.depth.total_cmp(&a.depth));
    faces
}

fn project_quad(camera: &PerspectiveCamera, viewport: &Viewport, quad: [Vec3; 4]) -> Option<[Point; 4]> {
    let [a, b, c, d] = quad;
    Some([
        project_point(camera, viewport, a)?.0,
        project_point(camera, viewport, b)?.0,
        project_point(camera, viewport, c)?.0,
        project_point(camera, viewport, d)?.0,
    ])
}

/// Project segments, dropping any with an endpoint behind the near plane.
#[must_use]
pub fn project_segments(
    camera: &PerspectiveCamera,
    viewport: &Viewport,
    segments: impl IntoIterator<Item = (Vec3, Vec3)>,
) -> Vec<ScreenSegment> {
    segments
        .into_iter()
        .filter_map(|(a, b)| {
            Some(ScreenSegment {
                from: project_point(camera, viewport, a)?.0,
                to: project_point(camera, viewport, b)?.0,
            })
        })
        .collect()
}

/// Label contours placed by the label's basis, back face first.
///
/// Labels without geometry produce nothing. Contours that cannot be fully
/// projected are skipped.
#[must_use]
pub fn label_polygons(camera: &PerspectiveCamera, viewport: &Viewport, label: &LabelSlot) -> Vec<LabelPolygon> {
    let Some(geometry) = &label.geometry else {
        return Vec::new();
    };
    let basis = label.basis;
    let front = label.spec.anchor;
    let back = front - basis.normal * geometry.depth;

    let mut out = Vec::with_capacity(geometry.contours.len() * 2);
    for (origin, is_back) in [(back, true), (front, false)] {
        for contour in &geometry.contours {
            let points: Option<Vec<Point>> = contour
                .iter()
                .map(|p| project_point(camera, viewport, basis.place(origin, p.x, p.y)).map(|(s, _)| s))
                .collect();
            if let Some(points) = points {
                out.push(LabelPolygon { points, back: is_back });
            }
        }
    }
    out
}

// =============================================================
// Canvas drawing
// =============================================================

/// Draw the full scene for `core` in CSS pixel units.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore) -> Result<(), JsValue> {
    let vp = core.viewport;
    ctx.set_transform(vp.dpr, 0.0, 0.0, vp.dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, vp.width, vp.height);
    if vp.is_empty() {
        return Ok(());
    }

    // Layer 1: box faces, far to near.
    for face in box_faces(&core.camera, &vp, &core.scene.boxes) {
        fill_polygon(ctx, &face.points, &face.color.to_css_rgba(face.opacity));
        ctx.set_stroke_style_str(&Rgb::new(0, 0, 0).to_css_rgba(EDGE_ALPHA * face.opacity));
        ctx.set_line_width(1.0);
        ctx.stroke();
    }

    // Layer 2: ruler outline and ticks.
    let ruler = &core.scene.ruler;
    let lines = ruler.outline.iter().copied().chain(ruler.ticks.iter().map(|t| (t.start, t.end)));
    ctx.set_stroke_style_str(&core.config.ruler_color);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    for seg in project_segments(&core.camera, &vp, lines) {
        ctx.move_to(seg.from.x, seg.from.y);
        ctx.line_to(seg.to.x, seg.to.y);
    }
    ctx.stroke();

    // Layer 3: labels.
    let back_fill = Rgb::parse_hex(&core.config.ruler_color)
        .map_or_else(|| core.config.ruler_color.clone(), |c| c.shaded(LABEL_BACK_SHADE).to_hex());
    for label in &ruler.labels {
        for poly in label_polygons(&core.camera, &vp, label) {
            let fill = if poly.back { back_fill.as_str() } else { core.config.ruler_color.as_str() };
            fill_polygon(ctx, &poly.points, fill);
        }
    }

    Ok(())
}

/// Fill a closed polygon. Leaves the path open for an optional stroke.
fn fill_polygon(ctx: &CanvasRenderingContext2d, points: &[Point], style: &str) {
    let Some((first, rest)) = points.split_first() else {
        return;
    };
    ctx.begin_path();
    ctx.move_to(first.x, first.y);
    for p in rest {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
    ctx.set_fill_style_str(style);
    ctx.fill();
}
