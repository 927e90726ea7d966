#![allow(clippy::float_cmp)]

use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

fn placed(name: Option<&str>, x: f64, y: f64, z: f64, size: f64) -> PlacedBox {
    PlacedBox {
        name: name.map(str::to_owned),
        x,
        y,
        z,
        width: size,
        length: size,
        height: size,
        weight: 2.0,
        fragile: false,
        color: None,
    }
}

fn params() -> RulerParams {
    RulerParams { divisions: 5, tick_length: 1.0, label_offset: 2.0 }
}

fn cube() -> Container {
    Container::new(30.0, 30.0, 30.0)
}

fn rng() -> SmallRng {
    SmallRng::seed_from_u64(7)
}

fn delivery(generation: Generation, slot: usize) -> LabelDelivery {
    LabelDelivery { generation, slot, geometry: TextGeometry::default() }
}

// =============================================================
// Rebuild
// =============================================================

#[test]
fn rebuild_registers_one_box_per_placement() {
    let mut scene = SceneContext::new();
    let boxes: Vec<_> = (0..4).map(|i| placed(Some("b"), f64::from(i) * 5.0, 0.0, 0.0, 5.0)).collect();
    scene.rebuild(cube(), &boxes, params(), &mut rng());
    assert_eq!(scene.boxes.len(), 4);
}

#[test]
fn rebuild_replaces_instead_of_accumulating() {
    let mut scene = SceneContext::new();
    let mut r = rng();
    let many: Vec<_> = (0..6).map(|_| placed(None, 0.0, 0.0, 0.0, 1.0)).collect();
    scene.rebuild(cube(), &many, params(), &mut r);
    scene.rebuild(cube(), &many[..2], params(), &mut r);
    assert_eq!(scene.boxes.len(), 2);
    scene.rebuild(cube(), &[], params(), &mut r);
    assert!(scene.boxes.is_empty());
    assert_eq!(scene.ruler.ticks.len(), 18);
}

#[test]
fn rebuild_places_corner_box_in_render_space() {
    let mut scene = SceneContext::new();
    scene.rebuild(cube(), &[placed(Some("a"), 0.0, 0.0, 0.0, 10.0)], params(), &mut rng());
    assert_eq!(scene.boxes[0].center(), Vec3::new(-10.0, -10.0, -10.0));
}

#[test]
fn rebuild_starts_boxes_opaque() {
    let mut scene = SceneContext::new();
    scene.rebuild(cube(), &[placed(None, 0.0, 0.0, 0.0, 1.0)], params(), &mut rng());
    let m = scene.boxes[0].material;
    assert_eq!(m.opacity, 1.0);
    assert!(!m.transparent);
}

#[test]
fn rebuild_uses_service_color_when_valid() {
    let mut scene = SceneContext::new();
    let mut colored = placed(None, 0.0, 0.0, 0.0, 1.0);
    colored.color = Some("#00ff00".into());
    let mut garbage = placed(None, 1.0, 0.0, 0.0, 1.0);
    garbage.color = Some("green".into());
    scene.rebuild(cube(), &[colored, garbage], params(), &mut rng());
    assert_eq!(scene.boxes[0].material.color, Rgb::new(0, 255, 0));
    assert!(scene.boxes[1].material.color.r < 0xff);
}

#[test]
fn rebuild_keeps_display_attributes() {
    let mut scene = SceneContext::new();
    scene.rebuild(cube(), &[placed(Some("crate"), 0.0, 0.0, 0.0, 3.0)], params(), &mut rng());
    let info = &scene.boxes[0].info;
    assert_eq!(info.display_name(), "crate");
    assert_eq!(info.size_text(), "3 x 3 x 3");
    assert_eq!(info.weight, 2.0);
    assert_eq!(info.fragile_text(), "No");
}

#[test]
fn rebuild_requests_one_label_per_tick() {
    let mut scene = SceneContext::new();
    let requests = scene.rebuild(cube(), &[], params(), &mut rng());
    assert_eq!(requests.len(), 18);
    assert!(requests.iter().all(|r| r.generation == scene.generation()));
    assert_eq!(requests[0].text, "0");
    assert_eq!(requests[5].text, "30");
}

#[test]
fn rebuild_bumps_generation_and_resets_hover() {
    let mut scene = SceneContext::new();
    let g0 = scene.generation();
    scene.rebuild(cube(), &[placed(None, 0.0, 0.0, 0.0, 1.0)], params(), &mut rng());
    scene.hover.highlighted = Some(0);
    let g1 = scene.generation();
    scene.rebuild(cube(), &[], params(), &mut rng());
    assert!(g1 > g0);
    assert!(scene.generation() > g1);
    assert_eq!(scene.hover, HoverState::default());
}

// =============================================================
// Clear
// =============================================================

#[test]
fn clear_reports_released_renderables() {
    let mut scene = SceneContext::new();
    scene.rebuild(cube(), &[placed(None, 0.0, 0.0, 0.0, 1.0)], params(), &mut rng());
    // 12 outline edges + 18 ticks + 18 labels + 1 box.
    assert_eq!(scene.clear(), 49);
    assert_eq!(scene.clear(), 0);
}

#[test]
fn missing_name_shows_placeholder() {
    let info = BoxInfo::from_placed(&placed(None, 0.0, 0.0, 0.0, 1.0));
    assert_eq!(info.display_name(), "N/A");
    let blank = BoxInfo::from_placed(&placed(Some("  "), 0.0, 0.0, 0.0, 1.0));
    assert_eq!(blank.display_name(), "N/A");
}

// =============================================================
// Label attachment
// =============================================================

#[test]
fn label_for_current_generation_attaches() {
    let mut scene = SceneContext::new();
    let requests = scene.rebuild(cube(), &[], params(), &mut rng());
    let outcome = scene.attach_label(delivery(requests[3].generation, requests[3].slot));
    assert_eq!(outcome, AttachOutcome::Attached);
    assert!(scene.ruler.labels[3].geometry.is_some());
    assert_eq!(scene.ruler.attached_labels(), 1);
}

#[test]
fn label_from_cleared_generation_is_discarded() {
    let mut scene = SceneContext::new();
    let mut r = rng();
    let old = scene.rebuild(cube(), &[], params(), &mut r);
    scene.rebuild(cube(), &[], params(), &mut r);
    let outcome = scene.attach_label(delivery(old[0].generation, old[0].slot));
    assert_eq!(outcome, AttachOutcome::Stale);
    assert_eq!(scene.ruler.attached_labels(), 0);
}

#[test]
fn label_for_unknown_slot_is_discarded() {
    let mut scene = SceneContext::new();
    scene.rebuild(cube(), &[], params(), &mut rng());
    let outcome = scene.attach_label(delivery(scene.generation(), 999));
    assert_eq!(outcome, AttachOutcome::Stale);
}

#[test]
fn rapid_rebuilds_three_then_one_leave_one_box() {
    let mut scene = SceneContext::new();
    let mut r = rng();
    let three: Vec<_> = (0..3).map(|i| placed(None, f64::from(i), 0.0, 0.0, 1.0)).collect();
    let first = scene.rebuild(cube(), &three, params(), &mut r);
    let second = scene.rebuild(cube(), &[placed(None, 0.0, 0.0, 0.0, 1.0)], params(), &mut r);

    // Labels from both passes resolve in arbitrary order after the second rebuild.
    let mut attached = 0;
    for req in first.iter().chain(second.iter()).rev() {
        if scene.attach_label(delivery(req.generation, req.slot)) == AttachOutcome::Attached {
            attached += 1;
        }
    }
    assert_eq!(scene.boxes.len(), 1);
    assert_eq!(attached, second.len());
    assert_eq!(scene.ruler.labels.len(), second.len());
}

// =============================================================
// Material
// =============================================================

#[test]
fn set_opacity_tracks_transparency() {
    let mut m = Material::opaque(Rgb::new(1, 2, 3));
    m.set_opacity(0.5);
    assert!(m.transparent);
    m.set_opacity(1.0);
    assert!(!m.transparent);
    m.set_opacity(3.0);
    assert_eq!(m.opacity, 1.0);
}
