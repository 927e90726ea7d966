#![allow(clippy::float_cmp)]

use super::*;
use crate::wire::{PlacedBox, PlacementState, PlacementStatus};

// =============================================================
// Helpers
// =============================================================

const FACE: &str = r#"{
    "familyName": "Test Sans",
    "resolution": 100,
    "glyphs": {
        "0": { "ha": 50, "o": "m 0 0 l 40 0 l 40 100 l 0 100" },
        "?": { "ha": 40, "o": "m 0 0 l 20 0 l 20 20" }
    }
}"#;

fn cube() -> Container {
    Container::new(30.0, 30.0, 30.0)
}

fn placed(name: &str, x: f64, y: f64, z: f64, size: f64) -> PlacedBox {
    PlacedBox {
        name: Some(name.to_owned()),
        x,
        y,
        z,
        width: size,
        length: size,
        height: size,
        weight: 3.5,
        fragile: true,
        color: Some("#00ff00".into()),
    }
}

/// One 10-unit box dead center in a 30-unit cube.
fn centered_response() -> PackingResponse {
    PackingResponse {
        packed_boxes: vec![placed("center", 10.0, 10.0, 10.0, 10.0)],
        placement_status: vec![PlacementStatus {
            box_name: "center".into(),
            status: PlacementState::Placed,
            color: Some("#00ff00".into()),
        }],
    }
}

fn core_with_view() -> EngineCore {
    let mut core = EngineCore::new(ViewerConfig::default(), 1);
    core.set_viewport(800.0, 600.0, 2.0);
    core
}

fn pt(x: f64, y: f64) -> Point {
    Point::new(x, y)
}

fn label_requests(actions: &[Action]) -> Vec<LabelRequest> {
    actions
        .iter()
        .find_map(|a| match a {
            Action::LoadLabels(reqs) => Some(reqs.clone()),
            _ => None,
        })
        .unwrap_or_default()
}

// =============================================================
// Viewport
// =============================================================

#[test]
fn set_viewport_updates_camera_aspect() {
    let core = core_with_view();
    assert_eq!(core.viewport.dpr, 2.0);
    assert!((core.camera.aspect - 800.0 / 600.0).abs() < 1e-12);
}

// =============================================================
// Visualize
// =============================================================

#[test]
fn visualize_emits_labels_legend_and_status() {
    let mut core = core_with_view();
    let actions = core.visualize(cube(), &centered_response());
    assert_eq!(label_requests(&actions).len(), 18);
    assert!(actions.iter().any(|a| matches!(a, Action::LegendUpdated(r) if r.len() == 1 && r[0].name == "center")));
    assert!(actions.iter().any(|a| matches!(a, Action::PlacementUpdated(r) if r.len() == 1 && r[0].placed)));
    assert_eq!(actions.last(), Some(&Action::HideTooltip));
}

#[test]
fn visualize_uses_service_color() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());
    assert_eq!(core.scene.boxes[0].material.color.to_hex(), "#00ff00");
}

#[test]
fn repeated_visualize_replaces_scene() {
    let mut core = core_with_view();
    let many = PackingResponse {
        packed_boxes: (0..3).map(|i| placed("b", f64::from(i) * 10.0, 0.0, 0.0, 10.0)).collect(),
        placement_status: Vec::new(),
    };
    core.visualize(cube(), &many);
    assert_eq!(core.scene.boxes.len(), 3);
    core.visualize(cube(), &centered_response());
    assert_eq!(core.scene.boxes.len(), 1);
    assert_eq!(core.scene.ruler.ticks.len(), 18);
}

#[test]
fn failed_request_reports_error_and_keeps_scene() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());
    let generation = core.generation();

    let err = ServiceError::Rejected { status: 400, message: "Base dimensions are required".into() };
    let actions = core.apply_packing_result(Container::new(1.0, 1.0, 1.0), Err(err));

    assert_eq!(actions, vec![Action::ShowError("Base dimensions are required".into())]);
    assert_eq!(core.generation(), generation);
    assert_eq!(core.scene.boxes.len(), 1);
    assert_eq!(core.scene.container(), Some(cube()));
}

#[test]
fn transport_failure_shows_generic_message() {
    let mut core = core_with_view();
    let actions = core.apply_packing_result(cube(), Err(ServiceError::Transport("offline".into())));
    assert_eq!(actions, vec![Action::ShowError(crate::wire::GENERIC_SERVICE_FAILURE.into())]);
    assert!(core.scene.boxes.is_empty());
}

#[test]
fn successful_result_visualizes() {
    let mut core = core_with_view();
    let actions = core.apply_packing_result(cube(), Ok(centered_response()));
    assert!(!label_requests(&actions).is_empty());
    assert_eq!(core.scene.boxes.len(), 1);
}

// =============================================================
// Labels
// =============================================================

#[test]
fn labels_attach_for_current_generation() {
    let mut core = core_with_view();
    let requests = label_requests(&core.visualize(cube(), &centered_response()));
    let face = Typeface::from_json(FACE).unwrap();

    let delivery = core.build_label(&face, &requests[0]).unwrap();
    assert_eq!(delivery.geometry.depth, core.config.label_depth);
    assert_eq!(core.attach_label(delivery), AttachOutcome::Attached);
    assert_eq!(core.scene.ruler.attached_labels(), 1);
}

#[test]
fn late_labels_from_earlier_result_are_dropped() {
    let mut core = core_with_view();
    let first = label_requests(&core.visualize(cube(), &centered_response()));
    core.visualize(cube(), &centered_response());
    let face = Typeface::from_json(FACE).unwrap();

    for req in &first {
        let delivery = core.build_label(&face, req).unwrap();
        assert_eq!(core.attach_label(delivery), AttachOutcome::Stale);
    }
    assert_eq!(core.scene.ruler.attached_labels(), 0);
}

#[test]
fn label_failure_leaves_ticks_in_place() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());
    core.fail_labels(core.generation(), &GlyphError::Status(404));
    assert_eq!(core.scene.ruler.ticks.len(), 18);
    assert_eq!(core.scene.ruler.attached_labels(), 0);
}

// =============================================================
// Hover
// =============================================================

#[test]
fn pointer_over_box_shows_tooltip_and_highlights() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());

    let actions = core.on_pointer_move(pt(400.0, 300.0));
    let Some(Action::ShowTooltip { left, top, content }) = actions.first() else {
        panic!("expected tooltip, got {actions:?}");
    };
    assert_eq!((*left, *top), (416.0, 316.0));
    assert_eq!(content.name, "center");
    assert_eq!(content.size, "10 x 10 x 10");
    assert_eq!(content.weight, "3.5 Kg");
    assert_eq!(content.fragile, "Yes");
    assert_eq!(core.scene.hover.highlighted, Some(0));
    assert_eq!(core.scene.boxes[0].material.opacity, 1.0);
}

#[test]
fn projected_box_center_is_hoverable() {
    let mut core = core_with_view();
    let resp = PackingResponse {
        packed_boxes: vec![placed("corner", 0.0, 0.0, 0.0, 10.0)],
        placement_status: Vec::new(),
    };
    core.visualize(cube(), &resp);

    let center = core.scene.boxes[0].center();
    let projected = core.camera.project(center).unwrap();
    let screen = core.viewport.ndc_to_screen(projected.ndc);
    let actions = core.on_pointer_move(screen);
    assert!(matches!(actions.first(), Some(Action::ShowTooltip { content, .. }) if content.name == "corner"));
}

#[test]
fn pointer_over_empty_space_hides_tooltip_and_dims() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());
    core.on_pointer_move(pt(400.0, 300.0));

    let actions = core.on_pointer_move(pt(2.0, 2.0));
    assert_eq!(actions, vec![Action::HideTooltip]);
    assert_eq!(core.scene.hover.highlighted, None);
    assert_eq!(core.scene.boxes[0].material.opacity, 0.5);
    assert_eq!(core.tooltip, Tooltip::Hidden);
}

#[test]
fn pointer_leave_clears_highlight() {
    let mut core = core_with_view();
    core.visualize(cube(), &centered_response());
    core.on_pointer_move(pt(400.0, 300.0));

    assert_eq!(core.on_pointer_leave(), vec![Action::HideTooltip]);
    assert_eq!(core.scene.hover.highlighted, None);
    assert_eq!(core.tooltip, Tooltip::Hidden);
}

#[test]
fn hover_on_empty_viewport_hides_tooltip() {
    let mut core = EngineCore::default();
    core.visualize(cube(), &centered_response());
    assert_eq!(core.on_pointer_move(pt(0.0, 0.0)), vec![Action::HideTooltip]);
}

// =============================================================
// Frame
// =============================================================

#[test]
fn tick_orients_only_loaded_labels() {
    let mut core = core_with_view();
    let requests = label_requests(&core.visualize(cube(), &centered_response()));
    let face = Typeface::from_json(FACE).unwrap();
    for req in requests.iter().take(3) {
        let delivery = core.build_label(&face, req).unwrap();
        core.attach_label(delivery);
    }

    let stats = core.tick();
    assert!(!stats.camera_moved);
    assert_eq!(stats.labels_oriented, 3);
}

#[test]
fn drag_then_tick_moves_camera() {
    let mut core = core_with_view();
    core.on_pointer_down(pt(400.0, 300.0), Button::Primary);
    core.on_pointer_move(pt(460.0, 300.0));
    core.on_pointer_up();

    let before = core.camera.position;
    assert!(core.tick().camera_moved);
    assert_ne!(core.camera.position, before);
    assert!((core.camera.distance() - 80.0).abs() < 1e-6);
}

#[test]
fn wheel_then_tick_zooms() {
    let mut core = core_with_view();
    core.on_wheel(WheelDelta { dx: 0.0, dy: 100.0 });
    assert!(core.tick().camera_moved);
    assert!(core.camera.distance() > 80.0);
}
