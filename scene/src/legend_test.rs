use super::*;
use crate::geom::{Aabb, Vec3};
use crate::scene::{BoxInfo, Material};

fn renderable(name: Option<&str>, fragile: bool) -> RenderableBox {
    RenderableBox {
        bounds: Aabb::from_center_extents(Vec3::ZERO, Vec3::new(1.0, 1.0, 1.0)),
        material: Material::opaque(Rgb::new(0x12, 0x34, 0x56)),
        info: BoxInfo { name: name.map(str::to_owned), width: 4.0, length: 2.5, height: 1.0, weight: 7.25, fragile },
    }
}

#[test]
fn summary_lines_follow_panel_layout() {
    let rec = DisplayRecord::from_renderable(&renderable(Some("crate"), true));
    let lines = rec.summary_lines();
    let labels: Vec<_> = lines.iter().map(|(l, _)| *l).collect();
    assert_eq!(labels, ["Name", "Length", "Width", "Height", "Weight", "Fragile"]);
    assert_eq!(lines[0].1, "crate");
    assert_eq!(lines[1].1, "2.5");
    assert_eq!(lines[2].1, "4");
    assert_eq!(lines[4].1, "7.25 Kg");
    assert_eq!(lines[5].1, "Yes");
}

#[test]
fn record_carries_assigned_color() {
    let rec = DisplayRecord::from_renderable(&renderable(None, false));
    assert_eq!(rec.color.to_hex(), "#123456");
    assert_eq!(rec.name, "N/A");
}

#[test]
fn display_records_keep_group_order() {
    let recs = display_records(&[renderable(Some("a"), false), renderable(Some("b"), false)]);
    let names: Vec<_> = recs.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn placement_records_map_status() {
    let statuses = [
        PlacementStatus { box_name: "a".into(), status: PlacementState::Placed, color: Some("#ff0000".into()) },
        PlacementStatus { box_name: String::new(), status: PlacementState::NotPlaced, color: None },
    ];
    let recs = placement_records(&statuses);
    assert_eq!(recs[0].status_text(), "Placed");
    assert_eq!(recs[0].color, Some(Rgb::new(255, 0, 0)));
    assert_eq!(recs[1].status_text(), "Not Placed");
    assert_eq!(recs[1].name, "N/A");
    assert!(recs[1].color.is_none());
}
