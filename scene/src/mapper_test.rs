use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn vec_approx_eq(a: Vec3, b: Vec3) -> bool {
    approx_eq(a.x, b.x) && approx_eq(a.y, b.y) && approx_eq(a.z, b.z)
}

#[test]
fn corner_box_in_cube_container() {
    let center = to_render_space(
        PackerPoint::new(0.0, 0.0, 0.0),
        Extents::new(10.0, 10.0, 10.0),
        Extents::new(30.0, 30.0, 30.0),
    );
    assert!(vec_approx_eq(center, Vec3::new(-10.0, -10.0, -10.0)));
}

#[test]
fn box_filling_container_is_centered() {
    let e = Extents::new(4.0, 6.0, 8.0);
    let center = to_render_space(PackerPoint::new(0.0, 0.0, 0.0), e, e);
    assert!(vec_approx_eq(center, Vec3::ZERO));
}

#[test]
fn height_maps_to_vertical_axis() {
    // Container 10 wide, 20 long, 40 high; box raised 5 units.
    let center = to_render_space(
        PackerPoint::new(0.0, 0.0, 5.0),
        Extents::new(2.0, 2.0, 2.0),
        Extents::new(10.0, 20.0, 40.0),
    );
    assert!(approx_eq(center.x, -5.0 + 1.0));
    assert!(approx_eq(center.y, 5.0 - 20.0 + 1.0));
    assert!(approx_eq(center.z, -10.0 + 1.0));
}

#[test]
fn length_maps_to_depth_axis() {
    let center = to_render_space(
        PackerPoint::new(0.0, 7.0, 0.0),
        Extents::new(1.0, 3.0, 1.0),
        Extents::new(10.0, 20.0, 10.0),
    );
    assert!(approx_eq(center.z, 7.0 - 10.0 + 1.5));
}

#[test]
fn render_extents_reorders_axes() {
    assert_eq!(render_extents(Extents::new(1.0, 2.0, 3.0)), Vec3::new(1.0, 3.0, 2.0));
}

#[test]
fn render_bounds_reproduce_packer_bounds() {
    let container = Extents::new(30.0, 25.0, 12.0);
    let cases = [
        (PackerPoint::new(0.0, 0.0, 0.0), Extents::new(5.0, 5.0, 5.0)),
        (PackerPoint::new(25.0, 20.0, 7.0), Extents::new(5.0, 5.0, 5.0)),
        (PackerPoint::new(3.5, 11.25, 2.0), Extents::new(1.5, 0.75, 9.5)),
        (PackerPoint::new(0.0, 0.0, 0.0), Extents::new(30.0, 25.0, 12.0)),
    ];
    for (origin, extents) in cases {
        let bounds = render_bounds(origin, extents, container);
        // Shift back to a min-corner frame and undo the axis permutation.
        let shifted_min = bounds.min + render_extents(container) * 0.5;
        let shifted_max = bounds.max + render_extents(container) * 0.5;
        assert!(approx_eq(shifted_min.x, origin.x));
        assert!(approx_eq(shifted_min.z, origin.y));
        assert!(approx_eq(shifted_min.y, origin.z));
        assert!(approx_eq(shifted_max.x, origin.x + extents.width));
        assert!(approx_eq(shifted_max.z, origin.y + extents.length));
        assert!(approx_eq(shifted_max.y, origin.z + extents.height));
    }
}

#[test]
fn inconsistent_input_is_not_rejected() {
    let center = to_render_space(
        PackerPoint::new(100.0, 0.0, 0.0),
        Extents::new(1.0, 1.0, 1.0),
        Extents::new(10.0, 10.0, 10.0),
    );
    assert!(center.x > 5.0);
}
