//! Packer-space to render-space coordinate mapping.
//!
//! Packer space puts a box at its minimum corner with `x` along the container
//! width, `y` along its length, and `z` along its height (z up). Render space
//! is Y-up and centered on the container:
//!
//! | Render axis | Packer axis | Extent |
//! |-------------|-------------|--------|
//! | X | `x` | width |
//! | Y (vertical) | `z` | height |
//! | Z | `y` | length |
//!
//! Every consumer that places geometry goes through this module so the
//! convention is applied in exactly one place.

#[cfg(test)]
#[path = "mapper_test.rs"]
mod mapper_test;

use crate::geom::{Aabb, Vec3};

/// Box or container extents in packer terms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Extents {
    #[must_use]
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self { width, length, height }
    }
}

/// A minimum-corner position in packer space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackerPoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl PackerPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Extents reordered onto render axes `(X, Y, Z)`.
#[must_use]
pub fn render_extents(extents: Extents) -> Vec3 {
    Vec3::new(extents.width, extents.height, extents.length)
}

/// Packer origin reordered onto render axes, before centering.
#[must_use]
pub fn render_axes(origin: PackerPoint) -> Vec3 {
    Vec3::new(origin.x, origin.z, origin.y)
}

/// Render-space center of a box placed at `origin` inside `container`.
///
/// Per axis: `center = origin - container / 2 + extent / 2`. Inconsistent input
/// simply lands outside the container; nothing is validated here.
#[must_use]
pub fn to_render_space(origin: PackerPoint, extents: Extents, container: Extents) -> Vec3 {
    let o = render_axes(origin);
    let e = render_extents(extents);
    let c = render_extents(container);
    o - c * 0.5 + e * 0.5
}

/// Render-space bounds of a box placed at `origin` inside `container`.
#[must_use]
pub fn render_bounds(origin: PackerPoint, extents: Extents, container: Extents) -> Aabb {
    Aabb::from_center_extents(to_render_space(origin, extents, container), render_extents(extents))
}
