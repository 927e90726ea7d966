//! Perspective camera and screen/device coordinate conversions.
//!
//! Screen space is CSS pixels with the origin at the canvas top-left and `y`
//! growing downward. Normalized device coordinates (NDC) span `[-1, 1]` on both
//! axes with `y` growing upward, so the vertical axis flips on conversion.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use crate::config::CameraConfig;
use crate::geom::{Point, Ray, Vec3};

/// Canvas size in CSS pixels plus the device pixel ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub dpr: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, dpr: 1.0 }
    }
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64, dpr: f64) -> Self {
        Self { width, height, dpr }
    }

    /// Whether the viewport has a drawable area.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Width over height, or `1.0` for an empty viewport.
    #[must_use]
    pub fn aspect(&self) -> f64 {
        if self.is_empty() { 1.0 } else { self.width / self.height }
    }

    /// Map a pointer position to NDC, inverting the vertical axis.
    ///
    /// Returns `None` for an empty viewport.
    #[must_use]
    pub fn pointer_to_ndc(&self, screen: Point) -> Option<Point> {
        if self.is_empty() {
            return None;
        }
        Some(Point::new(
            screen.x / self.width * 2.0 - 1.0,
            -(screen.y / self.height * 2.0 - 1.0),
        ))
    }

    /// Inverse of [`Viewport::pointer_to_ndc`].
    #[must_use]
    pub fn ndc_to_screen(&self, ndc: Point) -> Point {
        Point::new((ndc.x + 1.0) * 0.5 * self.width, (1.0 - ndc.y) * 0.5 * self.height)
    }
}

/// Orthonormal camera frame: `forward` points from the eye toward the target.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraFrame {
    pub forward: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

/// A world point projected through the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub ndc: Point,
    /// Distance in front of the eye along the view direction.
    pub depth: f64,
}

/// Perspective camera looking at `target`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    /// Vertical field of view in degrees.
    pub fov_deg: f64,
    pub aspect: f64,
    pub near: f64,
    pub far: f64,
}

impl Default for PerspectiveCamera {
    fn default() -> Self {
        Self::new(&CameraConfig::default())
    }
}

impl PerspectiveCamera {
    /// Camera on the +Z axis at `config.distance`, looking at the origin with Y up.
    #[must_use]
    pub fn new(config: &CameraConfig) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, config.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_deg: config.fov_deg,
            aspect: 1.0,
            near: config.near,
            far: config.far,
        }
    }

    /// Distance from the eye to the target.
    #[must_use]
    pub fn distance(&self) -> f64 {
        (self.position - self.target).length()
    }

    fn tan_half_fov(&self) -> f64 {
        (self.fov_deg.to_radians() * 0.5).tan()
    }

    /// The camera frame, or `None` if the eye sits on the target.
    ///
    /// When the view direction is parallel to `up`, world Z stands in as the
    /// up hint so the frame stays defined.
    #[must_use]
    pub fn frame(&self) -> Option<CameraFrame> {
        let forward = (self.target - self.position).normalized()?;
        let right = match forward.cross(self.up).normalized() {
            Some(r) => r,
            None => forward.cross(Vec3::Z).normalized()?,
        };
        let up = right.cross(forward);
        Some(CameraFrame { forward, right, up })
    }

    /// Ray from the eye through an NDC point.
    #[must_use]
    pub fn ray_from_ndc(&self, ndc: Point) -> Option<Ray> {
        let frame = self.frame()?;
        let t = self.tan_half_fov();
        let dir = frame.forward + frame.right * (ndc.x * t * self.aspect) + frame.up * (ndc.y * t);
        Ray::new(self.position, dir)
    }

    /// Project a world point to NDC. Points at or behind the near plane yield `None`.
    #[must_use]
    pub fn project(&self, world: Vec3) -> Option<Projected> {
        let frame = self.frame()?;
        let rel = world - self.position;
        let depth = rel.dot(frame.forward);
        if depth <= self.near {
            return None;
        }
        let t = self.tan_half_fov();
        let x = rel.dot(frame.right) / (depth * t * self.aspect);
        let y = rel.dot(frame.up) / (depth * t);
        Some(Projected { ndc: Point::new(x, y), depth })
    }
}
