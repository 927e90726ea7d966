//! Geometry primitives: screen points, 3D vectors, rays, and axis-aligned boxes.

#[cfg(test)]
#[path = "geom_test.rs"]
mod geom_test;

use std::ops::{Add, Mul, Neg, Sub};

/// Squared length below which a vector is treated as degenerate.
const DEGENERATE_LEN_SQ: f64 = 1e-18;

/// Direction components below this magnitude are treated as parallel to a slab.
const PARALLEL_EPSILON: f64 = 1e-12;

/// A point in screen space (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vector or position in render space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };
    pub const X: Self = Self { x: 1.0, y: 0.0, z: 0.0 };
    pub const Y: Self = Self { x: 0.0, y: 1.0, z: 0.0 };
    pub const Z: Self = Self { x: 0.0, y: 0.0, z: 1.0 };

    #[must_use]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Component by axis index (0 = x, 1 = y, anything else = z).
    #[must_use]
    pub fn axis(self, axis: usize) -> f64 {
        match axis {
            0 => self.x,
            1 => self.y,
            _ => self.z,
        }
    }

    #[must_use]
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    #[must_use]
    pub fn from_array(a: [f64; 3]) -> Self {
        Self::new(a[0], a[1], a[2])
    }

    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    #[must_use]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    #[must_use]
    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Unit vector in the same direction, or `None` for a zero-length vector.
    #[must_use]
    pub fn normalized(self) -> Option<Self> {
        let l2 = self.dot(self);
        if l2 <= DEGENERATE_LEN_SQ {
            return None;
        }
        Some(self * (1.0 / l2.sqrt()))
    }
}

impl Add for Vec3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Self;

    fn mul(self, s: f64) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }
}

impl Neg for Vec3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

/// A half-line `origin + t * dir` for `t >= 0`. `dir` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

impl Ray {
    /// Build a ray, normalizing `dir`. Returns `None` when `dir` is zero.
    #[must_use]
    pub fn new(origin: Vec3, dir: Vec3) -> Option<Self> {
        Some(Self { origin, dir: dir.normalized()? })
    }

    #[must_use]
    pub fn at(&self, t: f64) -> Vec3 {
        self.origin + self.dir * t
    }
}

/// Axis-aligned box in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    #[must_use]
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box of the given full `extents` centered on `center`.
    #[must_use]
    pub fn from_center_extents(center: Vec3, extents: Vec3) -> Self {
        let half = extents * 0.5;
        Self { min: center - half, max: center + half }
    }

    #[must_use]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    #[must_use]
    pub fn extents(&self) -> Vec3 {
        self.max - self.min
    }

    /// The eight corners, ordered by bit pattern `(x, y, z)` with bit set = max.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 8] {
        let (a, b) = (self.min, self.max);
        [
            Vec3::new(a.x, a.y, a.z),
            Vec3::new(b.x, a.y, a.z),
            Vec3::new(a.x, b.y, a.z),
            Vec3::new(b.x, b.y, a.z),
            Vec3::new(a.x, a.y, b.z),
            Vec3::new(b.x, a.y, b.z),
            Vec3::new(a.x, b.y, b.z),
            Vec3::new(b.x, b.y, b.z),
        ]
    }

    /// The twelve edges as corner pairs.
    #[must_use]
    pub fn edges(&self) -> [(Vec3, Vec3); 12] {
        let c = self.corners();
        [
            (c[0], c[1]),
            (c[2], c[3]),
            (c[4], c[5]),
            (c[6], c[7]),
            (c[0], c[2]),
            (c[1], c[3]),
            (c[4], c[6]),
            (c[5], c[7]),
            (c[0], c[4]),
            (c[1], c[5]),
            (c[2], c[6]),
            (c[3], c[7]),
        ]
    }

    /// Entry distance of `ray` into this box (slab method), or `None` on a miss.
    ///
    /// A ray starting inside the box reports `0.0`.
    #[must_use]
    pub fn ray_hit_t(&self, ray: &Ray) -> Option<f64> {
        let mut t_min = 0.0_f64;
        let mut t_max = f64::INFINITY;
        for axis in 0..3 {
            let o = ray.origin.axis(axis);
            let d = ray.dir.axis(axis);
            let (lo, hi) = (self.min.axis(axis), self.max.axis(axis));

            if d.abs() < PARALLEL_EPSILON {
                if o < lo || o > hi {
                    return None;
                }
                continue;
            }

            let inv = 1.0 / d;
            let mut t1 = (lo - o) * inv;
            let mut t2 = (hi - o) * inv;
            if t1 > t2 {
                std::mem::swap(&mut t1, &mut t2);
            }
            t_min = t_min.max(t1);
            t_max = t_max.min(t2);
            if t_max < t_min {
                return None;
            }
        }
        Some(t_min)
    }
}

/// Orthonormal frame used to orient flat geometry (labels) in render space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub right: Vec3,
    pub up: Vec3,
    /// Direction the face points toward.
    pub normal: Vec3,
}

impl Default for Basis {
    fn default() -> Self {
        Self { right: Vec3::X, up: Vec3::Y, normal: Vec3::Z }
    }
}

impl Basis {
    /// Frame at `position` whose normal points at `target`, keeping `world_up` as
    /// close to the frame's up as possible.
    ///
    /// Falls back to the world Z axis as the up hint when the view direction is
    /// parallel to `world_up`. Returns `None` when `target == position`.
    #[must_use]
    pub fn looking_at(position: Vec3, target: Vec3, world_up: Vec3) -> Option<Self> {
        let normal = (target - position).normalized()?;
        let right = match world_up.cross(normal).normalized() {
            Some(r) => r,
            None => Vec3::Z.cross(normal).normalized()?,
        };
        let up = normal.cross(right);
        Some(Self { right, up, normal })
    }

    /// Map a point in the frame's local plane (`x` right, `y` up) into render space.
    #[must_use]
    pub fn place(&self, origin: Vec3, x: f64, y: f64) -> Vec3 {
        origin + self.right * x + self.up * y
    }
}
