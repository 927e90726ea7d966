//! Ray hit-testing against rendered boxes.

#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::geom::Ray;
use crate::scene::RenderableBox;

/// A box intersected by a ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hit {
    /// Index into the box group.
    pub index: usize,
    /// Ray parameter of the entry point.
    pub distance: f64,
}

/// The nearest box along `ray`, preferring the earlier box on a tie.
#[must_use]
pub fn nearest_hit(ray: &Ray, boxes: &[RenderableBox]) -> Option<Hit> {
    if boxes.is_empty() {
        return None;
    }
    let mut best: Option<Hit> = None;
    for (index, b) in boxes.iter().enumerate() {
        let Some(distance) = b.bounds.ray_hit_t(ray) else {
            continue;
        };
        if best.is_none_or(|h| distance < h.distance) {
            best = Some(Hit { index, distance });
        }
    }
    best
}
