//! Per-frame label orientation toward the camera.

#[cfg(test)]
#[path = "billboard_test.rs"]
mod billboard_test;

use crate::geom::{Basis, Vec3};
use crate::scene::LabelSlot;

/// Turn every loaded label to face `eye`. Returns how many labels were oriented.
///
/// Labels still waiting for glyph geometry are skipped. A label whose anchor
/// coincides with the eye keeps its previous orientation.
pub fn update_labels(labels: &mut [LabelSlot], eye: Vec3, world_up: Vec3) -> usize {
    let mut oriented = 0;
    for label in labels.iter_mut().filter(|l| l.geometry.is_some()) {
        if let Some(basis) = Basis::looking_at(label.spec.anchor, eye, world_up) {
            label.basis = basis;
            oriented += 1;
        }
    }
    oriented
}
