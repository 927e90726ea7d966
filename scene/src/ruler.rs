//! Ruler geometry: container outline, ticks, and numeric label anchors.
//!
//! Each render axis gets `divisions + 1` evenly spaced ticks. Tick `i` on axis
//! `a` sits at `i * (E[a] / divisions) - E[a] / 2`, where `E` are the
//! container's render extents. Ticks hang outward from one container edge:
//!
//! | Axis | Edge | Tick direction |
//! |------|------|----------------|
//! | X | bottom back (`y = -E.y/2`, `z = -E.z/2`) | -Y |
//! | Y | left back (`x = -E.x/2`, `z = -E.z/2`) | -X |
//! | Z | bottom left (`x = -E.x/2`, `y = -E.y/2`) | -Y |
//!
//! Labels sit further out along the tick direction and read `i * interval`
//! in packer units. Label glyphs load asynchronously; this module only says
//! where they go and what they say.

#[cfg(test)]
#[path = "ruler_test.rs"]
mod ruler_test;

use crate::config::ViewerConfig;
use crate::geom::{Aabb, Vec3};
use crate::mapper::{Extents, render_extents};

/// Placement parameters for ruler geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RulerParams {
    pub divisions: u32,
    pub tick_length: f64,
    pub label_offset: f64,
}

impl RulerParams {
    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        Self {
            divisions: config.effective_divisions(),
            tick_length: config.tick_length,
            label_offset: config.label_offset,
        }
    }
}

/// One tick segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickMark {
    /// Render axis the tick measures (0 = X, 1 = Y, 2 = Z).
    pub axis: usize,
    pub index: u32,
    /// Coordinate along `axis`, in render space.
    pub position: f64,
    /// Point on the container edge.
    pub start: Vec3,
    /// Outer end of the tick.
    pub end: Vec3,
}

/// Where a numeric label goes and what it reads.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub axis: usize,
    pub index: u32,
    pub text: String,
    pub anchor: Vec3,
}

/// Complete ruler for one container.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Ruler {
    /// The twelve container edges.
    pub outline: Vec<(Vec3, Vec3)>,
    pub ticks: Vec<TickMark>,
    pub labels: Vec<LabelSpec>,
}

/// Edge point and outward direction for ticks on `axis`.
fn tick_frame(axis: usize, half: Vec3, position: f64) -> (Vec3, Vec3) {
    match axis {
        0 => (Vec3::new(position, -half.y, -half.z), -Vec3::Y),
        1 => (Vec3::new(-half.x, position, -half.z), -Vec3::X),
        _ => (Vec3::new(-half.x, -half.y, position), -Vec3::Y),
    }
}

/// Build ruler geometry for a container with the given packer extents.
///
/// Extents must be positive; callers validate the container first.
#[must_use]
pub fn build_ruler(container: Extents, params: RulerParams) -> Ruler {
    let extents = render_extents(container);
    let half = extents * 0.5;
    let divisions = params.divisions.max(1);
    let per_axis = divisions as usize + 1;

    let mut ruler = Ruler {
        outline: Aabb::from_center_extents(Vec3::ZERO, extents).edges().to_vec(),
        ticks: Vec::with_capacity(per_axis * 3),
        labels: Vec::with_capacity(per_axis * 3),
    };

    for axis in 0..3 {
        let interval = extents.axis(axis) / f64::from(divisions);
        for i in 0..=divisions {
            let value = f64::from(i) * interval;
            let position = value - half.axis(axis);
            let (start, outward) = tick_frame(axis, half, position);
            ruler.ticks.push(TickMark {
                axis,
                index: i,
                position,
                start,
                end: start + outward * params.tick_length,
            });
            ruler.labels.push(LabelSpec {
                axis,
                index: i,
                text: format_tick_value(value),
                anchor: start + outward * params.label_offset,
            });
        }
    }

    ruler
}

/// Format a tick value with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_tick_value(value: f64) -> String {
    let fixed = format!("{value:.2}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_owned() } else { trimmed.to_owned() }
}
