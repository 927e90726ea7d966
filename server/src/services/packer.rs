//! Packing service: first-fit grid placement of boxes in a container.
//!
//! ALGORITHM
//! =========
//! Requested quantities are expanded into single units, then units are sorted
//! by volume, largest first (stable, so equal volumes keep request order). Each
//! unit is placed at the first grid origin, scanning `z`, then `y`, then `x`,
//! where it stays inside the container and overlaps no unit placed before it.
//! Units that fit nowhere are reported as not placed. Boxes are never rotated.
//!
//! The occupied set only grows, so once a size fits nowhere, every later unit
//! at least that large on all three axes is reported without another scan.
//! Within a row the scan jumps past the box that blocks the candidate.
//!
//! Axes follow the wire convention: `x` spans width, `y` spans length, `z`
//! spans height.

use rand::Rng;
use scene::color::Rgb;
use scene::wire::{BoxRequest, Container, PackingRequest, PackingResponse, PlacedBox, PlacementState, PlacementStatus};

/// Slack for float comparisons against container walls and neighbours.
const EPSILON: f64 = 1e-9;

pub const DEFAULT_GRID_STEP: f64 = 1.0;
pub const DEFAULT_MAX_BOXES: usize = 1000;
pub const DEFAULT_MAX_GRID_POINTS: u64 = 8_000_000;

/// Limits and resolution of the placement scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackerOptions {
    /// Distance between candidate origins along each axis.
    pub grid_step: f64,
    /// Maximum number of units after quantity expansion.
    pub max_boxes: usize,
    /// Maximum number of candidate origins in the container.
    pub max_grid_points: u64,
}

impl Default for PackerOptions {
    fn default() -> Self {
        Self { grid_step: DEFAULT_GRID_STEP, max_boxes: DEFAULT_MAX_BOXES, max_grid_points: DEFAULT_MAX_GRID_POINTS }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PackingError {
    #[error("Base dimensions must be three positive numbers.")]
    InvalidBase,
    #[error("Please provide at least one box.")]
    NoBoxes,
    #[error("Box {row} has invalid dimensions or weight.")]
    InvalidBox { row: usize },
    #[error("Too many boxes: {count} requested, the limit is {max}.")]
    TooManyBoxes { count: u64, max: usize },
    #[error("The container is too large to scan with grid step {step}.")]
    GridTooFine { step: f64 },
}

impl PackingError {
    /// Stable code for logs.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidBase => "E_INVALID_BASE",
            Self::NoBoxes => "E_NO_BOXES",
            Self::InvalidBox { .. } => "E_INVALID_BOX",
            Self::TooManyBoxes { .. } => "E_TOO_MANY_BOXES",
            Self::GridTooFine { .. } => "E_GRID_TOO_FINE",
        }
    }
}

/// Minimum corner and size of a placed unit, in packer axes.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Slot {
    origin: [f64; 3],
    size: [f64; 3],
}

impl Slot {
    fn overlaps(&self, other: &Slot) -> bool {
        (0..3).all(|a| {
            self.origin[a] + self.size[a] > other.origin[a] + EPSILON
                && other.origin[a] + other.size[a] > self.origin[a] + EPSILON
        })
    }
}

fn size_of(spec: &BoxRequest) -> [f64; 3] {
    [spec.width, spec.length, spec.height]
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}

/// Check the request shape before any placement work.
///
/// # Errors
///
/// Returns the first [`PackingError`] the request violates.
pub fn validate(request: &PackingRequest, options: &PackerOptions) -> Result<Container, PackingError> {
    let container = request.container();
    if !container.is_valid() {
        return Err(PackingError::InvalidBase);
    }
    if request.boxes.is_empty() {
        return Err(PackingError::NoBoxes);
    }
    for (i, spec) in request.boxes.iter().enumerate() {
        let dims_ok = size_of(spec).iter().all(|v| is_positive(*v));
        let weight_ok = spec.weight.is_finite() && spec.weight >= 0.0;
        if !dims_ok || !weight_ok {
            return Err(PackingError::InvalidBox { row: i + 1 });
        }
    }

    let count: u64 = request.boxes.iter().map(|b| u64::from(b.quantity.max(1))).sum();
    if count > u64::try_from(options.max_boxes).unwrap_or(u64::MAX) {
        return Err(PackingError::TooManyBoxes { count, max: options.max_boxes });
    }

    let step = options.grid_step;
    if !is_positive(step) {
        return Err(PackingError::GridTooFine { step });
    }
    let points = [container.width, container.length, container.height]
        .iter()
        .try_fold(1u64, |acc, extent| acc.checked_mul(axis_points(*extent, step)));
    if points.is_none_or(|p| p > options.max_grid_points) {
        return Err(PackingError::GridTooFine { step });
    }
    Ok(container)
}

/// Number of candidate origins along one axis.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn axis_points(extent: f64, step: f64) -> u64 {
    (extent / step + EPSILON).floor() as u64 + 1
}

/// Pack `request`, coloring placed units with `rng`.
///
/// # Errors
///
/// Returns a [`PackingError`] when the request fails [`validate`].
pub fn pack<R: Rng + ?Sized>(
    request: &PackingRequest,
    options: &PackerOptions,
    rng: &mut R,
) -> Result<PackingResponse, PackingError> {
    let container = validate(request, options)?;
    let bounds = [container.width, container.length, container.height];

    let mut units: Vec<&BoxRequest> = request
        .boxes
        .iter()
        .flat_map(|spec| std::iter::repeat_n(spec, spec.quantity.max(1) as usize))
        .collect();
    units.sort_by(|a, b| b.volume().total_cmp(&a.volume()));

    let mut occupied: Vec<Slot> = Vec::with_capacity(units.len());
    let mut misfits: Vec<[f64; 3]> = Vec::new();
    let mut response = PackingResponse {
        packed_boxes: Vec::with_capacity(units.len()),
        placement_status: Vec::with_capacity(units.len()),
    };

    for spec in units {
        let size = size_of(spec);
        let known_misfit = misfits.iter().any(|m| covers(size, *m));
        let found = if known_misfit { None } else { first_fit(bounds, size, options.grid_step, &occupied) };
        let Some(origin) = found else {
            if !known_misfit {
                misfits.push(size);
            }
            response.placement_status.push(PlacementStatus {
                box_name: spec.name.clone(),
                status: PlacementState::NotPlaced,
                color: None,
            });
            continue;
        };
        occupied.push(Slot { origin, size });

        let color = Rgb::random(rng).to_hex();
        response.packed_boxes.push(PlacedBox {
            name: Some(spec.name.clone()),
            x: origin[0],
            y: origin[1],
            z: origin[2],
            width: spec.width,
            length: spec.length,
            height: spec.height,
            weight: spec.weight,
            fragile: spec.fragile,
            color: Some(color.clone()),
        });
        response.placement_status.push(PlacementStatus {
            box_name: spec.name.clone(),
            status: PlacementState::Placed,
            color: Some(color),
        });
    }

    Ok(response)
}

/// Grid coordinates along one axis where a box of `size` still fits.
fn positions(extent: f64, size: f64, step: f64) -> impl Iterator<Item = f64> {
    (0u32..)
        .map(move |k| f64::from(k) * step)
        .take_while(move |p| p + size <= extent + EPSILON)
}

/// True when `size` is at least `smaller` along every axis.
fn covers(size: [f64; 3], smaller: [f64; 3]) -> bool {
    (0..3).all(|a| size[a] + EPSILON >= smaller[a])
}

/// Smallest grid coordinate at or past `value`.
fn next_grid(value: f64, step: f64) -> f64 {
    ((value - EPSILON) / step).ceil() * step
}

/// First grid origin where a box of `size` fits, scanning z, then y, then x.
fn first_fit(bounds: [f64; 3], size: [f64; 3], step: f64, occupied: &[Slot]) -> Option<[f64; 3]> {
    for z in positions(bounds[2], size[2], step) {
        for y in positions(bounds[1], size[1], step) {
            let mut x = 0.0;
            while x + size[0] <= bounds[0] + EPSILON {
                let candidate = Slot { origin: [x, y, z], size };
                let Some(blocker) = occupied.iter().find(|o| o.overlaps(&candidate)) else {
                    return Some(candidate.origin);
                };
                // Every grid point before the blocker's far edge overlaps it too.
                x = next_grid(blocker.origin[0] + blocker.size[0], step).max(x + step);
            }
        }
    }
    None
}

#[cfg(test)]
#[path = "packer_test.rs"]
mod tests;
