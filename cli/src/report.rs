//! Argument parsing and plain-text reports for the CLI.

use scene::mapper::to_render_space;
use scene::request::{BoxSpec, parse_field, parse_quantity};
use scene::ruler::Ruler;
use scene::wire::{Container, PackingResponse, PlacedBox, PlacementState};

use crate::CliError;

const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];

/// Parse `NAME:LxWxH:WEIGHT[:QUANTITY][:fragile]`.
///
/// Dimensions and weight are parsed the same way the browser form parses
/// them; a bad number is reported against the whole argument.
pub fn parse_box_arg(raw: &str) -> Result<BoxSpec, CliError> {
    let invalid = || CliError::InvalidBoxArg(raw.to_owned());
    let mut parts = raw.split(':');
    let name = parts.next().filter(|n| !n.trim().is_empty()).ok_or_else(invalid)?;
    let dims: Vec<&str> = parts.next().ok_or_else(invalid)?.split('x').collect();
    let [length, width, height] = dims.as_slice() else {
        return Err(invalid());
    };
    let weight = parts.next().ok_or_else(invalid)?;

    let mut spec = BoxSpec {
        name: name.trim().to_owned(),
        length: parse_field(length),
        width: parse_field(width),
        height: parse_field(height),
        weight: parse_field(weight),
        fragile: false,
        quantity: None,
    };
    if [spec.length, spec.width, spec.height, spec.weight].iter().any(Option::is_none) {
        return Err(invalid());
    }
    for extra in parts {
        if extra.eq_ignore_ascii_case("fragile") {
            spec.fragile = true;
        } else if let Some(q) = parse_quantity(extra) {
            spec.quantity = Some(q);
        } else {
            return Err(invalid());
        }
    }
    Ok(spec)
}

/// `base/path` with exactly one slash between them.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path.trim_start_matches('/'))
}

fn placed_line(container: Container, b: &PlacedBox) -> String {
    let center = to_render_space(b.origin(), b.extents(), container.extents());
    format!(
        "{name}  at ({x}, {y}, {z})  size {w} x {l} x {h}  center ({cx:.2}, {cy:.2}, {cz:.2})",
        name = b.name.as_deref().unwrap_or(scene::consts::MISSING_ATTRIBUTE),
        x = b.x,
        y = b.y,
        z = b.z,
        w = b.width,
        l = b.length,
        h = b.height,
        cx = center.x,
        cy = center.y,
        cz = center.z,
    )
}

/// Placements with their render-space centers, then the placement summary.
pub fn placement_report(container: Container, response: &PackingResponse) -> Vec<String> {
    let mut lines = Vec::with_capacity(response.packed_boxes.len() + response.placement_status.len() + 2);
    lines.push(format!(
        "container {} x {} x {} (width x length x height)",
        container.width, container.length, container.height
    ));
    lines.extend(response.packed_boxes.iter().map(|b| placed_line(container, b)));

    let placed = response
        .placement_status
        .iter()
        .filter(|s| s.status == PlacementState::Placed)
        .count();
    lines.push(format!("placed {placed} of {}", response.placement_status.len()));
    lines.extend(
        response
            .placement_status
            .iter()
            .filter(|s| s.status == PlacementState::NotPlaced)
            .map(|s| format!("not placed: {}", s.box_name)),
    );
    lines
}

/// Outline, tick, and label geometry of a ruler, one item per line.
pub fn ruler_report(ruler: &Ruler) -> Vec<String> {
    let mut lines = vec![format!("outline edges: {}", ruler.outline.len())];
    for tick in &ruler.ticks {
        lines.push(format!(
            "tick {axis}[{index}]: ({sx:.2}, {sy:.2}, {sz:.2}) -> ({ex:.2}, {ey:.2}, {ez:.2})",
            axis = AXIS_NAMES.get(tick.axis).copied().unwrap_or("?"),
            index = tick.index,
            sx = tick.start.x,
            sy = tick.start.y,
            sz = tick.start.z,
            ex = tick.end.x,
            ey = tick.end.y,
            ez = tick.end.z,
        ));
    }
    for label in &ruler.labels {
        lines.push(format!(
            "label {axis}[{index}] {text:?} at ({x:.2}, {y:.2}, {z:.2})",
            axis = AXIS_NAMES.get(label.axis).copied().unwrap_or("?"),
            index = label.index,
            text = label.text,
            x = label.anchor.x,
            y = label.anchor.y,
            z = label.anchor.z,
        ));
    }
    lines
}

#[cfg(test)]
#[path = "report_test.rs"]
mod tests;
