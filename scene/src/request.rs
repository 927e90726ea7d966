//! Form input validation and packing request building.
//!
//! The form editor hands over raw, possibly incomplete values. This module
//! checks presence only (not semantic ranges) and produces the wire request.
//! A failed check aborts the action before any network call, leaving the
//! scene untouched.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use crate::consts::MAX_BOX_ROWS;
use crate::wire::{BoxRequest, Container, PackingRequest};

/// Rejected form input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Please enter valid dimensions for the base box.")]
    InvalidBase,
    #[error("Box {row} has invalid or missing data.")]
    InvalidBox { row: usize },
    #[error("Please enter at least one box.")]
    NoBoxes,
    #[error("You can only add up to {max} boxes.")]
    TooManyRows { max: usize },
}

/// Base container dimensions as entered; `None` means the field is empty or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BaseDimensions {
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub height: Option<f64>,
}

impl BaseDimensions {
    /// The container, if every dimension is present, finite, and non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidBase`] otherwise.
    pub fn container(&self) -> Result<Container, InputError> {
        let (Some(width), Some(length), Some(height)) = (self.width, self.length, self.height) else {
            return Err(InputError::InvalidBase);
        };
        let container = Container::new(width, length, height);
        if !container.is_valid() {
            return Err(InputError::InvalidBase);
        }
        Ok(container)
    }
}

/// One form row as entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoxSpec {
    pub name: String,
    pub length: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub weight: Option<f64>,
    pub fragile: bool,
    pub quantity: Option<i64>,
}

impl BoxSpec {
    /// Validate one row; `row` is the 1-based position used in error messages.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::InvalidBox`] when the name or any number is missing.
    pub fn to_request(&self, row: usize) -> Result<BoxRequest, InputError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(InputError::InvalidBox { row });
        }
        let fields = [self.length, self.width, self.height, self.weight];
        let [Some(length), Some(width), Some(height), Some(weight)] = fields else {
            return Err(InputError::InvalidBox { row });
        };
        if fields.iter().flatten().any(|v| !v.is_finite()) {
            return Err(InputError::InvalidBox { row });
        }
        Ok(BoxRequest {
            name: name.to_owned(),
            length,
            width,
            height,
            weight,
            fragile: self.fragile,
            quantity: clamp_quantity(self.quantity),
        })
    }
}

/// Coerce an absent or sub-1 quantity to 1.
#[must_use]
pub fn clamp_quantity(raw: Option<i64>) -> u32 {
    match raw {
        Some(q) if q >= 1 => u32::try_from(q).unwrap_or(u32::MAX),
        _ => 1,
    }
}

/// Parse a numeric form field; blank or malformed text is absent.
#[must_use]
pub fn parse_field(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

/// Parse a quantity field; blank or malformed text is absent.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<i64> {
    match raw.trim().parse::<i64>() {
        Ok(q) => Some(q),
        Err(_) => None,
    }
}

/// Validate the whole form and build the wire request.
///
/// Returns the container alongside the request so the caller can visualize
/// the response against the same extents that were sent.
///
/// # Errors
///
/// Returns the first [`InputError`] found, checking the base first, then the
/// row count, then each row in order.
pub fn build_request(base: &BaseDimensions, rows: &[BoxSpec]) -> Result<(Container, PackingRequest), InputError> {
    let container = base.container()?;
    if rows.is_empty() {
        return Err(InputError::NoBoxes);
    }
    if rows.len() > MAX_BOX_ROWS {
        return Err(InputError::TooManyRows { max: MAX_BOX_ROWS });
    }
    let boxes = rows
        .iter()
        .enumerate()
        .map(|(i, row)| row.to_request(i + 1))
        .collect::<Result<Vec<_>, _>>()?;

    Ok((container, PackingRequest { base_dimensions: container.base_dimensions(), boxes }))
}
