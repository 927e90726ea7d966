//! Packing service wire types.
//!
//! These are the JSON shapes exchanged with `POST /calculate_packing`. The
//! browser client, the CLI, and the service itself all (de)serialize through
//! this module so the three agree on field names and defaults.

#[cfg(test)]
#[path = "wire_test.rs"]
mod wire_test;

use serde::{Deserialize, Serialize};

use crate::mapper::{Extents, PackerPoint};

/// Path of the packing endpoint.
pub const CALCULATE_PACKING_PATH: &str = "/calculate_packing";

/// Generic message shown when the service gives no usable reason.
pub const GENERIC_SERVICE_FAILURE: &str = "There was an error while calculating the packing. Please try again.";

fn default_quantity() -> u32 {
    1
}

/// One box specification as sent to the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoxRequest {
    pub name: String,
    pub length: f64,
    pub width: f64,
    pub height: f64,
    pub weight: f64,
    #[serde(default)]
    pub fragile: bool,
    /// Number of identical units; absent means one.
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl BoxRequest {
    #[must_use]
    pub fn volume(&self) -> f64 {
        self.length * self.width * self.height
    }
}

/// Body of `POST /calculate_packing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackingRequest {
    /// Container dimensions as `[width, height, length]`.
    pub base_dimensions: [f64; 3],
    pub boxes: Vec<BoxRequest>,
}

impl PackingRequest {
    /// The container described by `base_dimensions`.
    #[must_use]
    pub fn container(&self) -> Container {
        Container::from_base_dimensions(self.base_dimensions)
    }
}

/// The packing container. Immutable for one visualization pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Container {
    pub width: f64,
    pub length: f64,
    pub height: f64,
}

impl Container {
    #[must_use]
    pub fn new(width: f64, length: f64, height: f64) -> Self {
        Self { width, length, height }
    }

    /// Read `[width, height, length]` as carried on the wire.
    #[must_use]
    pub fn from_base_dimensions(dims: [f64; 3]) -> Self {
        let [width, height, length] = dims;
        Self { width, length, height }
    }

    /// Write back to the `[width, height, length]` wire order.
    #[must_use]
    pub fn base_dimensions(&self) -> [f64; 3] {
        [self.width, self.height, self.length]
    }

    #[must_use]
    pub fn extents(&self) -> Extents {
        Extents::new(self.width, self.length, self.height)
    }

    /// Every extent is finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.width, self.length, self.height]
            .iter()
            .all(|v| v.is_finite() && *v > 0.0)
    }
}

/// One placed unit of cargo as returned by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedBox {
    #[serde(default)]
    pub name: Option<String>,
    /// Minimum-corner position along the container width.
    pub x: f64,
    /// Minimum-corner position along the container length.
    pub y: f64,
    /// Minimum-corner position along the container height.
    pub z: f64,
    pub width: f64,
    pub length: f64,
    pub height: f64,
    #[serde(default)]
    pub weight: f64,
    #[serde(default)]
    pub fragile: bool,
    /// Service-assigned color as `#rrggbb`, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl PlacedBox {
    #[must_use]
    pub fn origin(&self) -> PackerPoint {
        PackerPoint::new(self.x, self.y, self.z)
    }

    #[must_use]
    pub fn extents(&self) -> Extents {
        Extents::new(self.width, self.length, self.height)
    }
}

/// Outcome of placing one requested box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlacementState {
    Placed,
    #[serde(rename = "Not Placed")]
    NotPlaced,
}

/// Per-box placement report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementStatus {
    #[serde(rename = "box")]
    pub box_name: String,
    pub status: PlacementState,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Successful response of `POST /calculate_packing`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PackingResponse {
    pub packed_boxes: Vec<PlacedBox>,
    #[serde(default)]
    pub placement_status: Vec<PlacementStatus>,
}

/// Error payload returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Failure of a packing request, as seen by a client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ServiceError {
    #[error("packing service rejected the request ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("packing service returned status {0}")]
    Status(u16),
    #[error("packing request failed: {0}")]
    Transport(String),
    #[error("invalid packing response: {0}")]
    Decode(String),
}

impl ServiceError {
    /// Classify a non-success response from its status and raw body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorBody>(body) {
            Ok(payload) if !payload.error.trim().is_empty() => Self::Rejected { status, message: payload.error },
            _ => Self::Status(status),
        }
    }

    /// Text to show the user: the service message when one was given.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message, .. } => message.clone(),
            Self::Status(_) | Self::Transport(_) | Self::Decode(_) => GENERIC_SERVICE_FAILURE.to_owned(),
        }
    }
}
