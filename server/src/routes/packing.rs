//! `POST /calculate_packing` handler.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use scene::wire::{ErrorBody, PackingRequest, PackingResponse};

use crate::services::packer::{self, PackingError};
use crate::state::AppState;

/// Failure of a packing request as returned to the client.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Packing(#[from] PackingError),
    #[error("Request body is not a valid packing request: {0}")]
    BadBody(String),
    #[error("Packing failed unexpectedly.")]
    Internal,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Packing(_) | Self::BadBody(_) => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

/// `POST /calculate_packing`: place the requested boxes in the container.
pub async fn calculate_packing(
    State(state): State<AppState>,
    payload: Result<Json<PackingRequest>, JsonRejection>,
) -> Result<Json<PackingResponse>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        tracing::warn!(error = %e, "rejected packing request body");
        ApiError::BadBody(e.body_text())
    })?;

    let options = state.packer();
    let units: u64 = request.boxes.iter().map(|b| u64::from(b.quantity.max(1))).sum();
    tracing::info!(rows = request.boxes.len(), units, "packing request");

    let outcome = tokio::task::spawn_blocking(move || packer::pack(&request, &options, &mut rand::rng()))
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "packing task failed");
            ApiError::Internal
        })?;

    match outcome {
        Ok(response) => {
            tracing::info!(placed = response.packed_boxes.len(), statuses = response.placement_status.len(), "packing done");
            Ok(Json(response))
        }
        Err(e) => {
            tracing::warn!(code = e.error_code(), error = %e, "packing request rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "packing_test.rs"]
mod tests;
