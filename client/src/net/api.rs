//! HTTP helpers for the packing service and typeface downloads.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): stubs that report a transport failure,
//! since these requests are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is returned as a typed error. Packing failures become
//! [`ServiceError`] so the engine can show the service message or the generic
//! one; typeface failures become [`GlyphError`] so labels degrade without
//! affecting the rest of the scene.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use scene::glyph::{GlyphError, Typeface};
use scene::wire::{PackingRequest, PackingResponse, ServiceError};

#[cfg(any(test, feature = "csr"))]
fn decode_packing_response(status: u16, ok: bool, body: &str) -> Result<PackingResponse, ServiceError> {
    if !ok {
        return Err(ServiceError::from_response(status, body));
    }
    serde_json::from_str(body).map_err(|e| ServiceError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn decode_typeface(status: u16, ok: bool, body: &str) -> Result<Typeface, GlyphError> {
    if !ok {
        return Err(GlyphError::Status(status));
    }
    Typeface::from_json(body)
}

/// `POST` the request to the packing service at `url`.
///
/// # Errors
///
/// Returns [`ServiceError`] for transport failures, non-success statuses, and
/// bodies that are not a packing response.
pub async fn calculate_packing(url: &str, request: &PackingRequest) -> Result<PackingResponse, ServiceError> {
    #[cfg(feature = "csr")]
    {
        let transport = |e: gloo_net::Error| ServiceError::Transport(e.to_string());
        let resp = gloo_net::http::Request::post(url)
            .json(request)
            .map_err(transport)?
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.map_err(transport)?;
        decode_packing_response(status, ok, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, request);
        Err(ServiceError::Transport("packing requests need a browser".to_owned()))
    }
}

/// Download and parse the label typeface at `url`.
///
/// # Errors
///
/// Returns [`GlyphError`] when the download fails or the file is not a typeface.
pub async fn fetch_typeface(url: String) -> Result<Typeface, GlyphError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| GlyphError::Fetch(e.to_string()))?;
        let status = resp.status();
        let ok = resp.ok();
        let body = resp.text().await.map_err(|e| GlyphError::Fetch(e.to_string()))?;
        decode_typeface(status, ok, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(GlyphError::Fetch(format!("typeface {url} needs a browser")))
    }
}
