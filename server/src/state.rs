//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! service keeps nothing between requests beyond its configuration.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::packer::PackerOptions;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        Self { config: Arc::new(config) }
    }

    #[must_use]
    pub fn packer(&self) -> PackerOptions {
        self.config.packer
    }
}
