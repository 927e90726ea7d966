//! Server configuration parsed from environment variables.

use std::path::PathBuf;

use crate::services::packer::{DEFAULT_GRID_STEP, DEFAULT_MAX_BOXES, DEFAULT_MAX_GRID_POINTS, PackerOptions};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding the built browser client.
    pub static_dir: PathBuf,
    pub packer: PackerOptions,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// All optional:
    /// - `PORT`: default 3000
    /// - `STATIC_DIR`: default `client/dist`
    /// - `PACKING_GRID_STEP`: default 1
    /// - `PACKING_MAX_BOXES`: default 1000
    /// - `PACKING_MAX_GRID_POINTS`: default 8000000
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparseable.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`] with an explicit variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when a variable is set but unparseable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let static_dir = lookup("STATIC_DIR")
            .filter(|v| !v.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);

        let grid_step: f64 = parse_or(&lookup, "PACKING_GRID_STEP", DEFAULT_GRID_STEP)?;
        if !(grid_step.is_finite() && grid_step > 0.0) {
            return Err(ConfigError::Invalid { var: "PACKING_GRID_STEP", value: grid_step.to_string() });
        }
        let packer = PackerOptions {
            grid_step,
            max_boxes: parse_or(&lookup, "PACKING_MAX_BOXES", DEFAULT_MAX_BOXES)?,
            max_grid_points: parse_or(&lookup, "PACKING_MAX_GRID_POINTS", DEFAULT_MAX_GRID_POINTS)?,
        };

        Ok(Self { port, static_dir, packer })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT, static_dir: PathBuf::from(DEFAULT_STATIC_DIR), packer: PackerOptions::default() }
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
