//! Configuration error types.

use thiserror::Error;

/// Errors produced by the configuration serialization surface.
///
/// Assembling the site configuration itself cannot fail; only parsing a
/// textual rendition or emitting the renderer-facing value can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config parsing error")]
    Toml(#[from] toml::de::Error),

    #[error("config serialization error")]
    Json(#[from] serde_json::Error),
}
