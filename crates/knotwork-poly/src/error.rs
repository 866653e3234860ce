//! Errors for polynomial decoding.

use thiserror::Error;

/// Errors raised while decoding terms or polynomials.
#[derive(Debug, Error)]
pub enum PolyError {
    /// The JSON input was malformed or had the wrong shape.
    #[error("invalid polynomial json: {0}")]
    Json(#[from] serde_json::Error),
}
