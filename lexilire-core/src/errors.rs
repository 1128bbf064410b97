//! Error types

use thiserror::Error;

/// Errors raised while building an adapter from a profile.
///
/// Malformed optional data inside a known step (bad colors, wrong param
/// types) never errors; those steps simply render without styling. Only a
/// function the engine does not know, or a profile that is not valid JSON,
/// is a hard failure.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("unknown adaptation function `{0}`")]
    UnknownFunction(String),

    #[error("invalid adaptation profile: {0}")]
    InvalidProfile(#[from] serde_json::Error),
}
