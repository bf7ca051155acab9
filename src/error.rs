//! Error types for the culling library
//!
//! This module defines the error types used throughout the library.
//! The per-box classification path is precondition-driven and never
//! fails at runtime; errors exist only at the cold facade surface.

use std::fmt;

/// Result type for culling operations
pub type Result<T> = std::result::Result<T, Error>;

/// Culling library errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A frustum query ran before the first update_frustum() call
    FrustumNotBuilt,

    /// Camera intrinsics violate the near/far/fov/aspect preconditions
    DegenerateCamera(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FrustumNotBuilt => {
                write!(f, "Frustum not built. Call update_frustum() first.")
            }
            Error::DegenerateCamera(msg) => {
                write!(f, "Degenerate camera intrinsics: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
