//! # Shape Errors
//!
//! Every fallible operation in the workspace reports one of these.
//! Construction only ever fails with [`ShapeError::InvalidDimension`];
//! the other variants come from parsing shape strings.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ShapeError {
    /// A required dimension was zero, negative, NaN or infinite.
    #[error("invalid dimension: {name} must be a positive number, got {value}")]
    InvalidDimension { name: &'static str, value: f64 },
    /// The shape kind in a shape string is not one we know.
    #[error("unknown shape '{0}', expected rectangle, square or circle")]
    UnknownShape(String),
    /// The dimension list in a shape string could not be read.
    #[error("malformed dimensions: {0}")]
    MalformedDimensions(String),
}

/// Checks that `value` is usable as a length.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, ShapeError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        debug!(name, value, "rejected dimension");
        Err(ShapeError::InvalidDimension { name, value })
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
