use std::fmt;

use shapes_common::error::{ShapeError, ensure_positive};
use tracing::debug;

use super::{Shape, rectangular_area, rectangular_perimeter};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    width: f64,
    height: f64,
}

impl Rectangle {
    /// Builds a rectangle, rejecting any side that is not a positive finite number.
    pub fn new(width: f64, height: f64) -> Result<Self, ShapeError> {
        let width = ensure_positive("width", width)?;
        let height = ensure_positive("height", height)?;
        debug!(width, height, "constructed rectangle");
        Ok(Self { width, height })
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        rectangular_area(self.width, self.height)
    }

    fn perimeter(&self) -> f64 {
        rectangular_perimeter(self.width, self.height)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rectangle(width={}, height={})", self.width, self.height)
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
