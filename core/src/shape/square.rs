use std::fmt;

use shapes_common::error::{ShapeError, ensure_positive};
use tracing::debug;

use super::{Rectangle, Shape};

/// A rectangle with equal sides.
///
/// Holds a [`Rectangle`] and forwards the metrics to it; only the
/// description differs. A `Square` is its own value type and is not
/// meant to be used where a resizable rectangle is expected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Square {
    inner: Rectangle,
}

impl Square {
    pub fn new(side: f64) -> Result<Self, ShapeError> {
        let side = ensure_positive("side", side)?;
        let inner = Rectangle::new(side, side)?;
        debug!(side, "constructed square");
        Ok(Self { inner })
    }

    pub fn side(&self) -> f64 {
        self.inner.width()
    }

    pub fn as_rectangle(&self) -> &Rectangle {
        &self.inner
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.inner.area()
    }

    fn perimeter(&self) -> f64 {
        self.inner.perimeter()
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square(side={})", self.side())
    }
}

impl From<Square> for Rectangle {
    fn from(square: Square) -> Self {
        square.inner
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
