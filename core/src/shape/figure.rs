//! # Figure
//!
//! The closed set of supported shapes as one value type.
//!
//! A figure can be parsed from a short string:
//! * `rectangle:3x5` (or `rect:3x5`)
//! * `square:4`
//! * `circle:3`
//!
//! The kind is case-insensitive and whitespace around the parts is ignored.

use std::fmt;
use std::str::FromStr;

use shapes_common::error::ShapeError;

use super::{Circle, Rectangle, Shape, Square};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Figure {
    Rectangle(Rectangle),
    Square(Square),
    Circle(Circle),
}

impl Figure {
    /// Lowercase name of the variant.
    pub fn kind(&self) -> &'static str {
        match self {
            Figure::Rectangle(_) => "rectangle",
            Figure::Square(_) => "square",
            Figure::Circle(_) => "circle",
        }
    }
}

impl Shape for Figure {
    fn area(&self) -> f64 {
        match self {
            Figure::Rectangle(rect) => rect.area(),
            Figure::Square(square) => square.area(),
            Figure::Circle(circle) => circle.area(),
        }
    }

    fn perimeter(&self) -> f64 {
        match self {
            Figure::Rectangle(rect) => rect.perimeter(),
            Figure::Square(square) => square.perimeter(),
            Figure::Circle(circle) => circle.perimeter(),
        }
    }
}

impl fmt::Display for Figure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Figure::Rectangle(rect) => fmt::Display::fmt(rect, f),
            Figure::Square(square) => fmt::Display::fmt(square, f),
            Figure::Circle(circle) => fmt::Display::fmt(circle, f),
        }
    }
}

impl From<Rectangle> for Figure {
    fn from(rect: Rectangle) -> Self {
        Figure::Rectangle(rect)
    }
}

impl From<Square> for Figure {
    fn from(square: Square) -> Self {
        Figure::Square(square)
    }
}

impl From<Circle> for Figure {
    fn from(circle: Circle) -> Self {
        Figure::Circle(circle)
    }
}

impl FromStr for Figure {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((kind, dims)) = s.split_once(':') else {
            return Err(ShapeError::MalformedDimensions(format!(
                "expected 'kind:dimensions', got '{}'",
                s.trim()
            )));
        };

        match kind.trim().to_ascii_lowercase().as_str() {
            "rectangle" | "rect" => {
                let [width, height] = parse_dimensions::<2>(dims, 'x')?;
                Ok(Figure::Rectangle(Rectangle::new(width, height)?))
            }
            "square" => {
                let [side] = parse_dimensions::<1>(dims, 'x')?;
                Ok(Figure::Square(Square::new(side)?))
            }
            "circle" => {
                let [radius] = parse_dimensions::<1>(dims, 'x')?;
                Ok(Figure::Circle(Circle::new(radius)?))
            }
            other => Err(ShapeError::UnknownShape(other.to_string())),
        }
    }
}

/// Splits `dims` on `sep` and reads exactly `N` numbers.
///
/// Only syntax is checked here; sign and range are left to the constructors.
fn parse_dimensions<const N: usize>(dims: &str, sep: char) -> Result<[f64; N], ShapeError> {
    let values: Vec<f64> = dims
        .split(sep)
        .map(|part| {
            let part = part.trim();
            part.parse::<f64>()
                .map_err(|e| ShapeError::MalformedDimensions(format!("'{part}': {e}")))
        })
        .collect::<Result<Vec<f64>, _>>()?;

    let found = values.len();
    values.try_into().map_err(|_| {
        ShapeError::MalformedDimensions(format!(
            "expected {N} dimension(s), got {found} in '{}'",
            dims.trim()
        ))
    })
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
