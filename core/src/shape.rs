//! The shared **contract** every planar shape fulfils.
//!
//! Concrete shapes ([`Rectangle`], [`Square`], [`Circle`]) are immutable value
//! objects validated at construction. [`Figure`] closes the set into a single
//! tagged union for code that needs to hold "any shape" by value.
//!
//! **Architectural Note:**
//! Callers that only compute metrics should depend on [`Shape`] rather than on
//! the concrete types, so [`crate::compare`] works for every variant, for
//! [`Figure`], and for `dyn Shape` alike.

use std::fmt;

mod circle;
mod figure;
mod rectangle;
mod square;

pub use circle::Circle;
pub use figure::Figure;
pub use rectangle::Rectangle;
pub use square::Square;

/// Area, perimeter and a textual description.
///
/// `Display` is a supertrait: a type cannot become a shape without saying
/// how it describes itself, and [`Shape::describe`] is exactly that text.
pub trait Shape: fmt::Display {
    /// Surface enclosed by the shape.
    fn area(&self) -> f64;

    /// Length of the boundary (circumference for a circle).
    fn perimeter(&self) -> f64;

    /// Human-readable label with the defining dimensions,
    /// e.g. `Rectangle(width=3, height=5)`.
    fn describe(&self) -> String {
        self.to_string()
    }
}

/// Area formula shared by rectangles and squares.
pub(crate) fn rectangular_area(width: f64, height: f64) -> f64 {
    width * height
}

/// Perimeter formula shared by rectangles and squares.
pub(crate) fn rectangular_perimeter(width: f64, height: f64) -> f64 {
    2.0 * (width + height)
}
