//! Metric comparisons between any two shapes.
//!
//! Equality here is exact `f64` equality with no tolerance. Two shapes whose
//! areas are equal on paper can still compare unequal once rounding enters,
//! which is common as soon as a circle is involved.

use crate::shape::Shape;

/// Both comparisons for a pair of shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparison {
    pub same_area: bool,
    pub same_perimeter: bool,
}

/// `true` iff both shapes report bit-for-bit equal areas.
pub fn compare_area<A, B>(a: &A, b: &B) -> bool
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    a.area() == b.area()
}

/// `true` iff both shapes report bit-for-bit equal perimeters.
pub fn compare_perimeter<A, B>(a: &A, b: &B) -> bool
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    a.perimeter() == b.perimeter()
}

pub fn compare<A, B>(a: &A, b: &B) -> Comparison
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    Comparison {
        same_area: compare_area(a, b),
        same_perimeter: compare_perimeter(a, b),
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
