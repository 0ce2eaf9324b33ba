pub mod compare;
pub mod shape;

pub use compare::{Comparison, compare, compare_area, compare_perimeter};
pub use shape::{Circle, Figure, Rectangle, Shape, Square};
