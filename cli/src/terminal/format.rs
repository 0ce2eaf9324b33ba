use crate::terminal::colors;
use colored::*;
use shapes_core::{Comparison, Shape};

pub type Detail = (String, ColoredString);

pub const AREA_KEY: &str = "Area";
pub const PERIMETER_KEY: &str = "Perimeter";

/// Area and perimeter as tree details.
pub fn shape_to_details<S: Shape + ?Sized>(shape: &S) -> Vec<Detail> {
    vec![
        (AREA_KEY.to_string(), shape.area().to_string().color(colors::METRIC)),
        (
            PERIMETER_KEY.to_string(),
            shape.perimeter().to_string().color(colors::METRIC),
        ),
    ]
}

/// Single-line form used when detail output is suppressed.
pub fn shape_to_compact_line<S: Shape + ?Sized>(shape: &S) -> String {
    format!(
        "{} area={} perimeter={}",
        shape.describe(),
        shape.area(),
        shape.perimeter()
    )
}

pub fn bool_to_colored(value: bool) -> ColoredString {
    if value {
        value.to_string().color(colors::EQUAL).bold()
    } else {
        value.to_string().color(colors::DIFFERENT).bold()
    }
}

/// Comparison outcome keyed by what was compared, labelled with the two operands.
pub fn comparison_to_details(comparison: &Comparison, left: &str, right: &str) -> Vec<Detail> {
    vec![
        (
            format!("Equal area ({left}, {right})"),
            bool_to_colored(comparison.same_area),
        ),
        (
            format!("Equal perimeter ({left}, {right})"),
            bool_to_colored(comparison.same_perimeter),
        ),
    ]
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
