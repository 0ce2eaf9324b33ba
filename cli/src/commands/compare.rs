use shapes_common::{config::Config, warn};
use shapes_core::{Figure, Shape};

use crate::commands::describe::print_shape;
use crate::sprint;
use crate::terminal::{format, print};

pub fn compare(first: &Figure, second: &Figure, cfg: &Config) -> anyhow::Result<()> {
    print::header("shapes", cfg.quiet);
    print_shape(0, first, cfg);
    if cfg.quiet < 2 {
        sprint!();
    }
    print_shape(1, second, cfg);

    print::header("comparison", cfg.quiet);
    if mixes_round_and_straight(first, second) {
        warn!("Exact comparison of a circle with a polygon is almost never equal");
    }
    print_comparison(first, second, "[0]", "[1]");

    Ok(())
}

/// Prints the area and perimeter equality of `left` and `right` as aligned lines.
pub fn print_comparison<A, B>(left: &A, right: &B, left_label: &str, right_label: &str)
where
    A: Shape + ?Sized,
    B: Shape + ?Sized,
{
    let comparison = shapes_core::compare(left, right);
    let details = format::comparison_to_details(&comparison, left_label, right_label);

    print::set_key_width(details.iter().map(|(key, _)| key.as_str()));
    for (key, value) in details {
        print::aligned_line(&key, value);
    }
}

/// Metrics of a circle carry a factor of pi, so they rarely match a polygon's bit for bit.
fn mixes_round_and_straight(first: &Figure, second: &Figure) -> bool {
    matches!(first, Figure::Circle(_)) != matches!(second, Figure::Circle(_))
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
