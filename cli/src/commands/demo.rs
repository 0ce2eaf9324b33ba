//! The fixed demonstration run: one rectangle, one square and one circle,
//! followed by the rectangle/square comparisons.

use shapes_common::config::Config;
use shapes_core::{Circle, Rectangle, Shape, Square};

use crate::commands::compare::print_comparison;
use crate::commands::describe::{print_shape, print_summary};
use crate::sprint;
use crate::terminal::print;

pub fn demo(cfg: &Config) -> anyhow::Result<()> {
    let r1 = Rectangle::new(3.0, 5.0)?;
    let s1 = Square::new(4.0)?;
    let c1 = Circle::new(3.0)?;

    print::header("shapes", cfg.quiet);
    let shapes: [&dyn Shape; 3] = [&r1, &s1, &c1];
    for (idx, shape) in shapes.iter().enumerate() {
        print_shape(idx, *shape, cfg);
        if cfg.quiet < 2 && idx + 1 != shapes.len() {
            sprint!();
        }
    }

    print::header("comparison", cfg.quiet);
    print_comparison(&r1, &s1, "r1", "s1");

    print_summary(shapes.len(), cfg);
    Ok(())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
