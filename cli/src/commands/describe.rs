use shapes_common::{config::Config, success};
use shapes_core::{Figure, Shape};

use crate::sprint;
use crate::terminal::{format, print};

pub fn describe(shapes: &[Figure], cfg: &Config) -> anyhow::Result<()> {
    print::header("shape metrics", cfg.quiet);

    for (idx, shape) in shapes.iter().enumerate() {
        print_shape(idx, shape, cfg);
        if cfg.quiet < 2 && idx + 1 != shapes.len() {
            sprint!();
        }
    }

    print_summary(shapes.len(), cfg);
    Ok(())
}

/// Prints one shape as a tree, or as a single line at `quiet >= 2`.
pub fn print_shape<S: Shape + ?Sized>(idx: usize, shape: &S, cfg: &Config) {
    match cfg.quiet {
        0 | 1 => {
            print::tree_head(idx, &shape.describe());
            print::as_tree_one_level(format::shape_to_details(shape));
        }
        _ => print::print_status(format::shape_to_compact_line(shape)),
    }
}

pub fn print_summary(count: usize, cfg: &Config) {
    let unit: &str = if count == 1 { "shape" } else { "shapes" };
    let output: String = format!("{count} {unit} described");

    match cfg.quiet {
        0 => {
            sprint!();
            print::centerln(&output);
        }
        _ => success!("{output}"),
    }
}
