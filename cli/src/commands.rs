pub mod compare;
pub mod demo;
pub mod describe;

use clap::{ArgAction, Parser, Subcommand};
use shapes_core::Figure;

#[derive(Parser)]
#[command(name = "shapes")]
#[command(about = "Area and perimeter of simple plane shapes.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Reduce output, repeat to reduce further
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Show debug (-v) or trace (-vv) logs
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the built-in demonstration (default)
    #[command(alias = "d")]
    Demo,
    /// Show description, area and perimeter of shapes like `rectangle:3x5`, `square:4`, `circle:3`
    #[command(alias = "i")]
    Describe {
        #[arg(required = true)]
        shapes: Vec<Figure>,
    },
    /// Check whether two shapes have equal area and perimeter
    #[command(alias = "c")]
    Compare { first: Figure, second: Figure },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
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
