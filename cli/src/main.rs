mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, Commands, compare, demo, describe};
use shapes_common::{config::Config, error};
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    let cfg = Config {
        quiet: commands.quiet,
    };

    print::banner(cfg.quiet);

    let result = match commands.command.unwrap_or(Commands::Demo) {
        Commands::Demo => demo::demo(&cfg),
        Commands::Describe { shapes } => describe::describe(&shapes, &cfg),
        Commands::Compare { first, second } => compare::compare(&first, &second, &cfg),
    };

    if let Err(e) = result {
        error!("{e:#}");
        return Ok(ExitCode::FAILURE);
    }

    print::end_of_program(cfg.quiet);
    Ok(ExitCode::SUCCESS)
}
