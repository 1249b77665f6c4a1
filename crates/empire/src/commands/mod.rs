//! Command dispatch: bridges CLI args -> core validation -> output formatting.

pub mod config_cmd;
pub mod empires;
pub mod palette;
pub mod util;
pub mod validate;

use crate::cli::Command;
use crate::config::Settings;
use crate::error::CliError;

/// Dispatch a command to the appropriate handler.
pub fn dispatch(cmd: Command, settings: &Settings) -> Result<(), CliError> {
    match cmd {
        Command::Validate(args) => validate::handle(&args, settings),
        Command::Empires(args) => empires::handle(args, settings),
        Command::Palette => palette::handle(settings),
        Command::Config(args) => config_cmd::handle(&args, settings),
        // Completions are generated before settings are resolved
        Command::Completions(_) => unreachable!(),
    }
}
