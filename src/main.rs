mod commands;
mod domain;
mod logging;
mod services;
#[cfg(test)]
mod test_support;

use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::burn_rate_cmd::burn_rate_command;
use crate::commands::completions_cmd::completions_command;
use crate::commands::pert_cmd::pert_command;
use clap::Parser;
use tracing::error;

fn main() -> ExitCode {
    logging::init_tracing();
    let args = CliArgs::parse();

    let result = match args.command {
        cmd @ Commands::BurnRate { .. } => burn_rate_command(cmd),
        cmd @ Commands::Pert { .. } => pert_command(cmd),
        cmd @ Commands::Completions { .. } => {
            completions_command(cmd);
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
