//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use locus_cli::CliError;

fn main() -> ExitCode {
    pretty_env_logger::init();
    match locus_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
