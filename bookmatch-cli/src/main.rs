//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

use std::process::ExitCode;

use bookmatch_cli::CliError;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match bookmatch_cli::run() {
        Ok(()) => ExitCode::SUCCESS,
        // Clap prints usage, help and version output itself.
        Err(CliError::ArgumentParsing(err)) => err.exit(),
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}
