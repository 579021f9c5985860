mod cli;

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;

use cli::{dispatch, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();
    s4a_dict::logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {e:#}", "✗ Error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
