//! `rangecheck` - validator for tables of named error-code ranges

use clap::Parser;

use rangecheck::cli::args::Cli;
use rangecheck::cli::commands;
use rangecheck::error::ExitCode;
use rangecheck::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(&cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            if !e.is_violation() {
                eprintln!("error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
