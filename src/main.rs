//! `competency-annotator` - competency summaries for rendered tables

use clap::Parser;

use competency_annotator::cli::args::Cli;
use competency_annotator::cli::commands;
use competency_annotator::error::ExitCode;
use competency_annotator::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
