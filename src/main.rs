//! xliffmerge CLI binary entry point.
//! Parses flags, runs the configuration engine against the console and maps
//! the outcome to an exit code.

use clap::Parser;
use xliffmerge::cli::Cli;
use xliffmerge::logging;
use xliffmerge::output::ConsoleSink;
use xliffmerge::Engine;

fn main() {
    let cli = Cli::parse();
    logging::init_logging();
    let mut engine = Engine::new(ConsoleSink::new(), cli.into_program_options());
    if engine.run().is_err() {
        std::process::exit(1);
    }
}
