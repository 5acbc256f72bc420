use hashcmp_core::{logging, report};

mod cli;

use crate::cli::Cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state dir is unusable.
    if let Err(err) = logging::init_logging() {
        logging::init_logging_stderr();
        tracing::debug!("file logging unavailable: {:#}", err);
    }

    // Parse CLI and dispatch. Usage errors exit inside clap.
    if let Err(err) = Cli::run_from_args() {
        tracing::warn!("hashcmp failed: {:#}", err);
        eprintln!("{}", report::error_line(format_args!("{err:#}")));
        std::process::exit(1);
    }
}
