use asl_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; stderr-only if the state
    // dir is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    // Parse CLI and dispatch. Diagnostics go to stdout with a fixed prefix.
    if let Err(err) = cli::run_from_args() {
        cli::report::error(format_args!("{err:#}"));
        std::process::exit(1);
    }
}
