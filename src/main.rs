//! Rasterpaint CLI binary entry point.

use std::process::ExitCode;

use rasterpaint::cli;

fn main() -> ExitCode {
    cli::run()
}
