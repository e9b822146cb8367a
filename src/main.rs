//! Commerce API entry point
//!
//! Parses arguments, dispatches to the CLI, and exits non-zero on failure.
//! All logic lives in the `cli` module.

use commerce_api::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
