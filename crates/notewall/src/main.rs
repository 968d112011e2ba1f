//! # Notewall CLI
//!
//! The binary is intentionally thin: the CLI lives in `src/cli/`, while
//! this file only initializes logging, invokes `cli::run()`, and handles
//! process termination. Everything from the `notewallapp` API facade
//! inward is UI-agnostic; this crate owns **all** terminal concerns:
//! argument parsing, store wiring, error printing, and rendering.

mod cli;

fn main() {
    env_logger::init();
    if let Err(e) = cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
