//! rpnloop CLI
//!
//! Loads a program file, runs it, and prints the final variables or the
//! first error. Exits with status 1 if the program or the CLI itself failed.

use rpnloop::cli;

fn main() {
    match cli::run_cli() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
