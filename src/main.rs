//! Command-line entry point for the ISA regression harness.
//!
//! ## Usage
//! ```bash
//! isa-regress <root-dir-for-tests> <logs_dir>
//! ```

use std::env;
use std::process;

use isa_regress::cli;

fn main() {
    if let Err(error) = cli::run(env::args_os()) {
        cli::output::print_error(error);
        process::exit(1);
    }
}
