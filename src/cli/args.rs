//! Defines the command-line arguments for the regression harness.
//!
//! This module uses the `clap` crate with its "derive" feature. Usage and
//! help output is rendered by the driver so that a wrong argument count and
//! `--help` print the same text.

use clap::Parser;
use std::path::PathBuf;

use crate::command::{DEFAULT_BOOT_ROM_DIR, DEFAULT_SIMULATOR};
use crate::config::DEFAULT_MAX_DEPTH;

pub const ABOUT: &str = "  Runs the simulator executable on each ELF file in <root-dir-for-tests> and its sub-directories.\n  For each test file FOO, saves the output log in <logs_dir>/FOO.log.";

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "isa-regress",
    version,
    about = ABOUT,
    help_template = "{usage-heading} {usage}\n\n{about-with-newline}\n{all-args}"
)]
pub struct HarnessArgs {
    /// Directory tree holding the compiled test binaries.
    #[arg(value_name = "root-dir-for-tests")]
    pub test_root: PathBuf,

    /// Directory that receives one `<test>.log` per executed test.
    #[arg(value_name = "logs_dir")]
    pub log_dir: PathBuf,

    /// Simulator executable to invoke.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_SIMULATOR)]
    pub simulator: PathBuf,

    /// Directory holding boot_ROM_RV32.hex32 and boot_ROM_RV64.hex32.
    #[arg(long, value_name = "DIR", default_value = DEFAULT_BOOT_ROM_DIR)]
    pub boot_rom_dir: PathBuf,

    /// Deepest directory level below the root that is still visited.
    #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Count a test whose simulator cannot be launched as failed and continue.
    #[arg(long)]
    pub keep_going: bool,
}
