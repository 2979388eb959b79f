//! The regression harness command-line interface.
//!
//! This module is the driver: it parses the two positional arguments, runs the
//! walk with the real process runner and prints the summary.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, FromArgMatches};

use crate::cli::args::HarnessArgs;
use crate::cli::output::StdoutProgress;
use crate::command::Simulator;
use crate::config::{absolute_path, HarnessConfig};
use crate::errors::Result;
use crate::runner::ProcessRunner;
use crate::walker::{walk, RunCounters};

pub mod args;
pub mod output;

const PROGRAM_NAME: &str = "isa-regress";

/// Runs the harness for the given argument vector, program name first.
///
/// Returns `Ok(None)` when only usage (or the version) was printed: a wrong
/// argument count, `-h`/`--help` and unparsable options are not errors.
pub fn run<I, T>(argv: I) -> Result<Option<RunCounters>>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let program = argv
        .first()
        .map(|arg| arg.to_string_lossy().into_owned())
        .unwrap_or_else(|| PROGRAM_NAME.to_string());

    let mut command = HarnessArgs::command()
        .override_usage(format!("{program} <root-dir-for-tests> <logs_dir>"));
    let parsed = command
        .try_get_matches_from_mut(&argv)
        .and_then(|matches| HarnessArgs::from_arg_matches(&matches));
    let args = match parsed {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            let _ = err.print();
            return Ok(None);
        }
        Err(err) => {
            if reports_bad_input(&err) {
                let _ = err.print();
            }
            output::print_usage(&command.render_help().to_string());
            return Ok(None);
        }
    };

    let root = absolute_path(&args.test_root)?;
    let config = HarnessConfig::new(absolute_path(&args.log_dir)?)
        .with_simulator(Simulator::new(args.simulator, args.boot_rom_dir))
        .with_max_depth(args.max_depth)
        .with_keep_going(args.keep_going);

    let counters = walk(
        &root,
        &config,
        &mut ProcessRunner,
        &mut StdoutProgress::default(),
    )?;
    output::print_summary(&counters);
    Ok(Some(counters))
}

/// Parse failures worth showing before the usage text. A wrong argument
/// count and `--help` only get the usage; clap reports a surplus positional
/// as an unknown argument, so only unknown flags count.
fn reports_bad_input(err: &clap::Error) -> bool {
    match err.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => true,
        ErrorKind::UnknownArgument => matches!(
            err.get(ContextKind::InvalidArg),
            Some(ContextValue::String(arg)) if arg.starts_with('-')
        ),
        _ => false,
    }
}
