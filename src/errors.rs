//! Error types for the regression harness.
//!
//! Every failure that aborts a run is a `HarnessError`. A test that does not
//! print `PASS` is never an error; it is a counted failure.

use std::io;
use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Error, Diagnostic, Debug)]
pub enum HarnessError {
    #[error("failed to launch simulator '{}'", .program.display())]
    #[diagnostic(
        code(harness::launch),
        help("check that the simulator exists and is executable, or point --simulator at it")
    )]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to capture output of '{}'", .program.display())]
    #[diagnostic(code(harness::capture))]
    Capture {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write log '{}'", .path.display())]
    #[diagnostic(
        code(harness::log_write),
        help("the log directory must exist and be writable")
    )]
    LogWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to walk '{}'", .path.display())]
    #[diagnostic(code(harness::walk))]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to resolve the current directory")]
    #[diagnostic(code(harness::current_dir))]
    CurrentDir(#[source] io::Error),
}

impl HarnessError {
    /// Launch failures are the only ones `--keep-going` may isolate to a single test.
    pub fn is_launch(&self) -> bool {
        matches!(self, HarnessError::Launch { .. })
    }
}
