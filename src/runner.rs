//! Subprocess execution with merged stdout/stderr capture.

use std::io::{self, Read};
use std::process::{ExitStatus, Stdio};

use crate::command::Invocation;
use crate::errors::{HarnessError, Result};

/// Captured result of one simulator run.
///
/// `status` is kept for reporting only; pass/fail is decided from `output`.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    pub output: String,
    pub status: ExitStatus,
}

/// Runs invocations. The walk only talks to this trait, so tests can stand in
/// a scripted simulator.
pub trait Execute {
    fn execute(&mut self, invocation: &Invocation) -> Result<ExecutionResult>;
}

/// Runs the simulator as a real child process and blocks until it exits.
///
/// There is no timeout: a simulator that never exits hangs the harness.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl Execute for ProcessRunner {
    fn execute(&mut self, invocation: &Invocation) -> Result<ExecutionResult> {
        run(invocation)
    }
}

/// Spawns `invocation` with stdout and stderr writing into one pipe, reads the
/// pipe to end of file, then reaps the child.
pub fn run(invocation: &Invocation) -> Result<ExecutionResult> {
    let launch_error = |source: io::Error| HarnessError::Launch {
        program: invocation.program().to_path_buf(),
        source,
    };
    let capture_error = |source: io::Error| HarnessError::Capture {
        program: invocation.program().to_path_buf(),
        source,
    };

    let (mut reader, writer) = io::pipe().map_err(launch_error)?;
    let err_writer = writer.try_clone().map_err(launch_error)?;

    // The command owns our copies of the write end; it has to be dropped
    // before reading or the pipe never reports end of file.
    let mut child = {
        let mut command = invocation.to_command();
        command
            .stdin(Stdio::null())
            .stdout(writer)
            .stderr(err_writer);
        command.spawn().map_err(launch_error)?
    };

    let mut raw = Vec::new();
    let read = reader.read_to_end(&mut raw);
    let status = child.wait().map_err(capture_error)?;
    read.map_err(capture_error)?;

    Ok(ExecutionResult {
        output: String::from_utf8_lossy(&raw).into_owned(),
        status,
    })
}
