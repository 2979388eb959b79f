//! Directory traversal and the per-file test pipeline.
//!
//! Each regular file goes through select → build → execute → classify → log.
//! Counts from every file are folded into one [`RunCounters`] returned to the
//! caller; nothing is kept in global state, so repeated walks are independent.

use std::borrow::Cow;
use std::ffi::OsString;
use std::io;
use std::ops::{Add, AddAssign};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::classify::classify;
use crate::config::HarnessConfig;
use crate::errors::{HarnessError, Result};
use crate::logs::write_log;
use crate::progress::Progress;
use crate::runner::Execute;
use crate::selector::{select, Selection};

// ============================================================================
// COUNTERS
// ============================================================================

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunCounters {
    pub executed: usize,
    pub passed: usize,
}

impl RunCounters {
    /// Counters for a single executed test.
    pub fn record(passed: bool) -> Self {
        Self {
            executed: 1,
            passed: usize::from(passed),
        }
    }
}

impl Add for RunCounters {
    type Output = RunCounters;

    fn add(self, rhs: RunCounters) -> RunCounters {
        RunCounters {
            executed: self.executed + rhs.executed,
            passed: self.passed + rhs.passed,
        }
    }
}

impl AddAssign for RunCounters {
    fn add_assign(&mut self, rhs: RunCounters) {
        *self = *self + rhs;
    }
}

// ============================================================================
// CANDIDATES
// ============================================================================

/// A regular file found during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCandidate {
    dir: PathBuf,
    file_name: OsString,
}

impl TestCandidate {
    /// `None` for paths without a final file name component (`/`, `..`).
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_os_string();
        let dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Some(Self { dir, file_name })
    }

    pub fn name(&self) -> Cow<'_, str> {
        self.file_name.to_string_lossy()
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }

    pub fn selection(&self) -> Selection {
        select(&self.name())
    }
}

// ============================================================================
// TRAVERSAL
// ============================================================================

/// Walks `root` depth-first, entries sorted by name, running every selected
/// test. Entries deeper than `config.max_depth` below `root` are not visited.
///
/// Symbolic links are followed; link cycles and dangling links are reported
/// as unrecognized and skipped. Any other enumeration failure is fatal.
pub fn walk(
    root: &Path,
    config: &HarnessConfig,
    runner: &mut dyn Execute,
    progress: &mut dyn Progress,
) -> Result<RunCounters> {
    let mut counters = RunCounters::default();
    let entries = WalkDir::new(root)
        .follow_links(true)
        .max_depth(config.max_depth)
        .sort_by_file_name();

    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) if err.depth() > 0 && is_unresolvable(&err) => {
                progress.unrecognized(err.depth(), err.path().unwrap_or(root));
                continue;
            }
            Err(err) => {
                return Err(HarnessError::Walk {
                    path: err.path().unwrap_or(root).to_path_buf(),
                    source: err,
                })
            }
        };

        let file_type = entry.file_type();
        if file_type.is_dir() {
            progress.directory(entry.depth(), entry.path());
        } else if file_type.is_file() {
            match TestCandidate::from_path(entry.path()) {
                Some(candidate) => counters += run_candidate(&candidate, config, runner, progress)?,
                None => progress.unrecognized(entry.depth(), entry.path()),
            }
        } else {
            progress.unrecognized(entry.depth(), entry.path());
        }
    }

    Ok(counters)
}

fn is_unresolvable(err: &walkdir::Error) -> bool {
    err.loop_ancestor().is_some()
        || err
            .io_error()
            .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}

/// Runs one file through the pipeline. Rejected files contribute nothing.
pub fn run_candidate(
    candidate: &TestCandidate,
    config: &HarnessConfig,
    runner: &mut dyn Execute,
    progress: &mut dyn Progress,
) -> Result<RunCounters> {
    let Some(width) = candidate.selection().width() else {
        return Ok(RunCounters::default());
    };
    let name = candidate.name();
    let invocation = config.simulator.invocation(width, candidate.path());
    progress.test_started(&name, &invocation);

    let result = match runner.execute(&invocation) {
        Ok(result) => result,
        Err(err) if config.keep_going && err.is_launch() => {
            progress.launch_failed(&name, &err);
            return Ok(RunCounters::record(false));
        }
        Err(err) => return Err(err),
    };

    let passed = classify(&result.output);
    let log = write_log(&config.log_dir, &name, &result.output)?;
    progress.test_finished(&name, passed, &log);
    Ok(RunCounters::record(passed))
}
