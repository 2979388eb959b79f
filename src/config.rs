//! Harness configuration and path resolution.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::command::Simulator;
use crate::errors::{HarnessError, Result};

/// Directory levels below the root that are still visited.
pub const DEFAULT_MAX_DEPTH: usize = 20;

/// Everything the walk needs besides the root directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    pub simulator: Simulator,
    pub log_dir: PathBuf,
    pub max_depth: usize,
    /// Record a test whose simulator cannot be launched as failed and carry on,
    /// instead of abandoning the run.
    pub keep_going: bool,
}

impl HarnessConfig {
    pub fn new(log_dir: impl Into<PathBuf>) -> Self {
        Self {
            simulator: Simulator::default(),
            log_dir: log_dir.into(),
            max_depth: DEFAULT_MAX_DEPTH,
            keep_going: false,
        }
    }

    pub fn with_simulator(mut self, simulator: Simulator) -> Self {
        self.simulator = simulator;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

/// Makes `path` absolute against the current directory and folds `.` and `..`
/// lexically. Symbolic links are not resolved.
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()
            .map_err(HarnessError::CurrentDir)?
            .join(path)
    };
    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
