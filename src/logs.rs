//! Per-test log files.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{HarnessError, Result};

/// `<log_dir>/<test_name>.log`. The test name is used as is, extension and all.
pub fn log_path(log_dir: &Path, test_name: &str) -> PathBuf {
    log_dir.join(format!("{test_name}.log"))
}

/// Writes `output` verbatim to the test's log, replacing any earlier log.
///
/// Tests that share a base name in different directories overwrite each other.
pub fn write_log(log_dir: &Path, test_name: &str, output: &str) -> Result<PathBuf> {
    let path = log_path(log_dir, test_name);
    fs::write(&path, output).map_err(|source| HarnessError::LogWrite {
        path: path.clone(),
        source,
    })?;
    Ok(path)
}
