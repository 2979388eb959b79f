//! Progress reporting seam for the tree walk.

use std::path::Path;

use crate::command::Invocation;
use crate::errors::HarnessError;

/// Receives walk events as they happen.
pub trait Progress {
    fn directory(&mut self, depth: usize, path: &Path);
    fn unrecognized(&mut self, depth: usize, path: &Path);
    fn test_started(&mut self, name: &str, invocation: &Invocation);
    fn test_finished(&mut self, name: &str, passed: bool, log: &Path);
    fn launch_failed(&mut self, name: &str, error: &HarnessError);
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullProgress;

impl Progress for NullProgress {
    fn directory(&mut self, _depth: usize, _path: &Path) {}
    fn unrecognized(&mut self, _depth: usize, _path: &Path) {}
    fn test_started(&mut self, _name: &str, _invocation: &Invocation) {}
    fn test_finished(&mut self, _name: &str, _passed: bool, _log: &Path) {}
    fn launch_failed(&mut self, _name: &str, _error: &HarnessError) {}
}
