//! # Harness Test Fixtures
//!
//! Scratch test trees and a scripted stand-in for the simulator.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Prints its width flag and boot ROM, one line on stderr, then the target's
/// contents. A test file therefore decides its own verdict.
pub const FAKE_SIMULATOR: &str = r#"#!/bin/sh
echo "sim $1 $2 $3"
echo "tohost watch" 1>&2
cat "$4"
"#;

/// A scratch workspace: `isa/` for test binaries, `logs/` for logs, and a
/// fake simulator script.
pub struct Workspace {
    pub dir: TempDir,
    pub root: PathBuf,
    pub logs: PathBuf,
    pub simulator: PathBuf,
    pub boot_roms: PathBuf,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("scratch dir");
        let root = dir.path().join("isa");
        let logs = dir.path().join("logs");
        let boot_roms = dir.path().join("roms");
        fs::create_dir_all(&root).unwrap();
        fs::create_dir_all(&logs).unwrap();
        fs::create_dir_all(&boot_roms).unwrap();
        let simulator = dir.path().join("forvis_exe");
        write_executable(&simulator, FAKE_SIMULATOR);
        Self {
            dir,
            root,
            logs,
            simulator,
            boot_roms,
        }
    }

    /// Creates a test binary under `isa/` whose simulated output is `output`.
    pub fn test_file(&self, relative: &str, output: &str) -> PathBuf {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, output).unwrap();
        path
    }

    /// Output the fake simulator produces for a test at `width` with `contents`.
    pub fn expected_log(&self, width: u32, contents: &str) -> String {
        format!(
            "sim --RV{width} --tohost {}\ntohost watch\n{contents}",
            self.boot_roms
                .join(format!("boot_ROM_RV{width}.hex32"))
                .display()
        )
    }

    pub fn log_names(&self) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(&self.logs)
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }

    pub fn read_log(&self, name: &str) -> String {
        fs::read_to_string(self.logs.join(name)).unwrap()
    }
}

#[cfg(unix)]
pub fn write_executable(path: &Path, script: &str) {
    use std::os::unix::fs::PermissionsExt;
    fs::write(path, script).unwrap();
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(not(unix))]
pub fn write_executable(path: &Path, script: &str) {
    fs::write(path, script).unwrap();
}
