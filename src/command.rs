//! Simulator invocations.
//!
//! An [`Invocation`] can only be obtained from [`Simulator::invocation`],
//! which derives both the width flag and the boot ROM from the same
//! [`Width`]. The two never disagree.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::selector::Width;

pub const DEFAULT_SIMULATOR: &str = "../forvis_exe";
pub const DEFAULT_BOOT_ROM_DIR: &str = "../Test_Programs";
pub const BOOT_ROM_RV32: &str = "boot_ROM_RV32.hex32";
pub const BOOT_ROM_RV64: &str = "boot_ROM_RV64.hex32";

/// Flag asking the simulator to stop and report when the target writes `tohost`.
pub const TOHOST_FLAG: &str = "--tohost";

/// Where the simulator executable and its boot ROMs live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Simulator {
    pub executable: PathBuf,
    pub boot_rom_dir: PathBuf,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            executable: PathBuf::from(DEFAULT_SIMULATOR),
            boot_rom_dir: PathBuf::from(DEFAULT_BOOT_ROM_DIR),
        }
    }
}

impl Simulator {
    pub fn new(executable: impl Into<PathBuf>, boot_rom_dir: impl Into<PathBuf>) -> Self {
        Self {
            executable: executable.into(),
            boot_rom_dir: boot_rom_dir.into(),
        }
    }

    pub fn boot_rom(&self, width: Width) -> PathBuf {
        let file = match width {
            Width::Rv32 => BOOT_ROM_RV32,
            Width::Rv64 => BOOT_ROM_RV64,
        };
        self.boot_rom_dir.join(file)
    }

    /// Builds the invocation that runs `target` at the given width.
    pub fn invocation(&self, width: Width, target: impl Into<PathBuf>) -> Invocation {
        Invocation {
            program: self.executable.clone(),
            width,
            boot_rom: self.boot_rom(width),
            target: target.into(),
        }
    }
}

/// A fully determined simulator command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    program: PathBuf,
    width: Width,
    boot_rom: PathBuf,
    target: PathBuf,
}

impl Invocation {
    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Arguments after the program: `--RV32|--RV64 --tohost <boot-rom> <target>`.
    pub fn args(&self) -> Vec<OsString> {
        vec![
            OsString::from(self.width.flag()),
            OsString::from(TOHOST_FLAG),
            self.boot_rom.clone().into_os_string(),
            self.target.clone().into_os_string(),
        ]
    }

    /// Full argument vector, program first.
    pub fn argv(&self) -> Vec<OsString> {
        let mut argv = vec![self.program.clone().into_os_string()];
        argv.extend(self.args());
        argv
    }

    pub fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command.args(self.args());
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let argv = self.argv();
        for (i, arg) in argv.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}
