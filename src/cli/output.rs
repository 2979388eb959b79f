//! Handles all user-facing output for the CLI.
//!
//! Walk progress, the usage text, the final summary and fatal errors are all
//! printed from here.

use std::io::Write;
use std::path::Path;

use miette::Report;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::command::Invocation;
use crate::errors::HarnessError;
use crate::progress::Progress;
use crate::walker::RunCounters;

// ============================================================================
// PROGRESS SINK
// ============================================================================

/// Writes walk progress as a console trace, coloring the PASS/FAIL verdicts
/// when the writer supports it.
pub struct ConsoleProgress<W: WriteColor> {
    out: W,
}

/// The trace printed by the binary.
pub type StdoutProgress = ConsoleProgress<StandardStream>;

impl StdoutProgress {
    pub fn stdout(use_colors: bool) -> Self {
        let choice = if use_colors {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        ConsoleProgress::new(StandardStream::stdout(choice))
    }
}

impl Default for StdoutProgress {
    fn default() -> Self {
        Self::stdout(use_colors())
    }
}

impl<W: WriteColor> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn verdict(&mut self, text: &str, color: Color) {
        let _ = write!(self.out, "    ");
        let _ = self
            .out
            .set_color(ColorSpec::new().set_fg(Some(color)).set_bold(true));
        let _ = write!(self.out, "{text}");
        let _ = self.out.reset();
    }
}

impl<W: WriteColor> Progress for ConsoleProgress<W> {
    fn directory(&mut self, depth: usize, path: &Path) {
        let _ = writeln!(self.out, "{}{depth} dir {}", indent(depth), path.display());
    }

    fn unrecognized(&mut self, depth: usize, path: &Path) {
        let name = path.file_name().unwrap_or(path.as_os_str());
        let _ = writeln!(
            self.out,
            "{}{depth} Unknown file type: {}",
            indent(depth),
            name.to_string_lossy()
        );
    }

    fn test_started(&mut self, name: &str, invocation: &Invocation) {
        let _ = writeln!(self.out, "Test {name}");
        let _ = writeln!(self.out, "    Exec: {invocation}");
    }

    fn test_finished(&mut self, name: &str, passed: bool, _log: &Path) {
        if passed {
            self.verdict("PASS", Color::Green);
        } else {
            self.verdict("FAIL", Color::Red);
        }
        let _ = writeln!(self.out, "      Writing log: {name}.log");
    }

    fn launch_failed(&mut self, _name: &str, error: &HarnessError) {
        self.verdict("LAUNCH FAILED", Color::Red);
        let _ = writeln!(self.out, ": {error}");
    }
}

// ============================================================================
// CORE OUTPUT FUNCTIONS
// ============================================================================

/// Colors only when stdout is a terminal.
pub fn use_colors() -> bool {
    atty::is(atty::Stream::Stdout)
}

pub fn print_summary(counters: &RunCounters) {
    println!("Executed: {} tests", counters.executed);
    println!("PASS:     {} tests", counters.passed);
}

pub fn print_usage(usage: &str) {
    println!("{usage}");
}

/// Renders a fatal error with its diagnostic code and help on stderr.
pub fn print_error(error: HarnessError) {
    let report = Report::new(error);
    eprintln!("{report:?}");
}

// ============================================================================
// PRIVATE HELPERS
// ============================================================================

fn indent(depth: usize) -> String {
    "  ".repeat(depth)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Simulator;
    use crate::selector::Width;
    use std::io;
    use termcolor::Buffer;

    fn trace(events: impl FnOnce(&mut ConsoleProgress<Buffer>)) -> String {
        let mut progress = ConsoleProgress::new(Buffer::no_color());
        events(&mut progress);
        String::from_utf8(progress.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn indent_is_two_spaces_per_level() {
        assert_eq!(indent(0), "");
        assert_eq!(indent(3), "      ");
    }

    #[test]
    fn directories_are_indented_by_depth() {
        let out = trace(|p| {
            p.directory(0, Path::new("/isa"));
            p.directory(2, Path::new("/isa/rv64/p"));
        });
        assert_eq!(out, "0 dir /isa\n    2 dir /isa/rv64/p\n");
    }

    #[test]
    fn unknown_entries_show_only_the_base_name() {
        let out = trace(|p| p.unrecognized(1, Path::new("/isa/rv32ui-p-fifo")));
        assert_eq!(out, "  1 Unknown file type: rv32ui-p-fifo\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_lines_show_command_verdict_and_log() {
        let inv = Simulator::new("../forvis_exe", "../Test_Programs")
            .invocation(Width::Rv32, "/isa/rv32ui-p-add");
        let out = trace(|p| {
            p.test_started("rv32ui-p-add", &inv);
            p.test_finished("rv32ui-p-add", true, Path::new("/logs/rv32ui-p-add.log"));
            p.test_finished("rv32ui-p-add", false, Path::new("/logs/rv32ui-p-add.log"));
        });
        assert_eq!(
            out,
            "Test rv32ui-p-add\n\
             \x20   Exec: ../forvis_exe --RV32 --tohost ../Test_Programs/boot_ROM_RV32.hex32 /isa/rv32ui-p-add\n\
             \x20   PASS      Writing log: rv32ui-p-add.log\n\
             \x20   FAIL      Writing log: rv32ui-p-add.log\n"
        );
    }

    #[test]
    fn launch_failures_name_the_simulator() {
        let err = HarnessError::Launch {
            program: "../forvis_exe".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        let out = trace(|p| p.launch_failed("rv64ui-p-add", &err));
        assert_eq!(
            out,
            "    LAUNCH FAILED: failed to launch simulator '../forvis_exe'\n"
        );
    }
}
