//! Pass/fail classification of captured simulator output.

/// Marker the simulator prints when the target's self-test succeeds.
pub const PASS_MARKER: &str = "PASS";

/// A run passes iff `PASS` occurs anywhere in its output, case-sensitively.
///
/// Exit status is not consulted, and any stray `PASS` in diagnostic output
/// counts as a pass. Simulators in use rely on exactly this contract.
pub fn classify(output: &str) -> bool {
    output.contains(PASS_MARKER)
}
