//! Test selection policy.
//!
//! A file is a runnable test when its name carries no extension, names no
//! unsupported ISA extension, and mentions the machine width it targets.
//! All matching is plain substring containment.

/// Name fragments that disqualify a file.
///
/// `.` marks derived artifacts such as `rv32ui-p-add.dump`. The rest are
/// compressed, single and double precision float suites.
pub const EXCLUDED_FRAGMENTS: &[&str] = &[
    ".", "rv32uc", "rv64uc", "rv32uf", "rv64uf", "rv32ud", "rv64ud",
];

/// Register/address width a test binary targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    Rv32,
    Rv64,
}

impl Width {
    /// Simulator flag selecting this width.
    pub fn flag(self) -> &'static str {
        match self {
            Width::Rv32 => "--RV32",
            Width::Rv64 => "--RV64",
        }
    }
}

/// Outcome of running the selection policy over a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Rejected,
    Selected(Width),
}

impl Selection {
    pub fn width(self) -> Option<Width> {
        match self {
            Selection::Rejected => None,
            Selection::Selected(width) => Some(width),
        }
    }
}

/// Decides whether `file_name` is a runnable test and which width it targets.
///
/// `"32"` is checked before `"64"`, so a name containing both runs as RV32.
pub fn select(file_name: &str) -> Selection {
    if EXCLUDED_FRAGMENTS
        .iter()
        .any(|fragment| file_name.contains(fragment))
    {
        return Selection::Rejected;
    }
    if file_name.contains("32") {
        Selection::Selected(Width::Rv32)
    } else if file_name.contains("64") {
        Selection::Selected(Width::Rv64)
    } else {
        Selection::Rejected
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_plain_test_binaries_by_width() {
        assert_eq!(select("rv32ui-p-add"), Selection::Selected(Width::Rv32));
        assert_eq!(select("rv64um-v-mulh"), Selection::Selected(Width::Rv64));
        assert_eq!(select("rv64mi-p-csr"), Selection::Selected(Width::Rv64));
    }

    #[test]
    fn rejects_names_with_an_extension() {
        for name in ["rv32ui-p-add.dump", "rv64ui-p-add.hex", ".rv32", "rv64ui-p-add."] {
            assert_eq!(select(name), Selection::Rejected, "{name}");
        }
    }

    #[test]
    fn rejects_unsupported_extensions_even_with_a_width() {
        for name in [
            "rv32uc-p-rvc",
            "rv64uc-v-rvc",
            "rv32uf-p-fadd",
            "rv64uf-p-fdiv",
            "rv32ud-p-fcvt",
            "rv64ud-v-move",
            "my_rv64ud_copy",
        ] {
            assert_eq!(select(name), Selection::Rejected, "{name}");
        }
    }

    #[test]
    fn thirty_two_wins_over_sixty_four() {
        assert_eq!(select("rv3264_add"), Selection::Selected(Width::Rv32));
        assert_eq!(select("rv64_and_32"), Selection::Selected(Width::Rv32));
    }

    #[test]
    fn rejects_names_without_a_width() {
        assert_eq!(select("rv_add_test"), Selection::Rejected);
        assert_eq!(select("Makefile"), Selection::Rejected);
        assert_eq!(select(""), Selection::Rejected);
        assert_eq!(select("rv3_2"), Selection::Rejected);
    }

    #[test]
    fn rejected_selection_has_no_width() {
        assert_eq!(Selection::Rejected.width(), None);
        assert_eq!(Selection::Selected(Width::Rv64).width(), Some(Width::Rv64));
    }

    #[test]
    fn width_flags_match_simulator_cli() {
        assert_eq!(Width::Rv32.flag(), "--RV32");
        assert_eq!(Width::Rv64.flag(), "--RV64");
    }
}
