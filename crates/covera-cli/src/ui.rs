use std::io::IsTerminal;

use crate::cli::{GlobalFlags, OutputFormat};

/// Whether table cells may carry ANSI colour.
///
/// Only for table output on a terminal, and never with `--quiet` or `NO_COLOR`.
#[must_use]
pub fn table_color(flags: &GlobalFlags) -> bool {
    flags.format == OutputFormat::Table
        && !flags.quiet
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal()
}
