//! Console Output
//!
//! Colored, prefixed status lines for user-facing reporting. Diagnostic
//! logging goes through `tracing`; these helpers are the CLI's actual
//! interface and always print.

use std::fmt::Display;

use colored::Colorize;

/// Print a green success line.
pub fn success(msg: impl Display) {
    println!("{}", format!("\u{2705} {}", msg).green());
}

/// Print a yellow warning line.
pub fn warning(msg: impl Display) {
    println!("{}", format!("\u{26a0}\u{fe0f}  {}", msg).yellow());
}

/// Print a red error line.
pub fn error(msg: impl Display) {
    println!("{}", format!("\u{274c} {}", msg).red());
}

/// Print a blue informational line.
pub fn info(msg: impl Display) {
    println!("{}", format!("\u{2139}\u{fe0f}  {}", msg).blue());
}
