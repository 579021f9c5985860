//! One module per subcommand.
//!
//! Each exposes a pure-ish `run`-style function returning a report (used by
//! tests) and an `execute` function that prints it.

pub mod analyze;
pub mod check;
pub mod common;
pub mod generate;
pub mod populate;
pub mod scaffold;
