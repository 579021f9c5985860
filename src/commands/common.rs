//! Output helpers shared by the report commands.

use colored::Colorize;

use crate::BANNER;

const RULE_WIDTH: usize = 60;

pub fn print_header(title: &str) {
    println!("{}", format!("{BANNER} - {title}").bold());
    print_rule();
}

pub fn print_rule() {
    println!("{}", "─".repeat(RULE_WIDTH).dimmed());
}

/// One line noting unreadable files, if there were any
pub fn print_unreadable(count: usize) {
    if count == 0 {
        return;
    }
    println!(
        "{} Skipped {count} unreadable file(s); see warnings above",
        "⚠".yellow()
    );
}
