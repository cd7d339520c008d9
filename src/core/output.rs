//! Output formatting for consistent CLI presentation.
//!
//! All user-facing messages go through these helpers so colors,
//! spacing, and message structure stay uniform across commands: red
//! for errors, green for confirmations and branch tags, blue for
//! usage hints, bright_black for muted detail.

use colored::*;

/// Prints an error message.
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Prints an error followed by usage patterns and options, for
/// failures the user fixes by running a different command.
///
/// # Format
/// ```text
///
/// ✕ Error: <message>.
/// Usage:
///   quickspace config --root <path>
///
/// Options:
///   --root <path>  Workspace root to scan
///
/// ```
pub fn print_error_with_structured_usage(
    message: &str,
    usage_patterns: &[&str],
    options: &[(&str, &str)],
) {
    println!("\n{} {}.\n", "✕ Error:".red(), message.white());
    println!("{}", "Usage:".blue());

    for pattern in usage_patterns {
        println!("  {}", pattern.white());
    }

    if !options.is_empty() {
        println!("\n{}", "Options:".blue());
        for (flag, description) in options {
            println!("  {}  {}", flag.bright_black(), description.bright_black());
        }
    }

    println!();
}

/// Prints a success confirmation with a leading green checkmark.
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Prints a plain informational message with surrounding blank lines.
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Prints a section header such as `Favorites:` or `Directories:`.
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Formats the branch tag shown next to a repository directory, e.g.
/// `[main]` in green. Directories without a branch get no tag.
pub fn format_branch_tag(branch: Option<&str>) -> String {
    match branch {
        Some(branch) => format!(" {}", format!("[{}]", branch).green()),
        None => String::new(),
    }
}

/// Formats a directory count with its unit, e.g. `1 directory` or
/// `3 directories`.
pub fn directory_count_label(count: usize) -> String {
    if count == 1 {
        "1 directory".to_string()
    } else {
        format!("{} directories", count)
    }
}
