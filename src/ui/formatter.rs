//! Formatting functions for diagnostic output.
//!
//! Everything prints to stderr; stdout is reserved for pipeline results.

use console::style;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display the commit set under analysis.
///
/// Shows up to 10 first lines; if more commits exist, displays the count of
/// remaining commits.
pub fn display_commit_analysis(commit_messages: &[String]) {
    eprintln!(
        "{}",
        style(format!("Analyzing {} commits:", commit_messages.len())).bold()
    );

    for (i, message) in commit_messages.iter().take(10).enumerate() {
        let first_line = message.lines().next().unwrap_or("");
        let short_msg: String = first_line.chars().take(60).collect();
        eprintln!("  {}. {}", i + 1, short_msg);
    }

    if commit_messages.len() > 10 {
        eprintln!("  ... and {} more commits", commit_messages.len() - 10);
    }
}
