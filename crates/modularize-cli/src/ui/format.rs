//! Formatting utilities for durations, rule listings and run summaries.

use std::time::Duration;

use console::Term;
use owo_colors::Style;

use super::messages::paint;

/// Format duration in human-readable format.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use modularize_cli::ui::format_duration;
///
/// assert_eq!(format_duration(Duration::from_millis(50)), "50ms");
/// assert_eq!(format_duration(Duration::from_millis(1500)), "1.50s");
/// assert_eq!(format_duration(Duration::from_secs(90)), "1m 30s");
/// ```
pub fn format_duration(duration: Duration) -> String {
    let total_ms = duration.as_millis();

    if total_ms < 1000 {
        format!("{}ms", total_ms)
    } else if total_ms < 60_000 {
        format!("{:.2}s", duration.as_secs_f64())
    } else {
        let secs = duration.as_secs();
        let mins = secs / 60;
        let secs = secs % 60;
        format!("{}m {}s", mins, secs)
    }
}

/// Print one configured rule as a listing line
///
/// `target` is the transform template or a description of the member table;
/// `flags` are printed dimmed after it.
pub fn print_rule(pattern: &str, target: &str, flags: &[&str]) {
    let flags = if flags.is_empty() {
        String::new()
    } else {
        format!(" [{}]", flags.join(", "))
    };
    eprintln!(
        "  {} {} {} {}{}",
        paint("▸", Style::new().blue()),
        paint(pattern, Style::new().bright_white().bold()),
        paint("→", Style::new().dimmed()),
        target,
        paint(&flags, Style::new().dimmed())
    );
}

/// Print a transform summary to stderr.
///
/// `files` holds `(name, rewritten imports)` for every modified file.
pub fn print_summary(files: &[(String, usize)], total_files: usize, elapsed: Duration) {
    let width = Term::stderr().size().1 as usize;

    eprintln!("\n{}", paint("Transform Summary", Style::new().bold().underline()));
    eprintln!("{}", "─".repeat(width.min(80)));

    for (name, rewritten) in files {
        eprintln!(
            "  {} {} {}",
            paint("▸", Style::new().blue()),
            paint(name, Style::new().bright_white().bold()),
            paint(&format!("({} rewritten)", rewritten), Style::new().dimmed())
        );
    }

    eprintln!("{}", "─".repeat(width.min(80)));

    let rewritten: usize = files.iter().map(|(_, count)| count).sum();
    eprintln!(
        "  {} {} import(s) in {} of {} file(s) in {}",
        paint("Total:", Style::new().bold()),
        paint(&rewritten.to_string(), Style::new().green()),
        files.len(),
        total_files,
        paint(&format_duration(elapsed), Style::new().green())
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_milliseconds() {
        assert_eq!(format_duration(Duration::from_millis(0)), "0ms");
        assert_eq!(format_duration(Duration::from_millis(999)), "999ms");
    }

    #[test]
    fn test_format_duration_seconds() {
        assert_eq!(format_duration(Duration::from_millis(1000)), "1.00s");
        assert_eq!(format_duration(Duration::from_millis(59_999)), "60.00s");
    }

    #[test]
    fn test_format_duration_minutes() {
        assert_eq!(format_duration(Duration::from_secs(60)), "1m 0s");
        assert_eq!(format_duration(Duration::from_secs(125)), "2m 5s");
    }

    #[test]
    fn test_print_functions_do_not_panic() {
        print_rule("lodash", "lodash/${member}", &["preventFullImport"]);
        print_summary(&[("src/app.js".to_string(), 2)], 3, Duration::from_millis(12));
    }
}
