//! Status message functions for terminal output.

use owo_colors::{OwoColorize, Stream, Style};

/// Apply `style` when stderr supports colors
pub(crate) fn paint(text: &str, style: Style) -> String {
    text.if_supports_color(Stream::Stderr, |t| t.style(style))
        .to_string()
}

/// Print a success message to stderr.
///
/// # Examples
///
/// ```no_run
/// use modularize_cli::ui::success;
///
/// success("Configuration is valid");
/// ```
pub fn success(message: &str) {
    eprintln!("{} {}", paint("✓", Style::new().green().bold()), message);
}

/// Print an info message to stderr.
pub fn info(message: &str) {
    eprintln!("{} {}", paint("ℹ", Style::new().blue().bold()), message);
}

/// Print a warning message to stderr.
pub fn warning(message: &str) {
    eprintln!(
        "{} {}",
        paint("⚠", Style::new().yellow().bold()),
        paint(message, Style::new().yellow())
    );
}

/// Print an error message to stderr.
///
/// # Examples
///
/// ```no_run
/// use modularize_cli::ui::error;
///
/// error("src/app.js: import of 'lodash' is not permitted");
/// ```
pub fn error(message: &str) {
    eprintln!(
        "{} {}",
        paint("✗", Style::new().red().bold()),
        paint(message, Style::new().red())
    );
}
