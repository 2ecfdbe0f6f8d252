//! Terminal UI utilities for formatted status output.
//!
//! Everything here writes to stderr so that stdout stays reserved for
//! transformed code.
//!
//! # Examples
//!
//! ```no_run
//! use modularize_cli::ui;
//!
//! ui::init_colors(false);
//! ui::success("Rewrote 3 imports");
//! ui::error("Failed to parse file");
//! ```

mod format;
mod messages;

pub use format::{format_duration, print_rule, print_summary};
pub use messages::{error, info, success, warning};

/// Check if color output should be enabled.
///
/// Respects NO_COLOR and FORCE_COLOR environment variables, falls back to
/// terminal capability detection.
pub fn should_use_color() -> bool {
    // NO_COLOR environment variable disables colors
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // FORCE_COLOR enables colors even in non-TTY
    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::user_attended_stderr()
}

/// Initialize color support based on flags and environment.
///
/// Should be called early in main, before any message is printed.
pub fn init_colors(no_color: bool) {
    owo_colors::set_override(!no_color && should_use_color());
}
