//! Logging infrastructure for the modularize CLI.
//!
//! Structured logging via `tracing`. Log output goes to stderr so that
//! transformed code on stdout can be piped.
//!
//! # Example
//!
//! ```rust,no_run
//! use modularize_cli::logger::init_logger;
//! use tracing::info;
//!
//! init_logger(false, false, false);
//! info!("Loading configuration");
//! ```

use std::sync::OnceLock;

use tracing::warn;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

const CRATES: [&str; 4] = [
    "modularize_core",
    "modularize_gen",
    "modularize_config",
    "modularize_cli",
];

/// Set only when the default filter was chosen, so a config file may replace it
static DEFAULT_FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Initialize the tracing subscriber with the specified options.
///
/// The logging level is determined in this order:
/// 1. `--verbose` flag: DEBUG for modularize crates
/// 2. `--quiet` flag: ERROR only
/// 3. `RUST_LOG` environment variable
/// 4. `settings.log_level` from the config file, see [`apply_config_level`]
/// 5. Default: INFO for modularize crates
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let (filter, is_default) = select_filter(verbose, quiet);
    let (filter, handle) = reload::Layer::new(filter);

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer(no_color))
        .try_init()
        .is_ok();

    if installed && is_default {
        let _ = DEFAULT_FILTER_HANDLE.set(handle);
    }
}

/// Apply `settings.log_level` from the config file
///
/// Ignored when a flag or `RUST_LOG` already chose the level.
pub fn apply_config_level(level: &str) {
    let Some(handle) = DEFAULT_FILTER_HANDLE.get() else {
        return;
    };
    match EnvFilter::try_new(crate_directives(level)) {
        Ok(filter) => {
            if let Err(err) = handle.reload(filter) {
                warn!("could not apply log level '{}': {}", level, err);
            }
        }
        Err(err) => warn!("ignoring invalid log level '{}': {}", level, err),
    }
}

fn fmt_layer<S>(no_color: bool) -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact()
}

fn crate_directives(level: &str) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Returns the filter and whether it is the overridable default
fn select_filter(verbose: bool, quiet: bool) -> (EnvFilter, bool) {
    if verbose {
        (EnvFilter::new(crate_directives("debug")), false)
    } else if quiet {
        (EnvFilter::new("error"), false)
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, false),
            Err(_) => (EnvFilter::new(crate_directives("info")), true),
        }
    }
}
