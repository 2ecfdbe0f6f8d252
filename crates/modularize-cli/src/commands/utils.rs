//! Shared helpers for commands

use std::path::Path;

use modularize_config::{ConfigDiscovery, ModularizeConfig, load_from, validate_schema};
use modularize_gen::{FormatOptions, QuoteStyle};
use tracing::debug;

use crate::error::{CliError, Result, ResultExt};
use crate::logger;

/// Load and validate the configuration
///
/// An explicit path is loaded as given; otherwise the current directory is
/// searched.
pub(crate) fn load_config(path: Option<&Path>) -> Result<ModularizeConfig> {
    let config = match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.to_path_buf()));
            }
            load_from(path)?
        }
        None => {
            let cwd = std::env::current_dir()?;
            ConfigDiscovery::new(&cwd).load()?
        }
    };

    validate_schema(&config)?;
    if let Some(level) = &config.settings.log_level {
        logger::apply_config_level(level);
    }
    debug!(libraries = config.libraries.len(), "configuration loaded");
    Ok(config)
}

/// Format options from the config, with the command-line override applied
pub(crate) fn format_options(
    config: &ModularizeConfig,
    quote: Option<QuoteStyle>,
) -> Result<FormatOptions> {
    let configured = config
        .settings
        .quote_style
        .as_deref()
        .map(str::parse::<QuoteStyle>)
        .transpose()
        .map_err(CliError::InvalidArgument)?;

    Ok(FormatOptions::with_quote_style(
        quote.or(configured).unwrap_or_default(),
    ))
}

/// Read a source file, mapping a missing file to `FileNotFound`
pub(crate) fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_path(path)
}
