//! Transform command implementation.
//!
//! Rewrites member imports in one or more source files. Files are processed
//! in parallel; each file is all-or-nothing.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use modularize_core::ImportTransformer;
use modularize_gen::{FormatOptions, ParseOptions, SourceTransformer, TransformOutput};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::cli::TransformArgs;
use crate::commands::utils;
use crate::error::{CliError, Result};
use crate::ui;

/// Execute the transform command.
///
/// # Steps
///
/// 1. Load, validate and compile the configuration
/// 2. Transform every file in parallel
/// 3. Print the single result to stdout, or write modified files with `--write`
/// 4. Report failures and a summary
///
/// # Errors
///
/// Returns the file's error when a single file fails, or
/// [`CliError::Failed`] after reporting each failure of a multi-file run.
pub fn execute(args: TransformArgs) -> Result<()> {
    if !args.write && args.files.len() > 1 {
        return Err(CliError::InvalidArgument(
            "multiple files can only be transformed with --write".to_string(),
        ));
    }

    let start = Instant::now();
    let config = utils::load_config(args.config.as_deref())?;
    let format = utils::format_options(&config, args.quote.map(Into::into))?;
    let transformer = ImportTransformer::new(config.build_rules()?);
    info!(
        rules = transformer.rules().len(),
        files = args.files.len(),
        "transforming"
    );

    let results = run_parallel(config.settings.parallel_jobs, || {
        args.files
            .par_iter()
            .map(|path| (path.clone(), transform_file(path, &transformer, &format)))
            .collect::<Vec<_>>()
    })?;

    let total = results.len();
    let mut failures = Vec::new();
    let mut modified = Vec::new();
    for (path, result) in results {
        match result {
            Ok(output) => {
                if args.write {
                    if output.modified {
                        std::fs::write(&path, &output.code)?;
                        debug!(file = %path.display(), "written");
                        modified.push((path.display().to_string(), output.rewritten));
                    }
                } else {
                    let mut stdout = std::io::stdout().lock();
                    stdout.write_all(output.code.as_bytes())?;
                    stdout.flush()?;
                }
            }
            Err(err) => failures.push(err),
        }
    }

    if failures.is_empty() {
        if args.write {
            if modified.is_empty() {
                ui::warning("No import matched a configured library; no file was written");
            }
            ui::print_summary(&modified, total, start.elapsed());
        }
        return Ok(());
    }

    if total == 1 {
        if let Some(err) = failures.pop() {
            return Err(err);
        }
    }
    for err in &failures {
        ui::error(&err.to_string());
    }
    Err(CliError::Failed {
        failed: failures.len(),
        total,
    })
}

fn transform_file(
    path: &Path,
    transformer: &ImportTransformer,
    format: &FormatOptions,
) -> Result<TransformOutput> {
    let source = utils::read_source(path)?;
    let options = ParseOptions::from_path(&path.to_string_lossy());
    SourceTransformer::new(transformer)
        .with_format_options(format.clone())
        .transform(&source, &options)
        .map_err(|source| CliError::Transform {
            file: PathBuf::from(path),
            source,
        })
}

/// Run `job` on a dedicated pool when a worker count is configured
fn run_parallel<T, F>(jobs: Option<usize>, job: F) -> Result<T>
where
    T: Send,
    F: FnOnce() -> T + Send,
{
    let Some(threads) = jobs else {
        return Ok(job());
    };
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()
        .map_err(|err| CliError::Custom(format!("failed to start worker pool: {err}")))?;
    Ok(pool.install(job))
}
