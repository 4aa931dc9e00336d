use crate::error::{CliError, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::{Layer, filter::LevelFilter, fmt, prelude::*, registry::LookupSpan};

/// Console level: warnings by default, one step per `-v`. Quiet still
/// reports errors.
pub fn level_filter(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn console_layer<S>(level: LevelFilter) -> impl Layer<S>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
{
    fmt::layer::<S>()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_filter(level)
}

/// The log file always keeps solver progress (`debug`), whatever the
/// console level.
fn file_layer<S>(path: &Path, console: LevelFilter) -> Result<impl Layer<S>>
where
    S: Subscriber + for<'span> LookupSpan<'span> + 'static,
{
    let file = File::create(path)?;
    Ok(fmt::layer::<S>()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_thread_ids(true)
        .with_filter(console.max(LevelFilter::DEBUG)))
}

/// Installs the global subscriber. Fails if one is already installed.
pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<&Path>) -> Result<()> {
    let level = level_filter(verbosity, quiet);
    let file = log_file.map(|path| file_layer(path, level)).transpose()?;

    tracing_subscriber::registry()
        .with(console_layer(level))
        .with(file)
        .try_init()
        .map_err(|e| CliError::Other(e.into()))
}
