use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

/// The terminal belongs to the board, so log lines go to a file.
pub fn init_logger(path: &Path, verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    let config = ConfigBuilder::new().set_time_format_rfc3339().build();

    WriteLogger::init(level, config, file).context("Logger already initialized")
}
