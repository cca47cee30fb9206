//! Export use case: pick a destination and format, then write the records

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use garage_domain::Garage;
use garage_infra::file_sink;
use garage_types::{ExportFormat, Result};

use crate::config::Config;

/// Resolve the format for a destination, appending the configured
/// extension when the path has none.
pub fn resolve_destination(path: &Path, config: &Config) -> (PathBuf, ExportFormat) {
    match ExportFormat::from_path(path) {
        Some(format) => (path.to_path_buf(), format),
        None => (
            path.with_extension(config.export_format.extension()),
            config.export_format,
        ),
    }
}

/// Timestamped file name inside the configured export directory
pub fn default_export_path(config: &Config, now: DateTime<Local>) -> PathBuf {
    config.export_dir().join(format!(
        "service_records_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        config.export_format.extension()
    ))
}

/// Export closed records; returns the path actually written
pub fn export_records(garage: &Garage, path: Option<&Path>, config: &Config) -> Result<PathBuf> {
    let requested = match path {
        Some(p) => p.to_path_buf(),
        None => default_export_path(config, Local::now()),
    };
    let (destination, format) = resolve_destination(&requested, config);

    let sink = file_sink(&destination, format);
    garage.export(sink.as_ref())?;

    log::info!("Exported records as {} to {}", format, destination.display());
    Ok(destination)
}
