//! CSV serialization of prediction records.
//!
//! Output is deliberately minimal: a fixed header, one line per record,
//! `\n` separators and no trailing newline. Identifiers are written
//! verbatim; one containing a comma or quote will shift the columns of its
//! row because no quoting is applied.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use exoclass_core::{PredictionRecord, resolve_identifier};
use tracing::info;

use crate::ExportError;

pub const HEADER: [&str; 4] = ["identifier", "prediction", "prediction_label", "confidence"];

/// Content type of the exported payload.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Serialize `records` in order.
pub fn to_csv(records: &[PredictionRecord]) -> Result<String, ExportError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(HEADER)?;
    for record in records {
        let identifier = resolve_identifier(record);
        let code = record.predicted_class.code().to_string();
        let confidence = format!("{:.4}", record.confidence);
        writer.write_record([
            identifier.as_str(),
            code.as_str(),
            record.label(),
            confidence.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))?;
    let mut text = String::from_utf8(bytes)?;
    if text.ends_with('\n') {
        text.pop();
    }
    Ok(text)
}

/// File name used when the caller does not supply one:
/// `exoplanet_predictions_<UTC timestamp to the second, colons as hyphens>.csv`.
pub fn default_filename(now: DateTime<Utc>) -> String {
    format!("exoplanet_predictions_{}.csv", now.format("%Y-%m-%dT%H-%M-%S"))
}

/// Write `records` as CSV into `dir` and return the path of the saved file.
pub fn download(
    records: &[PredictionRecord],
    dir: &Path,
    filename: Option<&str>,
) -> Result<PathBuf, ExportError> {
    let text = to_csv(records)?;
    let name = match filename.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => default_filename(Utc::now()),
    };
    let path = dir.join(name);
    std::fs::write(&path, text.as_bytes()).map_err(|source| ExportError::Write {
        path: path.clone(),
        source,
    })?;
    info!(path = %path.display(), rows = records.len(), "exported predictions");
    Ok(path)
}
