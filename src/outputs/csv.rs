//! CSV output, one file per keyword.
//!
//! Column order is fixed by the [`crate::models::NewsRecord`] field order:
//! `title, link, description, date, picture_src, contains_money,
//! words_in_title, words_in_description`.

use crate::errors::{Error, Result};
use crate::models::SearchBatch;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{info, instrument};

const COLUMNS: [&str; 8] = [
    "title",
    "link",
    "description",
    "date",
    "picture_src",
    "contains_money",
    "words_in_title",
    "words_in_description",
];

/// Write one keyword's batch as `challenge_<keyword>.csv` under `output_dir`.
///
/// The header row is always present, so an empty-result success still leaves
/// a (header-only) file behind. Returns the path written.
#[instrument(level = "info", skip_all, fields(keyword = %batch.keyword))]
pub async fn write_batch(batch: &SearchBatch, output_dir: &Path) -> Result<PathBuf> {
    let mut writer = ::csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(COLUMNS)?;
    for record in &batch.records {
        writer.serialize(record)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|err| Error::Io(err.into_error()))?;

    let path = output_dir.join(format!("challenge_{}.csv", batch.keyword));
    fs::write(&path, bytes).await?;
    info!(path = %path.display(), rows = batch.records.len(), "Wrote batch CSV");
    Ok(path)
}
