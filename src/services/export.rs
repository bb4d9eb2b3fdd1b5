use crate::models::VideoRecord;
use anyhow::Result;
use csv::Writer;
use log::info;
use std::path::Path;

/// Write all records to `path` as UTF-8 CSV.
///
/// The header row comes from the field set of [`VideoRecord`], which is
/// uniform across records. An empty batch writes nothing, not even the
/// header.
pub fn save_to_csv(records: &[VideoRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        info!("No data to save.");
        return Ok(());
    }

    let mut writer = Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    info!("Data saved to {}", path.display());
    Ok(())
}
