// dataforge-core/src/infrastructure/csv.rs
//
// Persistence collaborator: one Dataset in, one delimited text file out.
// Header row follows the declared column order; the write is atomic.

use std::fs;
use std::path::Path;

use crate::domain::dataset::Dataset;
use crate::infrastructure::error::InfrastructureError;
use crate::infrastructure::fs::atomic_write;

/// Serializes the dataset as CSV and writes it atomically to `path`,
/// creating parent directories as needed. Returns the bytes written.
pub fn write_dataset(path: &Path, dataset: &Dataset) -> Result<u64, InfrastructureError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(dataset.headers())?;
    for index in 0..dataset.row_count() {
        writer.write_record(dataset.row(index).iter().map(|v| v.to_string()))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| InfrastructureError::Io(std::io::Error::other(e.to_string())))?;

    atomic_write(path, &bytes)?;
    Ok(bytes.len() as u64)
}
