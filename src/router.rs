use crate::error::RunError;
use crate::extract::SourceRecords;
use crate::matcher::Record;
use crate::sink::{self, OutputFormat};
use std::path::PathBuf;

/// Route per-source record lists to their destinations.
///
/// Exactly two branches: one destination per source keeps outputs separate;
/// anything else means a single merged destination, with records
/// concatenated in source order and within-source line order preserved.
///
/// A `None` entry is a source that failed under Strict policy; it
/// contributes nothing to any destination, and in per-source mode its own
/// destination is not written at all.
pub fn route_outputs(
    extracted: Vec<Option<SourceRecords>>,
    dests: &[PathBuf],
    names: &[String],
    format: OutputFormat,
) -> Result<(), RunError> {
    if dests.len() == extracted.len() {
        for (dest, outcome) in dests.iter().zip(extracted) {
            if let Some(source) = outcome {
                sink::write_records(dest, &source.records, names, format)?;
            }
        }
    } else {
        let merged: Vec<Record> = extracted
            .into_iter()
            .flatten()
            .flat_map(|source| source.records)
            .collect();
        sink::write_records(&dests[0], &merged, names, format)?;
    }
    Ok(())
}
