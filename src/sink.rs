use crate::error::RunError;
use crate::matcher::Record;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    #[value(name = "csv", help = "Comma-separated values, optional header row")]
    Csv,
    #[value(name = "json", help = "JSON document with one object per record")]
    Json,
}

impl OutputFormat {
    /// Extension used for derived destination file names.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Json => "json",
        }
    }
}

#[derive(Serialize)]
struct JsonDocument {
    logs: Vec<Map<String, Value>>,
}

/// Serialize a record list to one destination file.
///
/// The whole byte buffer is built in memory first and written with a single
/// `fs::write`, so a failing run never leaves a partially written
/// destination behind.
pub fn write_records(
    dest: &Path,
    records: &[Record],
    names: &[String],
    format: OutputFormat,
) -> Result<(), RunError> {
    check_header(names, records)?;
    let bytes = match format {
        OutputFormat::Csv => encode_csv(records, names)?,
        OutputFormat::Json => encode_json(records, names)?,
    };
    fs::write(dest, bytes)?;
    Ok(())
}

/// Header length must equal the record field count. Checked lazily, once
/// both a header and at least one record exist, because the record shape is
/// only known after matching.
fn check_header(names: &[String], records: &[Record]) -> Result<(), RunError> {
    match records.first() {
        Some(first) if !names.is_empty() && names.len() != first.len() => {
            Err(RunError::HeaderMismatch {
                expected: first.len(),
                got: names.len(),
            })
        }
        _ => Ok(()),
    }
}

fn encode_csv(records: &[Record], names: &[String]) -> Result<Vec<u8>, RunError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if !names.is_empty() {
        writer.write_record(names)?;
    }
    for record in records {
        writer.write_record(record)?;
    }
    writer
        .into_inner()
        .map_err(|e| RunError::Io(e.into_error()))
}

fn encode_json(records: &[Record], names: &[String]) -> Result<Vec<u8>, RunError> {
    let logs = records
        .iter()
        .map(|record| {
            names
                .iter()
                .zip(record)
                .map(|(name, value)| (name.clone(), Value::String(value.clone())))
                .collect()
        })
        .collect();
    let mut bytes = serde_json::to_vec_pretty(&JsonDocument { logs })?;
    bytes.push(b'\n');
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(raw: &[&[&str]]) -> Vec<Record> {
        raw.iter()
            .map(|r| r.iter().map(|f| f.to_string()).collect())
            .collect()
    }

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn csv_with_header_row() {
        let bytes = encode_csv(&records(&[&["x", "5"], &["y", "7"]]), &names(&["key", "val"]))
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "key,val\nx,5\ny,7\n");
    }

    #[test]
    fn csv_without_header_row() {
        let bytes = encode_csv(&records(&[&["x", "5"]]), &[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "x,5\n");
    }

    #[test]
    fn csv_quotes_fields_containing_the_delimiter() {
        let bytes = encode_csv(&records(&[&["a,b", "5"]]), &[]).unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "\"a,b\",5\n");
    }

    #[test]
    fn csv_round_trip_is_verbatim() {
        let original = records(&[&["x,1", "he said \"hi\""], &["", "plain"]]);
        let bytes = encode_csv(&original, &names(&["a", "b"])).unwrap();

        let mut reader = csv::Reader::from_reader(bytes.as_slice());
        let rows: Vec<Record> = reader
            .records()
            .map(|r| r.unwrap().iter().map(|f| f.to_string()).collect())
            .collect();
        assert_eq!(rows, original);
    }

    #[test]
    fn json_document_shape() {
        let bytes = encode_json(&records(&[&["x", "5"]]), &names(&["key", "val"])).unwrap();
        let doc: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(doc["logs"][0]["key"], "x");
        assert_eq!(doc["logs"][0]["val"], "5");
        assert_eq!(doc["logs"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn header_mismatch_is_deferred_until_records_exist() {
        let short_header = names(&["a", "b"]);
        // No records yet: the mismatch cannot be observed.
        assert!(check_header(&short_header, &[]).is_ok());

        let err = check_header(&short_header, &records(&[&["1", "2", "3"]])).unwrap_err();
        assert_eq!(err.kind(), "HeaderMismatchError");
        assert!(err.to_string().contains("expected 3, got 2"));
    }

    #[test]
    fn write_is_all_or_nothing_per_destination() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out.csv");

        let err = write_records(
            &dest,
            &records(&[&["1", "2", "3"]]),
            &names(&["a", "b"]),
            OutputFormat::Csv,
        )
        .unwrap_err();
        assert_eq!(err.kind(), "HeaderMismatchError");
        assert!(!dest.exists(), "failed write must not create the file");
    }
}
