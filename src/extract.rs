use crate::error::RunError;
use crate::matcher::{LineMatcher, MatchOutcome, Record};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Per-source extraction counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub lines_read: usize,
    pub records_extracted: usize,
    pub lines_dropped: usize,
}

/// The ordered record sequence extracted from one source file.
#[derive(Debug)]
pub struct SourceRecords {
    pub path: PathBuf,
    pub records: Vec<Record>,
    pub stats: ExtractStats,
}

/// Read one source and run every line through the matcher, preserving line
/// order. Under Strict the first non-matching line aborts the whole source;
/// the partial record list is discarded with it, so the caller never sees a
/// truncated success.
pub fn extract_source(path: &Path, matcher: &LineMatcher) -> Result<SourceRecords, RunError> {
    let lines = read_lines(path)?;
    let (records, stats) = build_records(&lines, matcher, path)?;
    Ok(SourceRecords {
        path: path.to_path_buf(),
        records,
        stats,
    })
}

/// Apply the matcher across a list of lines in original order.
pub fn build_records(
    lines: &[String],
    matcher: &LineMatcher,
    path: &Path,
) -> Result<(Vec<Record>, ExtractStats), RunError> {
    let mut records = Vec::new();
    let mut stats = ExtractStats::default();

    for line in lines {
        stats.lines_read += 1;
        match matcher.match_line(line, path)? {
            MatchOutcome::Record(record) => {
                records.push(record);
                stats.records_extracted += 1;
            }
            MatchOutcome::NoMatch => {
                stats.lines_dropped += 1;
            }
        }
    }

    Ok((records, stats))
}

fn read_lines(path: &Path) -> Result<Vec<String>, RunError> {
    let reader = BufReader::new(File::open(path)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    Ok(lines)
}
