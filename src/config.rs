use crate::error::RunError;
use crate::sink::OutputFormat;
use std::path::{Path, PathBuf};

/// Pre-flight source check: every source must exist and be a regular file
/// before any matching starts, so configuration mistakes never produce
/// partial output.
pub fn validate_sources(sources: &[PathBuf]) -> Result<(), RunError> {
    for source in sources {
        if !source.is_file() {
            return Err(RunError::InvalidSource(source.clone()));
        }
    }
    Ok(())
}

/// Resolve the destination list from the `-d` argument.
///
/// Omitted: one sibling `<source-name>.<ext>` per source. Directory: one
/// `<dest>/<source-name>.<ext>` per source. Existing file, or a new path
/// whose parent directory exists: a single merged destination. Anything
/// else is a configuration error.
pub fn resolve_destinations(
    sources: &[PathBuf],
    dest: Option<&Path>,
    format: OutputFormat,
) -> Result<Vec<PathBuf>, RunError> {
    let dests = match dest {
        None => sources
            .iter()
            .map(|src| src.with_file_name(derived_name(src, format)))
            .collect(),
        Some(dir) if dir.is_dir() => sources
            .iter()
            .map(|src| dir.join(derived_name(src, format)))
            .collect(),
        Some(file) if file.is_file() || parent_dir(file).is_dir() => vec![file.to_path_buf()],
        Some(other) => return Err(RunError::InvalidDestination(other.to_path_buf())),
    };
    Ok(dests)
}

/// `log1.txt` becomes `log1.txt.csv`, keeping the original extension so two
/// sources differing only in extension cannot collide.
fn derived_name(source: &Path, format: OutputFormat) -> String {
    let name = source
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("{}.{}", name, format.extension())
}

// A bare file name has an empty parent; that means the current directory.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
