use crate::error::RunError;
use regex::Regex;
use std::fs;
use std::path::Path;

/// A validated extraction pattern.
///
/// The pattern argument is resolved first: if it names an existing regular
/// file, the file's contents (trimmed of trailing whitespace, so a stray
/// newline cannot break full-line matching) become the pattern text;
/// otherwise the argument itself is the pattern text. Compilation happens
/// once, before any matching, and a compile failure aborts the run.
#[derive(Debug, Clone)]
pub struct Pattern {
    text: String,
    regex: Regex,
}

impl Pattern {
    /// Resolve pattern text from an inline string or a pattern file, then
    /// compile it.
    pub fn resolve(arg: &str) -> Result<Self, RunError> {
        let path = Path::new(arg);
        let text = if path.is_file() {
            fs::read_to_string(path)?.trim_end().to_string()
        } else {
            arg.to_string()
        };
        Self::compile(text)
    }

    pub fn compile(text: String) -> Result<Self, RunError> {
        let regex = Regex::new(&text).map_err(|e| RunError::InvalidPattern {
            pattern: text.clone(),
            message: compile_error_message(&e),
        })?;
        Ok(Pattern { text, regex })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Number of capture groups, excluding the implicit whole-match group.
    pub fn group_count(&self) -> usize {
        self.regex.captures_len() - 1
    }

    /// One field name per capture group: the group's name where the pattern
    /// declares one, `groupN` otherwise. Used as JSON keys when no header
    /// names are supplied.
    pub fn field_names(&self) -> Vec<String> {
        self.regex
            .capture_names()
            .skip(1)
            .enumerate()
            .map(|(i, name)| match name {
                Some(n) => n.to_string(),
                None => format!("group{}", i + 1),
            })
            .collect()
    }
}

/// The regex crate renders syntax errors as a multi-line diagnostic with a
/// caret. Keep only the final line so the report stays on one line.
fn compile_error_message(err: &regex::Error) -> String {
    let text = err.to_string();
    text.lines()
        .last()
        .unwrap_or(&text)
        .trim_start_matches("error: ")
        .to_string()
}
