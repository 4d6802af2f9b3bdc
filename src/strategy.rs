use crate::error::RunError;
use crate::pattern::Pattern;
use regex::{Captures, Regex};

/// How much of a line the pattern must account for to count as a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MatchStrategy {
    /// The pattern must consume the entire line.
    #[default]
    Full,
    /// The pattern must match starting at the first character; trailing
    /// characters are ignored.
    Prefix,
    /// The pattern may match anywhere in the line.
    Search,
}

impl MatchStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            MatchStrategy::Full => "full",
            MatchStrategy::Prefix => "prefix",
            MatchStrategy::Search => "search",
        }
    }

    /// Compile the strategy-enforcing form of an already validated pattern.
    ///
    /// Anchoring is done by wrapping the pattern in a non-capturing group so
    /// the engine searches under the anchors itself (position checks on an
    /// unanchored leftmost match would reject lines like "ab" against
    /// `a|ab` under Full). Group numbering is unaffected.
    pub fn compile(&self, pattern: &Pattern) -> Result<Regex, RunError> {
        let anchored = match self {
            MatchStrategy::Full => format!("^(?:{})$", pattern.text()),
            MatchStrategy::Prefix => format!("^(?:{})", pattern.text()),
            MatchStrategy::Search => pattern.text().to_string(),
        };
        Regex::new(&anchored).map_err(|e| RunError::InvalidPattern {
            pattern: pattern.text().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply a strategy-compiled regex to one line.
    pub fn apply<'t>(&self, regex: &Regex, line: &'t str) -> Option<Captures<'t>> {
        regex.captures(line)
    }
}
