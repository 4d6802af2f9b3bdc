use crate::error::RunError;
use crate::pattern::Pattern;
use crate::strategy::MatchStrategy;
use regex::Regex;
use std::path::{Path, PathBuf};

/// One extracted record: one string field per capture group, in group
/// declaration order. Fields stay strings, no typing or coercion.
pub type Record = Vec<String>;

/// What to do with a line the pattern does not match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// A non-matching line is fatal for the source.
    #[default]
    Strict,
    /// Non-matching lines are dropped silently.
    Lazy,
}

impl FailurePolicy {
    pub fn from_lazy_flag(lazy: bool) -> Self {
        if lazy {
            FailurePolicy::Lazy
        } else {
            FailurePolicy::Strict
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FailurePolicy::Strict => "strict",
            FailurePolicy::Lazy => "lazy",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchOutcome {
    Record(Record),
    /// Lazy policy only: the line is dropped, not counted as an error.
    NoMatch,
}

/// Binds a compiled pattern, a matching strategy and a failure policy into
/// one line-in, fields-out function.
pub struct LineMatcher {
    regex: Regex,
    strategy: MatchStrategy,
    group_count: usize,
    policy: FailurePolicy,
}

impl LineMatcher {
    pub fn new(
        pattern: &Pattern,
        strategy: MatchStrategy,
        policy: FailurePolicy,
    ) -> Result<Self, RunError> {
        Ok(LineMatcher {
            regex: strategy.compile(pattern)?,
            strategy,
            group_count: pattern.group_count(),
            policy,
        })
    }

    pub fn group_count(&self) -> usize {
        self.group_count
    }

    /// Match one line (terminator already stripped).
    ///
    /// On success every capture group yields a field; groups that did not
    /// participate in the match yield an empty string, so the field count is
    /// fixed by the pattern, not by what matched.
    pub fn match_line(&self, line: &str, path: &Path) -> Result<MatchOutcome, RunError> {
        match self.strategy.apply(&self.regex, line) {
            Some(caps) => {
                let fields = caps
                    .iter()
                    .skip(1)
                    .map(|group| group.map_or("", |m| m.as_str()).to_string())
                    .collect();
                Ok(MatchOutcome::Record(fields))
            }
            None => match self.policy {
                FailurePolicy::Lazy => Ok(MatchOutcome::NoMatch),
                FailurePolicy::Strict => Err(RunError::Match {
                    path: PathBuf::from(path),
                    line: line.to_string(),
                }),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matcher(text: &str, strategy: MatchStrategy, policy: FailurePolicy) -> LineMatcher {
        let pattern = Pattern::compile(text.to_string()).unwrap();
        LineMatcher::new(&pattern, strategy, policy).unwrap()
    }

    #[test]
    fn record_has_one_field_per_group() {
        let m = matcher(r"(\w+)=(\d+)", MatchStrategy::Full, FailurePolicy::Strict);
        let outcome = m.match_line("x=5", Path::new("a.log")).unwrap();
        assert_eq!(outcome, MatchOutcome::Record(vec!["x".into(), "5".into()]));
        assert_eq!(m.group_count(), 2);
    }

    #[test]
    fn optional_group_yields_empty_field() {
        let m = matcher(r"(\w+)(:\d+)?", MatchStrategy::Full, FailurePolicy::Strict);
        let outcome = m.match_line("host", Path::new("a.log")).unwrap();
        assert_eq!(outcome, MatchOutcome::Record(vec!["host".into(), "".into()]));
    }

    #[test]
    fn lazy_drops_non_matching_line() {
        let m = matcher(r"(\d+)", MatchStrategy::Full, FailurePolicy::Lazy);
        let outcome = m.match_line("not a number", Path::new("a.log")).unwrap();
        assert_eq!(outcome, MatchOutcome::NoMatch);
    }

    #[test]
    fn strict_fails_with_line_content() {
        let m = matcher(r"(\d+)", MatchStrategy::Full, FailurePolicy::Strict);
        let err = m.match_line("not a number", Path::new("a.log")).unwrap_err();
        assert_eq!(err.kind(), "MatchError");
        assert!(err.to_string().contains("not a number"));
        assert!(err.to_string().contains("a.log"));
    }

    #[test]
    fn search_extracts_from_middle_of_line() {
        let m = matcher(r"(\w+)=(\d+)", MatchStrategy::Search, FailurePolicy::Strict);
        let outcome = m.match_line("x=5 extra", Path::new("a.log")).unwrap();
        assert_eq!(outcome, MatchOutcome::Record(vec!["x".into(), "5".into()]));
    }
}
