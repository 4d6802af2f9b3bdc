// src/lib.rs
pub mod config;
pub mod error;
pub mod extract;
pub mod matcher;
pub mod pattern;
pub mod router;
pub mod sink;
pub mod strategy;

pub use config::{resolve_destinations, validate_sources};
pub use error::RunError;
pub use extract::{build_records, extract_source, ExtractStats, SourceRecords};
pub use matcher::{FailurePolicy, LineMatcher, MatchOutcome, Record};
pub use pattern::Pattern;
pub use router::route_outputs;
pub use sink::{write_records, OutputFormat};
pub use strategy::MatchStrategy;
