use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use logsift::{
    extract_source, resolve_destinations, route_outputs, validate_sources, FailurePolicy,
    LineMatcher, MatchStrategy, OutputFormat, Pattern, RunError,
};

#[derive(Parser)]
#[command(name = "logsift")]
#[command(about = "Extract structured records from text logs using regex capture groups")]
#[command(version)]
struct Args {
    /// Regex with capture groups; an inline expression or a path to a file
    /// containing the pattern text
    #[arg(value_name = "PATTERN")]
    pattern: String,

    /// One or more source log files
    #[arg(value_name = "SRC", required = true)]
    sources: Vec<PathBuf>,

    /// Destination file or directory (default: a sibling <src>.csv per source;
    /// a file path merges all sources into one output)
    #[arg(short = 'd', long = "dest", value_name = "DEST")]
    dest: Option<PathBuf>,

    /// Matching strategy
    #[arg(short = 's', long = "strategy", value_enum, default_value = "full")]
    strategy: MatchStrategy,

    /// Drop non-matching lines instead of failing the source
    #[arg(short = 'l', long = "lazy")]
    lazy: bool,

    /// Field names for the CSV header row / JSON object keys
    #[arg(short = 'n', long = "names", value_name = "NAME", num_args = 1..)]
    names: Vec<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value = "csv")]
    format: OutputFormat,

    /// Print the resolved configuration before processing
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} - {}", err.kind(), err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<ExitCode, RunError> {
    // Pre-flight validation in fixed order: pattern, sources, destinations.
    // Nothing is read for matching until all of it passes.
    let pattern = Pattern::resolve(&args.pattern)?;
    validate_sources(&args.sources)?;
    let dests = resolve_destinations(&args.sources, args.dest.as_deref(), args.format)?;

    let policy = FailurePolicy::from_lazy_flag(args.lazy);
    let names = resolve_names(&args, &pattern);

    if args.verbose {
        print_config(&args, &pattern, &dests, &names, policy);
    }

    let matcher = LineMatcher::new(&pattern, args.strategy, policy)?;

    // A strict-mode mismatch is isolated to its source: the source yields no
    // output, the error is reported, and the remaining sources still run.
    let mut match_failures = 0usize;
    let mut extracted = Vec::with_capacity(args.sources.len());
    for source in &args.sources {
        match extract_source(source, &matcher) {
            Ok(records) => {
                if args.verbose && records.stats.lines_dropped > 0 {
                    eprintln!(
                        "logsift: {}: dropped {} non-matching lines",
                        source.display(),
                        records.stats.lines_dropped
                    );
                }
                extracted.push(Some(records));
            }
            Err(err @ RunError::Match { .. }) => {
                eprintln!("{} - {}", err.kind(), err);
                match_failures += 1;
                extracted.push(None);
            }
            Err(err) => return Err(err),
        }
    }

    route_outputs(extracted, &dests, &names, args.format)?;

    if match_failures > 0 {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// JSON objects need keys even when `-n` is omitted; fall back to the
/// pattern's own group names. CSV simply gets no header row in that case.
fn resolve_names(args: &Args, pattern: &Pattern) -> Vec<String> {
    if args.names.is_empty() && args.format == OutputFormat::Json {
        pattern.field_names()
    } else {
        args.names.clone()
    }
}

fn print_config(
    args: &Args,
    pattern: &Pattern,
    dests: &[PathBuf],
    names: &[String],
    policy: FailurePolicy,
) {
    println!("regex:       {}", pattern.text());
    println!(
        "src:         {:?}",
        args.sources.iter().map(|p| p.display().to_string()).collect::<Vec<_>>()
    );
    println!(
        "dest:        {:?}",
        dests.iter().map(|p| p.display().to_string()).collect::<Vec<_>>()
    );
    println!("group names: {:?}", names);
    println!("policy:      {}", policy.name());
    println!("strategy:    {}", args.strategy.name());
}
