use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use turnsweep::{
    clean_document, load_phrase_file, parse_document_file, write_document_json, CleanerConfig,
    HumanTranscript, SectionScope,
};

#[derive(Parser)]
#[command(name = "turnsweep")]
#[command(author, version, about = "Remove conversational artifacts from a multi-speaker transcript", long_about = None)]
struct Cli {
    /// Input transcript file (JSON with transcript.sections[].turns)
    input: PathBuf,

    /// Output file for the cleaned transcript (JSON)
    output: PathBuf,

    /// Clean every section instead of only the first
    #[arg(long)]
    all_sections: bool,

    /// JSON file overriding the traffic, nonverbal and interjection phrase sets
    #[arg(long)]
    phrases: Option<PathBuf>,

    /// Turns shorter than this many seconds may be dropped as false starts
    #[arg(long, default_value = "3.0", value_parser = parse_seconds)]
    false_start_max_secs: f64,

    /// Output file for a human-readable rendering of the cleaned turns
    #[arg(long)]
    human_readable: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    run(cli)
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn run(cli: Cli) -> Result<()> {
    let mut config = CleanerConfig {
        false_start_max_secs: cli.false_start_max_secs,
        ..Default::default()
    };
    if let Some(path) = &cli.phrases {
        info!("Loading phrase sets from {:?}", path);
        config = load_phrase_file(path)?.apply(config);
    }

    info!("Loading transcript from {:?}", cli.input);
    let mut document =
        parse_document_file(&cli.input).context("Failed to parse input transcript")?;

    let scope = if cli.all_sections {
        SectionScope::All
    } else {
        SectionScope::First
    };
    let outcome = clean_document(&mut document, &config, scope)
        .with_context(|| format!("Failed to clean {:?}", cli.input))?;

    write_document_json(&document, &cli.output)?;

    if let Some(path) = &cli.human_readable {
        HumanTranscript::new(&outcome.turns).write_file(path)?;
        info!("Human-readable output written to {:?}", path);
    }

    println!("Cleaned transcript saved to {}", cli.output.display());
    println!("Original turn count: {}", outcome.report.original_turns);
    println!("Cleaned turn count: {}", outcome.report.cleaned_turns);

    Ok(())
}

/// Parse a non-negative, finite number of seconds
fn parse_seconds(value: &str) -> Result<f64, String> {
    let secs: f64 = value
        .parse()
        .map_err(|_| format!("`{}` is not a number", value))?;
    if !secs.is_finite() || secs < 0.0 {
        return Err(format!("`{}` must be a finite, non-negative number of seconds", value));
    }
    Ok(secs)
}
