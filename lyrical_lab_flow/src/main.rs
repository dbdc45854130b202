// Lyrical Lab flow checker: CLI entry point.
//
// Reads lyric text (a file, or stdin when no file is given), runs flow
// analysis over it, and prints the annotated stress patterns and alignment
// score. Each output line pair shows the lyric line and its pattern, one glyph
// per syllable: `S` stressed, `u` unstressed, `?` unknown word, blank for
// padding.
//
// Usage:
//   flow [FILE] [--config PATH] [--dictionary PATH] [--trim-punctuation]
//        [--json] [--stanzas] [--syllables]
//
// Logging goes to stderr and is controlled by RUST_LOG
// (default: info for the flow and lexicon crates).

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use lyrical_lab_flow::{ConfiguredAnalyzer, FlowConfig, FlowOutcome, LineSyllables};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Command-line arguments for `flow`.
#[derive(Parser, Debug)]
#[command(name = "flow")]
#[command(about = "Check the stress-pattern flow of lyric lines")]
#[command(version)]
struct Args {
    /// Lyric text file; reads stdin when omitted or "-"
    input: Option<PathBuf>,

    /// JSON config file
    #[arg(short, long, env = "LYRICAL_LAB_FLOW_CONFIG")]
    config: Option<PathBuf>,

    /// CMUdict (or JSON) pronouncing dictionary, overrides the config
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Strip punctuation around words before lookup
    #[arg(long)]
    trim_punctuation: bool,

    /// Print machine-readable JSON
    #[arg(long)]
    json: bool,

    /// Analyze each blank-line-separated stanza separately
    #[arg(long, conflicts_with = "syllables")]
    stanzas: bool,

    /// Print per-line syllable counts instead of flow analysis
    #[arg(long)]
    syllables: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "flow=info,lyrical_lab_flow=info,lyrical_lab_lexicon=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => FlowConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FlowConfig::default(),
    };
    if let Some(path) = &args.dictionary {
        config.dictionary_path = Some(path.clone());
    }
    if args.trim_punctuation {
        config.trim_punctuation = true;
    }

    let analyzer =
        ConfiguredAnalyzer::from_config(&config).context("Failed to build flow analyzer")?;
    let text = read_input(args.input.as_ref())?;
    info!(bytes = text.len(), "analyzing input");

    if args.syllables {
        let counts = analyzer.syllable_counts(&text);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&counts)?);
        } else {
            print_syllables(&counts);
        }
    } else if args.stanzas {
        let outcomes = analyzer.analyze_stanzas(&text);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcomes)?);
        } else if outcomes.is_empty() {
            println!("No text selected.");
        } else {
            for (i, outcome) in outcomes.iter().enumerate() {
                println!("== Stanza {} ==", i + 1);
                print_outcome(outcome);
            }
        }
    } else {
        let outcome = analyzer.analyze_selection(&text);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        } else {
            print_outcome(&outcome);
        }
    }

    Ok(())
}

fn read_input(path: Option<&PathBuf>) -> Result<String> {
    match path {
        Some(p) if p.as_os_str() != "-" => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read {}", p.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_outcome(outcome: &FlowOutcome) {
    let Some(report) = outcome.report() else {
        println!("No text selected.");
        return;
    };
    for line in &report.lines {
        println!("{}", line.line);
        println!("{}", line.glyphs().trim_end());
        println!();
    }
    if let Some(score) = report.score {
        println!("Flow Alignment Score: {score:.2}");
    }
}

fn print_syllables(counts: &[LineSyllables]) {
    for entry in counts {
        println!("{}({})", entry.line, entry.syllables);
    }
}
