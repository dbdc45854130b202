// Lyrical Lab flow analysis.
//
// Checks how well the rhythm of lyric lines lines up: every line becomes a
// sequence of stressed/unstressed syllables, the sequences are compared
// column by column, and the result is a per-syllable annotation plus an
// overall alignment score. The engine is pure and synchronous; rendering the
// annotation (colors, markup) is left to the caller.
//
// Architecture:
// - stress.rs: `StressSymbol`, `StressPattern`, and `StressClassifier`
//   (word -> pattern via phonetic lookup with hyphenation fallback)
// - pattern.rs: Line -> concatenated word patterns
// - alignment.rs: Column verdicts and the alignment score (min-length scoring,
//   max-length verdicts)
// - annotate.rs: Per-syllable `Segment` tags for a renderer
// - report.rs: `FlowReport` / `FlowOutcome` / `LineSyllables`, serializable
// - analyzer.rs: `FlowAnalyzer` facade (selection splitting, validation,
//   syllable counts, parallel stanza analysis)
// - config.rs: `FlowConfig`, loaded from JSON
// - error.rs: `FlowError` for setup failures
// - main.rs: `flow` CLI binary
//
// Word data (pronouncing dictionary, hyphenation, caching) lives in the
// `lyrical_lab_lexicon` crate.

pub mod alignment;
pub mod analyzer;
pub mod annotate;
pub mod config;
pub mod error;
pub mod pattern;
pub mod report;
pub mod stress;

pub use alignment::{AlignmentColumn, ColumnVerdict};
pub use analyzer::{ConfiguredAnalyzer, FlowAnalyzer, split_lines};
pub use annotate::{AnnotatedLine, Segment, SegmentClass};
pub use config::FlowConfig;
pub use error::FlowError;
pub use report::{FlowOutcome, FlowReport, LineSyllables};
pub use stress::{StressClassifier, StressPattern, StressSymbol};
