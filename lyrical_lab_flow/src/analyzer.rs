// Flow analysis facade: the entry point a lyric editor calls.
//
// `FlowAnalyzer` owns a `StressClassifier` and runs the whole pipeline over a
// batch of lines:
//
//   lines -> per-line patterns (pattern.rs) -> column verdicts + annotation
//   (alignment.rs, annotate.rs) -> score (alignment.rs) -> FlowOutcome
//
// Validation happens here because this is what runs on a user's selection:
// an empty selection, or one made only of blank lines, is reported as
// `FlowOutcome::EmptySelection` rather than as an empty report. Blank lines
// inside a real selection stay in the report (so rows match the editor) and
// take part in scoring with their empty pattern, which truncates the score
// to zero columns. They do not count toward the two lines a score needs, so
// a selection with a single non-blank line gets no score at all.
//
// The analyzer holds no mutable state. With `Send + Sync` collaborators it
// can be shared across threads, which `analyze_stanzas()` relies on to run
// stanzas in parallel on the rayon pool.

use lyrical_lab_lexicon::{
    CachedLookup, Hyphenator, PhoneticLookup, PronouncingDictionary, VowelGroupHyphenator,
    default_dictionary,
};
use rayon::prelude::*;

use crate::alignment::score;
use crate::annotate::annotate;
use crate::config::FlowConfig;
use crate::error::FlowError;
use crate::pattern::build_pattern;
use crate::report::{FlowOutcome, FlowReport, LineSyllables};
use crate::stress::{StressClassifier, StressPattern};

/// Analyzer type produced by `ConfiguredAnalyzer::from_config()`.
pub type ConfiguredAnalyzer = FlowAnalyzer<Box<dyn PhoneticLookup>, VowelGroupHyphenator>;

/// Runs flow analysis over batches of lines.
#[derive(Debug, Clone)]
pub struct FlowAnalyzer<L, H> {
    classifier: StressClassifier<L, H>,
}

impl<L: PhoneticLookup, H: Hyphenator> FlowAnalyzer<L, H> {
    pub fn new(lookup: L, hyphenator: H) -> Self {
        Self::with_classifier(StressClassifier::new(lookup, hyphenator))
    }

    pub fn with_classifier(classifier: StressClassifier<L, H>) -> Self {
        FlowAnalyzer { classifier }
    }

    pub fn classifier(&self) -> &StressClassifier<L, H> {
        &self.classifier
    }

    /// Stress pattern of a single line.
    pub fn pattern(&self, line: &str) -> StressPattern {
        build_pattern(&self.classifier, line)
    }

    /// Analyze a batch of lines.
    pub fn analyze<S: AsRef<str>>(&self, lines: &[S]) -> FlowOutcome {
        if lines.iter().all(|l| is_blank(l.as_ref())) {
            return FlowOutcome::EmptySelection;
        }

        let patterns: Vec<StressPattern> = lines.iter().map(|l| self.pattern(l.as_ref())).collect();
        let annotated = annotate(&patterns, lines);

        let non_blank = lines.iter().filter(|l| !is_blank(l.as_ref())).count();
        let score = if non_blank < 2 { None } else { score(&patterns) };

        tracing::debug!(
            lines = lines.len(),
            non_blank,
            score = ?score,
            "flow analysis complete"
        );

        FlowOutcome::Analyzed(FlowReport {
            lines: annotated,
            score,
        })
    }

    /// Analyze raw selected text, splitting it into lines first.
    pub fn analyze_selection(&self, raw: &str) -> FlowOutcome {
        self.analyze(&split_lines(raw))
    }

    /// Syllable count of every line of `raw`, blank lines included.
    pub fn syllable_counts(&self, raw: &str) -> Vec<LineSyllables> {
        split_lines(raw)
            .into_iter()
            .map(|line| LineSyllables {
                line: line.to_string(),
                syllables: self.pattern(line).len(),
            })
            .collect()
    }

    /// Split a whole lyric into stanzas (runs of non-blank lines) and analyze
    /// each on its own, in parallel. Returns one outcome per stanza in text
    /// order; text with no non-blank lines yields no stanzas.
    pub fn analyze_stanzas(&self, raw: &str) -> Vec<FlowOutcome> {
        let stanzas = split_stanzas(raw);
        stanzas
            .par_iter()
            .map(|stanza| self.analyze(stanza))
            .collect()
    }
}

impl FlowAnalyzer<Box<dyn PhoneticLookup>, VowelGroupHyphenator> {
    /// Build an analyzer from config: dictionary (embedded excerpt unless a
    /// path is given), optional lookup cache, locale hyphenator.
    pub fn from_config(config: &FlowConfig) -> Result<ConfiguredAnalyzer, FlowError> {
        let hyphenator = VowelGroupHyphenator::for_locale(&config.locale)?;
        let dictionary = match &config.dictionary_path {
            Some(path) => PronouncingDictionary::load(path)?,
            None => default_dictionary(),
        };
        let lookup: Box<dyn PhoneticLookup> = if config.cache_capacity > 0 {
            Box::new(CachedLookup::new(dictionary, config.cache_capacity))
        } else {
            Box::new(dictionary)
        };
        let classifier =
            StressClassifier::new(lookup, hyphenator).with_trim_punctuation(config.trim_punctuation);
        Ok(FlowAnalyzer::with_classifier(classifier))
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Characters treated as line boundaries, including the paragraph separator
/// (U+2029) that rich-text editors put between lines of a selection.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Split text into lines on any line break. `\r\n` counts as one break, and a
/// trailing break does not produce a final empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + c.len_utf8();
        if c == '\r' && matches!(chars.peek(), Some(&(_, '\n'))) {
            chars.next();
            end += 1;
        }
        start = end;
    }
    if start < text.len() {
        lines.push(&text[start..]);
    }
    lines
}

/// Group lines into stanzas separated by one or more blank lines.
fn split_stanzas(text: &str) -> Vec<Vec<&str>> {
    let mut stanzas = Vec::new();
    let mut current = Vec::new();
    for line in split_lines(text) {
        if is_blank(line) {
            if !current.is_empty() {
                stanzas.push(std::mem::take(&mut current));
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        stanzas.push(current);
    }
    stanzas
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::SegmentClass;

    fn analyzer() -> FlowAnalyzer<PronouncingDictionary, VowelGroupHyphenator> {
        let dict = PronouncingDictionary::from_cmudict(
            "i  AY1\nam  AH0 M\nhere  HH IY1 R\nhave  HH AE1 V\nno  N OW0\nfear  F IH1 R\n\
             all  AO1 L\nis  IH0 Z\nclear  K L IH1 R\n",
        )
        .unwrap();
        FlowAnalyzer::new(dict, VowelGroupHyphenator)
    }

    #[test]
    fn test_split_lines_breaks() {
        assert_eq!(split_lines("a\nb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b"]);
        assert_eq!(split_lines("a\rb"), vec!["a", "b"]);
        assert_eq!(split_lines("a\u{2029}b\u{2029}c"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn test_split_stanzas() {
        let stanzas = split_stanzas("a\nb\n\n  \nc\n");
        assert_eq!(stanzas, vec![vec!["a", "b"], vec!["c"]]);
        assert!(split_stanzas("\n\n").is_empty());
    }

    #[test]
    fn test_empty_selection() {
        let a = analyzer();
        let none: [&str; 0] = [];
        assert!(a.analyze(&none).is_empty_selection());
        assert!(a.analyze(&[""]).is_empty_selection());
        assert!(a.analyze(&["  ", "\t"]).is_empty_selection());
        assert!(a.analyze_selection("").is_empty_selection());
        assert!(a.analyze_selection(" \n \u{2029} ").is_empty_selection());
    }

    #[test]
    fn test_identical_lines_score_one() {
        let a = analyzer();
        let outcome = a.analyze(&["I am here", "Have no fear", "All is clear"]);
        let report = outcome.report().unwrap();
        assert_eq!(report.score, Some(1.0));
        assert_eq!(report.lines.len(), 3);
        for line in &report.lines {
            assert_eq!(line.glyphs(), "SuS");
        }
    }

    #[test]
    fn test_single_line_has_no_score() {
        let a = analyzer();
        let report = a.analyze(&["I am here"]).into_report().unwrap();
        assert_eq!(report.score, None);
        assert_eq!(report.lines[0].glyphs(), "SuS");
    }

    #[test]
    fn test_blank_lines_kept_and_scored() {
        let a = analyzer();
        let report = a.analyze_selection("I am here\n\n").into_report().unwrap();
        // Trailing break does not add a line; the inner blank line stays.
        assert_eq!(report.lines.len(), 2);
        assert_eq!(report.score, None);
        assert!(
            report.lines[1]
                .segments
                .iter()
                .all(|s| s.class == SegmentClass::Padding)
        );

        let report = a
            .analyze_selection("I am here\n\nHave no fear")
            .into_report()
            .unwrap();
        assert_eq!(report.lines.len(), 3);
        // The blank line's empty pattern leaves no common columns.
        assert_eq!(report.score, Some(0.0));
    }

    #[test]
    fn test_blank_line_score_matches_per_line_patterns() {
        let a = analyzer();
        let lines = ["I am here", "", "Have no fear"];
        let patterns: Vec<StressPattern> = lines.iter().map(|l| a.pattern(l)).collect();
        let report = a.analyze(&lines).into_report().unwrap();
        assert_eq!(report.score, score(&patterns));
        assert_eq!(report.score, Some(0.0));

        // A blank line alongside one real line still has nothing to align.
        let report = a.analyze(&["", "I am here", "  "]).into_report().unwrap();
        assert_eq!(report.score, None);
    }

    #[test]
    fn test_syllable_counts() {
        let a = analyzer();
        let counts = a.syllable_counts("I am here\n\nglimmering");
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].syllables, 3);
        assert_eq!(counts[1].syllables, 0);
        assert_eq!(counts[2].line, "glimmering");
        assert_eq!(counts[2].syllables, 3);
    }

    #[test]
    fn test_analyze_stanzas_in_order() {
        let a = analyzer();
        let outcomes = a.analyze_stanzas("I am here\nHave no fear\n\nAll is clear\n");
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].report().unwrap().score, Some(1.0));
        let second = outcomes[1].report().unwrap();
        assert_eq!(second.lines[0].line, "All is clear");
        assert_eq!(second.score, None);
        assert!(a.analyze_stanzas("\n \n").is_empty());
    }

    #[test]
    fn test_from_default_config() {
        let a = ConfiguredAnalyzer::from_config(&FlowConfig::default()).unwrap();
        assert_eq!(a.pattern("a shadow falls").to_string(), "uSuS");
    }

    #[test]
    fn test_from_config_without_cache_and_with_trimming() {
        let config = FlowConfig {
            cache_capacity: 0,
            trim_punctuation: true,
            ..FlowConfig::default()
        };
        let a = ConfiguredAnalyzer::from_config(&config).unwrap();
        assert_eq!(a.pattern("shadow, falls!").to_string(), "SuS");
    }

    #[test]
    fn test_from_config_rejects_unknown_locale() {
        let config = FlowConfig {
            locale: "fr".to_string(),
            ..FlowConfig::default()
        };
        let Err(err) = ConfiguredAnalyzer::from_config(&config) else {
            panic!("expected an unsupported locale error");
        };
        assert!(matches!(err, FlowError::Lexicon(_)));
    }
}
