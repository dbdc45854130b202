// Stress classification: words -> per-syllable stress symbols.
//
// The classifier is the only place the flow engine touches its collaborators.
// For each word it asks the phonetic lookup first and takes the first
// pronunciation it is given (the lookup's own order is the ranking; there is
// no tie-breaking here). Primary and secondary stress both map to `Stressed`,
// no stress maps to `Unstressed`. Words the lookup does not know fall back to
// the hyphenator, which only knows how many syllables there are, so each of
// those syllables becomes `Unknown`.
//
// Collaborator failures never escape. A failed phonetic lookup is treated as
// "no entry" and takes the hyphenation path; a failed hyphenation yields one
// `Unknown` for a non-empty token. Either way the rest of the batch carries on.
//
// `StressPattern` is the sequence type for both a single word and a whole
// line (`pattern.rs` concatenates word patterns). Its compact text form uses
// one glyph per syllable: `S` stressed, `u` unstressed, `?` unknown.

use std::fmt;
use std::str::FromStr;

use lyrical_lab_lexicon::{Hyphenator, PhoneticLookup, StressLevel};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Classification of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressSymbol {
    Stressed,
    Unstressed,
    /// Syllable of a word with no phonetic entry.
    Unknown,
}

impl StressSymbol {
    pub fn glyph(self) -> char {
        match self {
            StressSymbol::Stressed => 'S',
            StressSymbol::Unstressed => 'u',
            StressSymbol::Unknown => '?',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            'S' => Some(StressSymbol::Stressed),
            'u' => Some(StressSymbol::Unstressed),
            '?' => Some(StressSymbol::Unknown),
            _ => None,
        }
    }
}

impl From<StressLevel> for StressSymbol {
    fn from(level: StressLevel) -> Self {
        if level.is_stressed() {
            StressSymbol::Stressed
        } else {
            StressSymbol::Unstressed
        }
    }
}

/// Ordered stress symbols, one per syllable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StressPattern {
    symbols: Vec<StressSymbol>,
}

impl StressPattern {
    pub fn new() -> Self {
        Self::default()
    }

    /// `count` copies of `Unknown`.
    pub fn unknown(count: usize) -> Self {
        StressPattern {
            symbols: vec![StressSymbol::Unknown; count],
        }
    }

    /// Number of syllables.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<StressSymbol> {
        self.symbols.get(index).copied()
    }

    pub fn symbols(&self) -> &[StressSymbol] {
        &self.symbols
    }

    pub fn iter(&self) -> impl Iterator<Item = StressSymbol> + '_ {
        self.symbols.iter().copied()
    }

    pub fn push(&mut self, symbol: StressSymbol) {
        self.symbols.push(symbol);
    }

    /// Append another pattern's symbols (no separator).
    pub fn append(&mut self, other: &StressPattern) {
        self.symbols.extend_from_slice(&other.symbols);
    }

    /// True if no syllable is `Unknown`.
    pub fn is_fully_known(&self) -> bool {
        !self.symbols.contains(&StressSymbol::Unknown)
    }
}

impl From<Vec<StressSymbol>> for StressPattern {
    fn from(symbols: Vec<StressSymbol>) -> Self {
        StressPattern { symbols }
    }
}

impl FromIterator<StressSymbol> for StressPattern {
    fn from_iter<I: IntoIterator<Item = StressSymbol>>(iter: I) -> Self {
        StressPattern {
            symbols: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for StressPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{}", symbol.glyph())?;
        }
        Ok(())
    }
}

/// A character outside `S`, `u`, `?` in a compact pattern string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid stress glyph {glyph:?} at position {position}")]
pub struct ParsePatternError {
    pub glyph: char,
    pub position: usize,
}

impl FromStr for StressPattern {
    type Err = ParsePatternError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.chars()
            .enumerate()
            .map(|(position, glyph)| {
                StressSymbol::from_glyph(glyph).ok_or(ParsePatternError { glyph, position })
            })
            .collect()
    }
}

impl Serialize for StressPattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StressPattern {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Word -> `StressPattern` using a phonetic lookup with hyphenation fallback.
#[derive(Debug, Clone)]
pub struct StressClassifier<L, H> {
    lookup: L,
    hyphenator: H,
    trim_punctuation: bool,
}

impl<L: PhoneticLookup, H: Hyphenator> StressClassifier<L, H> {
    pub fn new(lookup: L, hyphenator: H) -> Self {
        StressClassifier {
            lookup,
            hyphenator,
            trim_punctuation: false,
        }
    }

    /// Strip leading/trailing punctuation from tokens before lookup. Off by
    /// default, so "light," is looked up as-is.
    pub fn with_trim_punctuation(mut self, trim: bool) -> Self {
        self.trim_punctuation = trim;
        self
    }

    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Classify one word token.
    pub fn classify(&self, word: &str) -> StressPattern {
        let token = if self.trim_punctuation {
            trim_token(word)
        } else {
            word
        };
        let key = token.to_lowercase();

        let pronunciations = match self.lookup.phones_for_word(&key) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(word = %key, error = %err, "phonetic lookup failed; using fallback");
                Vec::new()
            }
        };

        if let Some(first) = pronunciations.first() {
            let pattern: StressPattern = first.stress_levels().map(StressSymbol::from).collect();
            tracing::debug!(word = %key, phones = %first, pattern = %pattern, "dictionary hit");
            return pattern;
        }

        match self.hyphenator.syllable_count(&key) {
            Ok(count) => {
                tracing::debug!(word = %key, syllables = count, "hyphenation fallback");
                StressPattern::unknown(count)
            }
            Err(err) => {
                tracing::warn!(word = %key, error = %err, "hyphenation failed");
                StressPattern::unknown(usize::from(!key.is_empty()))
            }
        }
    }
}

/// Trim non-alphanumeric characters from both ends, keeping inner
/// apostrophes ("don't", "lovin'" -> "lovin").
fn trim_token(word: &str) -> &str {
    word.trim_matches(|c: char| !c.is_alphanumeric())
}
