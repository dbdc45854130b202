// Core lexicon types: per-syllable stress levels and pronunciations.
//
// A `Pronunciation` is a CMUdict phone string such as `S AH1 N L AY2 T`.
// Vowel phones carry a trailing stress digit (0 = none, 1 = primary,
// 2 = secondary); consonant phones carry none. The digit sequence is the
// word's stress string, one digit per syllable, which is all the flow
// engine reads from it.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lexical stress level of one syllable, as encoded by a vowel phone's digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StressLevel {
    /// Digit `0`.
    None,
    /// Digit `1`.
    Primary,
    /// Digit `2`.
    Secondary,
}

impl StressLevel {
    /// Parse a stress digit. Returns `None` for any other character.
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '0' => Some(StressLevel::None),
            '1' => Some(StressLevel::Primary),
            '2' => Some(StressLevel::Secondary),
            _ => None,
        }
    }

    /// The CMUdict digit for this level.
    pub fn digit(self) -> char {
        match self {
            StressLevel::None => '0',
            StressLevel::Primary => '1',
            StressLevel::Secondary => '2',
        }
    }

    /// Primary and secondary stress both count as stressed.
    pub fn is_stressed(self) -> bool {
        !matches!(self, StressLevel::None)
    }
}

/// One pronunciation of a word: space-separated ARPAbet phones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pronunciation {
    phones: String,
}

impl Pronunciation {
    /// Build a pronunciation from a phone string. Runs of whitespace are
    /// normalized to single spaces.
    pub fn new(phones: &str) -> Self {
        Pronunciation {
            phones: phones.split_whitespace().collect::<Vec<_>>().join(" "),
        }
    }

    /// The normalized phone string.
    pub fn phones(&self) -> &str {
        &self.phones
    }

    /// Stress levels in syllable order.
    pub fn stress_levels(&self) -> impl Iterator<Item = StressLevel> + '_ {
        self.phones.chars().filter_map(StressLevel::from_digit)
    }

    /// The stress digit string, e.g. `"12"` for `S AH1 N L AY2 T`.
    pub fn stresses(&self) -> String {
        self.stress_levels().map(StressLevel::digit).collect()
    }

    /// Number of syllables (vowel phones).
    pub fn syllable_count(&self) -> usize {
        self.stress_levels().count()
    }
}

impl fmt::Display for Pronunciation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.phones)
    }
}
