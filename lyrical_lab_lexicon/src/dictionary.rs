// Pronouncing dictionary: an in-memory word -> pronunciations table.
//
// Parses the CMU Pronouncing Dictionary text format:
//
//     ;;; comment line
//     shadow  SH AE1 D OW0
//     a  AH0
//     a(2)  EY1
//     nguyen  W IH1 N  # name
//
// Headwords are stored lowercase with the `(N)` variant marker stripped, so
// all variants of a word collect under one key in file order. File order is
// the ranking: the flow engine always takes the first pronunciation, so the
// parser must never reorder variants.
//
// A JSON form (`{"word": ["PH ON ES", ...]}`) is accepted too, for small
// hand-written tables such as test fixtures and user additions.

use crate::error::LexiconError;
use crate::lookup::{LookupError, PhoneticLookup};
use crate::types::Pronunciation;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::path::Path;

/// A loaded pronouncing dictionary.
#[derive(Debug, Clone, Default)]
pub struct PronouncingDictionary {
    entries: FxHashMap<String, Vec<Pronunciation>>,
}

impl PronouncingDictionary {
    /// An empty dictionary (every word unknown).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse CMUdict-format text.
    pub fn from_cmudict(text: &str) -> Result<Self, LexiconError> {
        let mut dict = Self::new();
        for (idx, raw) in text.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.split('#').next().unwrap_or("").trim();
            if line.is_empty() || line.starts_with(";;;") {
                continue;
            }
            let mut parts = line.split_whitespace();
            let Some(headword) = parts.next() else {
                continue;
            };
            let phones: Vec<&str> = parts.collect();
            if phones.is_empty() {
                return Err(LexiconError::parse(
                    line_no,
                    format!("missing phones for '{headword}'"),
                ));
            }
            let word = strip_variant(headword);
            if word.is_empty() {
                return Err(LexiconError::parse(line_no, "empty headword"));
            }
            dict.insert(word, Pronunciation::new(&phones.join(" ")));
        }
        Ok(dict)
    }

    /// Parse a JSON object mapping words to lists of phone strings.
    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        // BTreeMap keeps construction order independent of hash seeds.
        let table: BTreeMap<String, Vec<String>> = serde_json::from_str(json)
            .map_err(|e| LexiconError::json("parsing pronouncing dictionary", e))?;
        let mut dict = Self::new();
        for (word, variants) in table {
            for phones in variants {
                dict.insert(&word, Pronunciation::new(&phones));
            }
        }
        Ok(dict)
    }

    /// Load a dictionary file. `.json` files use the JSON form, anything
    /// else is read as CMUdict text.
    pub fn load(path: &Path) -> Result<Self, LexiconError> {
        let text = std::fs::read_to_string(path).map_err(|e| LexiconError::io(path, e))?;
        let dict = if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(&text)?
        } else {
            Self::from_cmudict(&text)?
        };
        tracing::info!(
            path = %path.display(),
            words = dict.len(),
            "loaded pronouncing dictionary"
        );
        Ok(dict)
    }

    /// Append a pronunciation for `word` after any existing ones.
    pub fn insert(&mut self, word: &str, pronunciation: Pronunciation) {
        self.entries
            .entry(word.to_lowercase())
            .or_default()
            .push(pronunciation);
    }

    /// Number of distinct headwords.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// Pronunciations for a lowercase word, in file order.
    pub fn get(&self, word: &str) -> &[Pronunciation] {
        self.entries.get(word).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl PhoneticLookup for PronouncingDictionary {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError> {
        Ok(self.get(word).to_vec())
    }
}

/// `word(2)` -> `word`. Headwords without a numeric suffix are returned as-is.
fn strip_variant(headword: &str) -> &str {
    match headword.rfind('(') {
        Some(open)
            if headword.ends_with(')')
                && headword[open + 1..headword.len() - 1]
                    .chars()
                    .all(|c| c.is_ascii_digit()) =>
        {
            &headword[..open]
        }
        _ => headword,
    }
}
