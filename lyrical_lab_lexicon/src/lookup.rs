// Lookup traits: the seams between the flow engine and its word data.
//
// `PhoneticLookup` answers "how is this word pronounced?" with zero or more
// pronunciations in the backing store's own order. `Hyphenator` answers "how
// many syllables does this word have?" for words the phonetic lookup does not
// know. Both may be backed by something slow or fallible (a large file, a
// network dictionary), so both return `Result`; the flow engine absorbs the
// error per word rather than failing a whole analysis.
//
// Both traits require `Send + Sync` so one analyzer can be shared across
// worker threads.

use crate::types::Pronunciation;
use std::sync::Arc;
use thiserror::Error;

/// A lookup collaborator could not answer.
#[derive(Debug, Clone, Error)]
pub enum LookupError {
    #[error("{source_name} unavailable: {message}")]
    Unavailable {
        source_name: &'static str,
        message: String,
    },
}

impl LookupError {
    pub fn unavailable(source_name: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Unavailable {
            source_name,
            message: err.to_string(),
        }
    }
}

/// Word -> ordered pronunciations. Callers pass lowercase words.
///
/// An empty `Ok` vector means "unknown word", not a failure.
pub trait PhoneticLookup: Send + Sync {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError>;
}

/// Word -> syllable count. May be 0 for degenerate input.
pub trait Hyphenator: Send + Sync {
    fn syllable_count(&self, word: &str) -> Result<usize, LookupError>;
}

impl<T: PhoneticLookup + ?Sized> PhoneticLookup for Arc<T> {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError> {
        (**self).phones_for_word(word)
    }
}

impl<T: PhoneticLookup + ?Sized> PhoneticLookup for &T {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError> {
        (**self).phones_for_word(word)
    }
}

impl<T: PhoneticLookup + ?Sized> PhoneticLookup for Box<T> {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError> {
        (**self).phones_for_word(word)
    }
}

impl<T: Hyphenator + ?Sized> Hyphenator for Arc<T> {
    fn syllable_count(&self, word: &str) -> Result<usize, LookupError> {
        (**self).syllable_count(word)
    }
}

impl<T: Hyphenator + ?Sized> Hyphenator for &T {
    fn syllable_count(&self, word: &str) -> Result<usize, LookupError> {
        (**self).syllable_count(word)
    }
}

impl<T: Hyphenator + ?Sized> Hyphenator for Box<T> {
    fn syllable_count(&self, word: &str) -> Result<usize, LookupError> {
        (**self).syllable_count(word)
    }
}
