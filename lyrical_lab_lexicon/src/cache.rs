// Memoizing wrapper for phonetic lookups.
//
// A lyric selection repeats words constantly ("the", "I", the chorus hook),
// and a backing lookup may be slow (large file scan, network dictionary).
// `CachedLookup` puts a bounded moka cache in front of any `PhoneticLookup`.
// moka's sync cache is internally synchronized, so one `CachedLookup` can be
// read from many analyzer threads at once without extra locking.
//
// Only successful answers are cached, including "unknown word" (an empty
// list). Failures are passed through uncached so a transient outage does not
// pin a word to the unknown path.

use crate::lookup::{LookupError, PhoneticLookup};
use crate::types::Pronunciation;
use moka::sync::Cache;

/// A `PhoneticLookup` that remembers answers from its inner lookup.
pub struct CachedLookup<L> {
    inner: L,
    cache: Cache<String, Vec<Pronunciation>>,
}

impl<L: PhoneticLookup> CachedLookup<L> {
    /// Wrap `inner`, remembering up to `capacity` words.
    pub fn new(inner: L, capacity: u64) -> Self {
        CachedLookup {
            inner,
            cache: Cache::new(capacity),
        }
    }

    /// The wrapped lookup.
    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Whether `word` currently has a cached answer.
    pub fn is_cached(&self, word: &str) -> bool {
        self.cache.contains_key(word)
    }

    /// Drop every cached answer.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}

impl<L: PhoneticLookup> PhoneticLookup for CachedLookup<L> {
    fn phones_for_word(&self, word: &str) -> Result<Vec<Pronunciation>, LookupError> {
        if let Some(hit) = self.cache.get(word) {
            return Ok(hit);
        }
        let answer = self.inner.phones_for_word(word)?;
        self.cache.insert(word.to_string(), answer.clone());
        Ok(answer)
    }
}

impl<L> std::fmt::Debug for CachedLookup<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedLookup")
            .field("entries", &self.cache.entry_count())
            .finish_non_exhaustive()
    }
}
