// Lyrical Lab lexicon crate: the word-level collaborators of the flow engine.
//
// Provides the two lookups the flow analyzer in `lyrical_lab_flow` needs to
// turn words into syllable stress: a pronouncing dictionary (CMUdict format)
// and a hyphenation fallback for words the dictionary does not know. No UI
// or network dependencies.
//
// Architecture:
// - `types.rs`: Core types: `StressLevel`, `Pronunciation`
// - `lookup.rs`: The `PhoneticLookup` / `Hyphenator` traits and `LookupError`
// - `dictionary.rs`: `PronouncingDictionary`: CMUdict parser and in-memory table
// - `hyphenate.rs`: `VowelGroupHyphenator`: rule-based syllable counter for `en`
// - `cache.rs`: `CachedLookup`: thread-safe memoizing wrapper around any lookup
// - `error.rs`: `LexiconError` for loading/parsing failures
// - `lib.rs` (this file): re-exports and `default_dictionary()`
//
// The default dictionary is an excerpt of CMUdict embedded at compile time via
// `include_str!` and parsed by `default_dictionary()`. Callers that need the full
// dictionary load it from disk with `PronouncingDictionary::load()`.

pub mod cache;
pub mod dictionary;
pub mod error;
pub mod hyphenate;
pub mod lookup;
pub mod types;

// Re-export key types at crate root for convenience.
pub use cache::CachedLookup;
pub use dictionary::PronouncingDictionary;
pub use error::LexiconError;
pub use hyphenate::VowelGroupHyphenator;
pub use lookup::{Hyphenator, LookupError, PhoneticLookup};
pub use types::{Pronunciation, StressLevel};

/// Load the default pronouncing dictionary embedded at compile time.
///
/// Uses `include_str!` to embed `data/cmudict_excerpt.dict`. Panics if the
/// embedded file is malformed (should never happen in a released build).
pub fn default_dictionary() -> PronouncingDictionary {
    let text = include_str!("../../data/cmudict_excerpt.dict");
    PronouncingDictionary::from_cmudict(text).expect("embedded cmudict_excerpt.dict is malformed")
}
