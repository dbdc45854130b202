// Hyphenation fallback: syllable counts for words missing from the dictionary.
//
// The flow engine only needs a count for unknown words (it has no stress
// information for them anyway), so this is a counting heuristic rather than a
// full pattern-based hyphenator. For English it counts vowel groups and then
// corrects for the common silent endings:
//
// - silent final `e` after a consonant ("make" = 1), except consonant + `le`
//   ("table" = 2)
// - `-ed` after anything but `t`/`d` ("walked" = 1, "wanted" = 2)
// - `-es` after a consonant that does not sibilate ("makes" = 1,
//   "horses" = 2, "wishes" = 2, "changes" = 2)
//
// Only letters are counted, so attached punctuation ("light,") does not
// change the count. A token with no letters at all is degenerate and counts
// as zero syllables; any token with a letter counts at least one.

use crate::error::LexiconError;
use crate::lookup::{Hyphenator, LookupError};

/// Rule-based English syllable counter.
#[derive(Debug, Clone, Copy, Default)]
pub struct VowelGroupHyphenator;

impl VowelGroupHyphenator {
    /// Hyphenator for a locale tag. Only English (`en`, `en_US`, `en-GB`, ...)
    /// is supported.
    pub fn for_locale(locale: &str) -> Result<Self, LexiconError> {
        let lower = locale.to_ascii_lowercase();
        let is_english = lower == "en" || lower.starts_with("en_") || lower.starts_with("en-");
        if is_english {
            Ok(VowelGroupHyphenator)
        } else {
            Err(LexiconError::UnsupportedLocale(locale.to_string()))
        }
    }

    /// Count syllables in `word`. Never fails.
    pub fn count(&self, word: &str) -> usize {
        let letters: Vec<char> = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        if letters.is_empty() {
            return 0;
        }

        let mut groups = 0;
        let mut in_vowel = false;
        for vowel in (0..letters.len()).map(|i| is_vowel_at(&letters, i)) {
            if vowel && !in_vowel {
                groups += 1;
            }
            in_vowel = vowel;
        }

        if groups > 1 && silent_ending(&letters) {
            groups -= 1;
        }
        groups.max(1)
    }
}

impl Hyphenator for VowelGroupHyphenator {
    fn syllable_count(&self, word: &str) -> Result<usize, LookupError> {
        Ok(self.count(word))
    }
}

const VOWELS: &str = "aeiouàáâäæèéêëìíîïòóôöøùúûü";

/// `y` is a vowel except word-initially ("yes" vs "rhythm").
fn is_vowel_at(letters: &[char], i: usize) -> bool {
    let c = letters[i];
    VOWELS.contains(c) || (c == 'y' && i > 0)
}

fn is_consonant_at(letters: &[char], i: usize) -> bool {
    !is_vowel_at(letters, i)
}

/// Whether the word ends in a vowel letter that is not pronounced.
fn silent_ending(letters: &[char]) -> bool {
    let n = letters.len();
    if n < 3 {
        return false;
    }
    let last = letters[n - 1];
    let prev = letters[n - 2];
    let before = letters[n - 3];

    match (prev, last) {
        (_, 'e') => {
            let consonant_le = prev == 'l' && is_consonant_at(letters, n - 3);
            is_consonant_at(letters, n - 2) && !consonant_le
        }
        ('e', 'd') => is_consonant_at(letters, n - 3) && before != 't' && before != 'd',
        ('e', 's') => {
            let sibilant = matches!(before, 's' | 'x' | 'z' | 'c' | 'g')
                || (n >= 4 && matches!((letters[n - 4], before), ('c', 'h') | ('s', 'h')));
            is_consonant_at(letters, n - 3) && !sibilant
        }
        _ => false,
    }
}
