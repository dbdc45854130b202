// Line pattern building: a line of text -> one concatenated stress pattern.
//
// Words are whitespace-separated tokens (runs of whitespace collapse, leading
// and trailing whitespace is ignored). Punctuation stays attached to its
// token and goes to the classifier as-is; whether it is trimmed is the
// classifier's decision (see `StressClassifier::with_trim_punctuation`).
// Word patterns are concatenated in order with no separator, so the result's
// length is the line's syllable count.

use lyrical_lab_lexicon::{Hyphenator, PhoneticLookup};

use crate::stress::{StressClassifier, StressPattern};

/// Whitespace-separated word tokens of a line.
pub fn words(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Build the stress pattern for one line.
pub fn build_pattern<L: PhoneticLookup, H: Hyphenator>(
    classifier: &StressClassifier<L, H>,
    line: &str,
) -> StressPattern {
    let mut pattern = StressPattern::new();
    for word in words(line) {
        pattern.append(&classifier.classify(word));
    }
    pattern
}
