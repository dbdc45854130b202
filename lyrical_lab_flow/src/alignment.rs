// Cross-line alignment: column-wise comparison of stress patterns.
//
// Two computations share the same column test ("are all symbols in this
// column equal?") but deliberately use different column ranges:
//
// - `score()` compares only the columns every pattern has, i.e. it truncates
//   to the SHORTEST pattern. Trailing syllables of longer lines never count.
//   This averages over commonly populated columns only.
// - `column_verdicts()` walks up to the LONGEST pattern so the annotation can
//   cover every syllable of every line. Lines that end early simply drop out
//   of the later columns; a column nobody reaches is `Empty`.
//
// `Unknown` is compared like any other symbol, so two unknown syllables in
// the same column agree with each other.
//
// Consumed by `annotate.rs` (verdicts) and `analyzer.rs` (score).

use crate::stress::{StressPattern, StressSymbol};

/// Agreement of one syllable column across lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnVerdict {
    /// Every present symbol is the same.
    Aligned,
    /// At least two present symbols differ.
    Misaligned,
    /// No line has a syllable at this index.
    Empty,
}

/// One syllable index across all patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentColumn {
    pub index: usize,
    /// Symbols of the patterns that reach this index, in pattern order.
    pub symbols: Vec<StressSymbol>,
    pub verdict: ColumnVerdict,
}

/// Verdict for a set of symbols sharing a column.
pub fn column_verdict(symbols: &[StressSymbol]) -> ColumnVerdict {
    match symbols.split_first() {
        None => ColumnVerdict::Empty,
        Some((first, rest)) if rest.iter().all(|s| s == first) => ColumnVerdict::Aligned,
        Some(_) => ColumnVerdict::Misaligned,
    }
}

/// Fraction of commonly populated columns on which all patterns agree.
///
/// Returns `None` for fewer than two patterns (nothing to align against).
/// Columns are compared up to the shortest pattern's length; if that length
/// is zero the score is `0.0`.
pub fn score(patterns: &[StressPattern]) -> Option<f64> {
    if patterns.len() < 2 {
        return None;
    }

    let common_len = patterns.iter().map(StressPattern::len).min().unwrap_or(0);
    let mut aligned = 0usize;
    let mut total = 0usize;
    let mut column = Vec::with_capacity(patterns.len());

    for i in 0..common_len {
        column.clear();
        column.extend(patterns.iter().filter_map(|p| p.get(i)));
        total += 1;
        if column_verdict(&column) == ColumnVerdict::Aligned {
            aligned += 1;
        }
    }

    Some(if total > 0 {
        aligned as f64 / total as f64
    } else {
        0.0
    })
}

/// Per-column verdicts up to the longest pattern's length.
pub fn column_verdicts(patterns: &[StressPattern]) -> Vec<AlignmentColumn> {
    let max_len = patterns.iter().map(StressPattern::len).max().unwrap_or(0);
    (0..max_len)
        .map(|index| {
            let symbols: Vec<StressSymbol> = patterns.iter().filter_map(|p| p.get(index)).collect();
            let verdict = column_verdict(&symbols);
            AlignmentColumn {
                index,
                symbols,
                verdict,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn patterns(texts: &[&str]) -> Vec<StressPattern> {
        texts.iter().map(|t| t.parse().unwrap()).collect()
    }

    #[test]
    fn test_column_verdict() {
        use StressSymbol::*;
        assert_eq!(column_verdict(&[]), ColumnVerdict::Empty);
        assert_eq!(column_verdict(&[Stressed]), ColumnVerdict::Aligned);
        assert_eq!(column_verdict(&[Stressed, Stressed]), ColumnVerdict::Aligned);
        assert_eq!(column_verdict(&[Stressed, Unstressed]), ColumnVerdict::Misaligned);
        assert_eq!(column_verdict(&[Unknown, Unknown]), ColumnVerdict::Aligned);
        assert_eq!(column_verdict(&[Unknown, Stressed]), ColumnVerdict::Misaligned);
    }

    #[test]
    fn test_score_needs_two_patterns() {
        assert_eq!(score(&[]), None);
        assert_eq!(score(&patterns(&["SuS"])), None);
    }

    #[test]
    fn test_score_identical_patterns() {
        assert_eq!(score(&patterns(&["SuS", "SuS", "SuS"])), Some(1.0));
    }

    #[test]
    fn test_score_truncates_to_shortest() {
        // Compared columns: S/u, u/S, S/u. The trailing S of the longer
        // pattern is never considered.
        assert_eq!(score(&patterns(&["SuS", "uSuS"])), Some(0.0));
        // Shared prefix agrees; the extra syllables do not lower the score.
        assert_eq!(score(&patterns(&["Su", "SuSuSu"])), Some(1.0));
    }

    #[test]
    fn test_score_partial_agreement() {
        let s = score(&patterns(&["SuSu", "SuuS"])).unwrap();
        assert!((s - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_score_with_empty_pattern_is_zero() {
        assert_eq!(score(&patterns(&["SuS", ""])), Some(0.0));
        assert_eq!(score(&patterns(&["", ""])), Some(0.0));
    }

    #[test]
    fn test_score_unknowns_agree() {
        assert_eq!(score(&patterns(&["??S", "??S"])), Some(1.0));
    }

    #[test]
    fn test_column_verdicts_cover_longest() {
        let columns = column_verdicts(&patterns(&["SuS", "uSuS"]));
        assert_eq!(columns.len(), 4);
        assert_eq!(columns[0].verdict, ColumnVerdict::Misaligned);
        // Only the longer line reaches index 3.
        assert_eq!(columns[3].symbols, vec![StressSymbol::Stressed]);
        assert_eq!(columns[3].verdict, ColumnVerdict::Aligned);
    }

    #[test]
    fn test_column_verdicts_empty_input() {
        assert!(column_verdicts(&[]).is_empty());
        assert!(column_verdicts(&patterns(&["", ""])).is_empty());
    }
}
