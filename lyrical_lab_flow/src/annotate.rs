// Flow annotation: per-syllable tags a renderer can style.
//
// Every line is padded on the right to the longest pattern's length so all
// lines span the same width. Each position becomes a `Segment` tagged with
// its class and, for stressed syllables only, whether that column is aligned
// across the lines. A renderer typically shows aligned stress in green,
// misaligned stress in red, unstressed syllables muted, unknown syllables as
// `?`, and padding as blank space; none of that styling happens here.
//
// Lines and patterns are paired positionally. The analyzer always passes one
// pattern per line; if the slices differ in length the extra entries of the
// longer one are ignored.

use serde::{Deserialize, Serialize};

use crate::alignment::{AlignmentColumn, ColumnVerdict, column_verdicts};
use crate::stress::{StressPattern, StressSymbol};

/// What occupies one annotated position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentClass {
    Stressed,
    Unstressed,
    Unknown,
    /// Past the end of this line's pattern.
    Padding,
}

impl From<StressSymbol> for SegmentClass {
    fn from(symbol: StressSymbol) -> Self {
        match symbol {
            StressSymbol::Stressed => SegmentClass::Stressed,
            StressSymbol::Unstressed => SegmentClass::Unstressed,
            StressSymbol::Unknown => SegmentClass::Unknown,
        }
    }
}

/// Tag pair for one position: `(class, aligned)`.
///
/// `aligned` is `Some` only for `Stressed` segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub class: SegmentClass,
    pub aligned: Option<bool>,
}

impl Segment {
    pub const PADDING: Segment = Segment {
        class: SegmentClass::Padding,
        aligned: None,
    };

    fn for_symbol(symbol: StressSymbol, verdict: ColumnVerdict) -> Self {
        let aligned = match symbol {
            StressSymbol::Stressed => Some(verdict == ColumnVerdict::Aligned),
            _ => None,
        };
        Segment {
            class: symbol.into(),
            aligned,
        }
    }

    /// Compact glyph: `S`, `u`, `?`, or a space for padding.
    pub fn glyph(self) -> char {
        match self.class {
            SegmentClass::Stressed => 'S',
            SegmentClass::Unstressed => 'u',
            SegmentClass::Unknown => '?',
            SegmentClass::Padding => ' ',
        }
    }
}

/// One input line with its tagged syllable positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedLine {
    pub line: String,
    pub segments: Vec<Segment>,
}

impl AnnotatedLine {
    /// Segment glyphs as a string, padding included.
    pub fn glyphs(&self) -> String {
        self.segments.iter().map(|s| s.glyph()).collect()
    }
}

/// Annotate `lines` with their `patterns` against each other.
pub fn annotate<S: AsRef<str>>(patterns: &[StressPattern], lines: &[S]) -> Vec<AnnotatedLine> {
    let columns = column_verdicts(patterns);
    annotate_with_columns(patterns, lines, &columns)
}

/// Like `annotate`, with column verdicts already computed.
pub fn annotate_with_columns<S: AsRef<str>>(
    patterns: &[StressPattern],
    lines: &[S],
    columns: &[AlignmentColumn],
) -> Vec<AnnotatedLine> {
    lines
        .iter()
        .zip(patterns)
        .map(|(line, pattern)| AnnotatedLine {
            line: line.as_ref().to_string(),
            segments: columns
                .iter()
                .map(|column| match pattern.get(column.index) {
                    Some(symbol) => Segment::for_symbol(symbol, column.verdict),
                    None => Segment::PADDING,
                })
                .collect(),
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
    fn test_shorter_lines_are_padded() {
        let lines = ["Sunlight breaks", "A shadow falls"];
        let annotated = annotate(&patterns(&["SuS", "uSuS"]), &lines);
        assert_eq!(annotated.len(), 2);
        assert_eq!(annotated[0].segments.len(), 4);
        assert_eq!(annotated[1].segments.len(), 4);
        assert_eq!(annotated[0].segments[3], Segment::PADDING);
        assert_eq!(annotated[0].glyphs(), "SuS ");
        assert_eq!(annotated[1].glyphs(), "uSuS");
        assert_eq!(annotated[0].line, "Sunlight breaks");
    }

    #[test]
    fn test_aligned_flag_only_on_stressed() {
        let annotated = annotate(&patterns(&["SuS?", "Su"]), &["one", "two"]);
        let first = &annotated[0].segments;
        // Column 0: S/S aligned.
        assert_eq!(
            first[0],
            Segment {
                class: SegmentClass::Stressed,
                aligned: Some(true)
            }
        );
        // Column 1: u/u aligned, but unstressed carries no flag.
        assert_eq!(first[1].aligned, None);
        assert_eq!(first[1].class, SegmentClass::Unstressed);
        // Column 2: only line one reaches it; a lone stress is aligned.
        assert_eq!(first[2].aligned, Some(true));
        // Column 3: unknown carries no flag.
        assert_eq!(first[3].class, SegmentClass::Unknown);
        assert_eq!(first[3].aligned, None);
    }

    #[test]
    fn test_misaligned_stress_flagged_false() {
        let annotated = annotate(&patterns(&["SuS", "uSuS"]), &["a", "b"]);
        assert_eq!(annotated[0].segments[0].aligned, Some(false));
        assert_eq!(annotated[1].segments[1].aligned, Some(false));
        // Trailing stress of the longer line stands alone.
        assert_eq!(annotated[1].segments[3].aligned, Some(true));
    }

    #[test]
    fn test_single_line_annotation() {
        let annotated = annotate(&patterns(&["uS"]), &["hello"]);
        assert_eq!(annotated[0].glyphs(), "uS");
        assert_eq!(annotated[0].segments[1].aligned, Some(true));
    }

    #[test]
    fn test_empty_pattern_is_all_padding() {
        let annotated = annotate(&patterns(&["Su", ""]), &["shadow", ""]);
        assert_eq!(annotated[1].segments, vec![Segment::PADDING; 2]);
    }

    #[test]
    fn test_segment_json_shape() {
        let stressed = Segment {
            class: SegmentClass::Stressed,
            aligned: Some(false),
        };
        assert_eq!(
            serde_json::to_string(&stressed).unwrap(),
            r#"{"class":"stressed","aligned":false}"#
        );
        assert_eq!(
            serde_json::to_string(&Segment::PADDING).unwrap(),
            r#"{"class":"padding","aligned":null}"#
        );
    }
}
