// Report types: the serializable output handed to a renderer.
//
// `FlowOutcome` separates "nothing to analyze" from a successful analysis,
// and inside a `FlowReport` an absent score (`null`) separates "fewer than two
// lines to compare" from a real 0.0. JSON shapes:
//
//     {"outcome":"empty_selection"}
//     {"outcome":"analyzed","lines":[{"line":"...","segments":[...]}],"score":0.5}

use serde::{Deserialize, Serialize};

use crate::annotate::AnnotatedLine;

/// Annotated lines plus the overall alignment score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowReport {
    /// One entry per input line, in input order.
    pub lines: Vec<AnnotatedLine>,
    /// `None` when fewer than two lines could be compared.
    pub score: Option<f64>,
}

impl FlowReport {
    /// Width (in syllable positions) shared by every annotated line.
    pub fn width(&self) -> usize {
        self.lines.first().map_or(0, |l| l.segments.len())
    }
}

/// Result of a flow analysis call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlowOutcome {
    /// The selection was empty or contained only blank lines.
    EmptySelection,
    Analyzed(FlowReport),
}

impl FlowOutcome {
    pub fn report(&self) -> Option<&FlowReport> {
        match self {
            FlowOutcome::Analyzed(report) => Some(report),
            FlowOutcome::EmptySelection => None,
        }
    }

    pub fn into_report(self) -> Option<FlowReport> {
        match self {
            FlowOutcome::Analyzed(report) => Some(report),
            FlowOutcome::EmptySelection => None,
        }
    }

    pub fn is_empty_selection(&self) -> bool {
        matches!(self, FlowOutcome::EmptySelection)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// A line and its syllable count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineSyllables {
    pub line: String,
    pub syllables: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotate::Segment;

    #[test]
    fn test_empty_selection_json() {
        let json = FlowOutcome::EmptySelection.to_json().unwrap();
        assert_eq!(json, r#"{"outcome":"empty_selection"}"#);
    }

    #[test]
    fn test_analyzed_json_flattens_report() {
        let outcome = FlowOutcome::Analyzed(FlowReport {
            lines: vec![AnnotatedLine {
                line: "hi".to_string(),
                segments: vec![Segment::PADDING],
            }],
            score: None,
        });
        let value: serde_json::Value = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(value["outcome"], "analyzed");
        assert_eq!(value["lines"][0]["line"], "hi");
        assert_eq!(value["lines"][0]["segments"][0]["class"], "padding");
        assert!(value["score"].is_null());
    }

    #[test]
    fn test_outcome_roundtrip() {
        let outcome = FlowOutcome::Analyzed(FlowReport {
            lines: Vec::new(),
            score: Some(0.25),
        });
        let parsed: FlowOutcome = serde_json::from_str(&outcome.to_json().unwrap()).unwrap();
        assert_eq!(parsed, outcome);
        assert_eq!(parsed.report().unwrap().score, Some(0.25));
    }

    #[test]
    fn test_report_accessors() {
        assert!(FlowOutcome::EmptySelection.is_empty_selection());
        assert!(FlowOutcome::EmptySelection.report().is_none());
        let report = FlowReport {
            lines: vec![AnnotatedLine {
                line: "x".to_string(),
                segments: vec![Segment::PADDING; 3],
            }],
            score: None,
        };
        assert_eq!(report.width(), 3);
        assert_eq!(FlowOutcome::Analyzed(report.clone()).into_report(), Some(report));
    }
}
