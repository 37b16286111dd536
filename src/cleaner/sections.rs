use std::ops::AddAssign;

use tracing::info;

use crate::error::DocumentError;
use crate::models::{TranscriptDocument, Turn};

use super::{clean_turns, CleanReport, CleanerConfig};

/// Which sections of a document to clean
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionScope {
    /// Only `sections[0]`
    #[default]
    First,
    /// Every section, each cleaned on its own
    All,
}

/// Result of cleaning a whole document
#[derive(Debug, Clone, Default)]
pub struct DocumentOutcome {
    /// Cleaned turns of every processed section, in section order
    pub turns: Vec<Turn>,
    /// Counts summed over the processed sections
    pub report: CleanReport,
}

impl AddAssign<&CleanReport> for CleanReport {
    fn add_assign(&mut self, other: &CleanReport) {
        self.original_turns += other.original_turns;
        self.traffic_removed += other.traffic_removed;
        self.false_starts_removed += other.false_starts_removed;
        self.interjections_removed += other.interjections_removed;
        self.merges += other.merges;
        self.cleaned_turns += other.cleaned_turns;
    }
}

/// Clean the selected sections of a document in place.
///
/// Every selected section is read and validated before any is rewritten,
/// so an error leaves the document unchanged. Merging never crosses a
/// section boundary.
pub fn clean_document(
    document: &mut TranscriptDocument,
    config: &CleanerConfig,
    scope: SectionScope,
) -> Result<DocumentOutcome, DocumentError> {
    let count = match scope {
        SectionScope::First => 1,
        SectionScope::All => document.section_count()?,
    };

    let sections = (0..count)
        .map(|section| document.turns(section))
        .collect::<Result<Vec<_>, _>>()?;

    let mut outcome = DocumentOutcome::default();
    for (section, turns) in sections.into_iter().enumerate() {
        info!("Section {}: {} turns", section, turns.len());

        let cleaned = clean_turns(turns, config);
        document.set_turns(section, &cleaned.turns)?;

        outcome.report += &cleaned.report;
        outcome.turns.extend(cleaned.turns);
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn two_sections() -> TranscriptDocument {
        TranscriptDocument::from_value(json!({
            "transcript": {
                "sections": [
                    {"turns": [
                        {"speaker": {"name": "Roberts"}, "start": 0, "stop": 5,
                         "text_blocks": [{"text": "We'll hear argument."}]},
                        {"speaker": {"name": "Smith"}, "start": 5, "stop": 20,
                         "text_blocks": [{"text": "May it please the Court."}]},
                        {"speaker": {"name": "Kagan"}, "start": 20, "stop": 21,
                         "text_blocks": [{"text": "Right."}]},
                        {"speaker": {"name": "Smith"}, "start": 21, "stop": 30,
                         "text_blocks": [{"text": "The statute is clear."}]}
                    ]},
                    {"turns": [
                        {"speaker": {"name": "Smith"}, "start": 30, "stop": 40,
                         "text_blocks": [{"text": "On rebuttal, two points."}]},
                        {"speaker": {"name": "Roberts"}, "start": 40, "stop": 41,
                         "text_blocks": [{"text": "Thank you."}]}
                    ]}
                ]
            }
        }))
    }

    fn section(document: &TranscriptDocument, index: usize) -> &Value {
        &document.as_value()["transcript"]["sections"][index]["turns"]
    }

    #[test]
    fn test_first_section_only_by_default() {
        let mut document = two_sections();
        let untouched = section(&document, 1).clone();

        let outcome =
            clean_document(&mut document, &CleanerConfig::default(), SectionScope::First).unwrap();

        assert_eq!(outcome.report.original_turns, 4);
        assert_eq!(outcome.report.cleaned_turns, 2);
        assert_eq!(section(&document, 0).as_array().unwrap().len(), 2);
        assert_eq!(section(&document, 1), &untouched);
    }

    #[test]
    fn test_all_sections_are_cleaned_independently() {
        let mut document = two_sections();

        let outcome =
            clean_document(&mut document, &CleanerConfig::default(), SectionScope::All).unwrap();

        // Section 0 ends with Smith and section 1 opens with Smith; they stay apart.
        assert_eq!(outcome.report.original_turns, 6);
        assert_eq!(outcome.report.cleaned_turns, 3);
        assert_eq!(outcome.report.traffic_removed, 1);
        assert_eq!(outcome.report.interjections_removed, 1);
        assert_eq!(outcome.report.merges, 1);

        let speakers: Vec<&str> = outcome.turns.iter().map(|t| t.speaker.name.as_str()).collect();
        assert_eq!(speakers, vec!["Roberts", "Smith", "Smith"]);

        let first = section(&document, 0);
        assert_eq!(first[1]["stop"], json!(30));
        assert_eq!(first[1]["text_blocks"].as_array().unwrap().len(), 2);

        let second = section(&document, 1);
        assert_eq!(second.as_array().unwrap().len(), 1);
        assert_eq!(second[0]["start"], json!(30));
    }

    #[test]
    fn test_unchanged_turns_are_byte_stable() {
        let json = r#"{"transcript":{"sections":[{"turns":[{"id":1,"speaker":{"ID":3,"name":"A"},"start":0,"stop":12,"text_blocks":[{"text":"Statement one.","start":0,"stop":12}]},{"id":2,"speaker":{"ID":4,"name":"B"},"start":12,"stop":20.5,"text_blocks":[{"text":"Statement two.","start":12,"stop":20.5}]}]}]}}"#;
        let mut document = crate::io::parse_document_json(json).unwrap();

        let outcome =
            clean_document(&mut document, &CleanerConfig::default(), SectionScope::First).unwrap();

        assert_eq!(outcome.report.cleaned_turns, 2);
        assert_eq!(serde_json::to_string(document.as_value()).unwrap(), json);
    }

    #[test]
    fn test_malformed_later_section_leaves_document_untouched() {
        let mut value = two_sections().into_value();
        value["transcript"]["sections"][1]["turns"][0]
            .as_object_mut()
            .unwrap()
            .remove("stop");
        let mut document = TranscriptDocument::from_value(value);
        let before = document.clone();

        let err = clean_document(&mut document, &CleanerConfig::default(), SectionScope::All)
            .unwrap_err();

        assert!(matches!(err, DocumentError::InvalidTurn { section: 1, index: 0, .. }));
        assert_eq!(document, before);
    }

    #[test]
    fn test_report_add_assign() {
        let mut total = CleanReport {
            original_turns: 3,
            cleaned_turns: 2,
            merges: 1,
            ..Default::default()
        };
        total += &CleanReport {
            original_turns: 4,
            traffic_removed: 2,
            cleaned_turns: 2,
            ..Default::default()
        };

        assert_eq!(total.original_turns, 7);
        assert_eq!(total.cleaned_turns, 4);
        assert_eq!(total.removed(), 2);
        assert_eq!(total.merges, 1);
    }
}
