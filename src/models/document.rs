use serde_json::Value;

use crate::error::DocumentError;

use super::Turn;

/// A transcript document with `transcript.sections[].turns`.
///
/// Everything outside the turn lists is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptDocument {
    root: Value,
}

impl TranscriptDocument {
    pub fn from_value(root: Value) -> Self {
        Self { root }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    pub fn into_value(self) -> Value {
        self.root
    }

    /// Number of sections in the transcript
    pub fn section_count(&self) -> Result<usize, DocumentError> {
        Ok(self.sections()?.len())
    }

    /// Deserialize the turns of one section
    pub fn turns(&self, section: usize) -> Result<Vec<Turn>, DocumentError> {
        let path = format!("transcript.sections[{}].turns", section);
        let raw = child(self.section(section)?, "turns", &path)?;
        let raw = raw
            .as_array()
            .ok_or_else(|| DocumentError::NotAnArray { path })?;

        raw.iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value.clone()).map_err(|source| DocumentError::InvalidTurn {
                    section,
                    index,
                    source,
                })
            })
            .collect()
    }

    /// Replace the turns of one section
    pub fn set_turns(&mut self, section: usize, turns: &[Turn]) -> Result<(), DocumentError> {
        let value = serde_json::to_value(turns)?;
        let sections = self.sections_mut()?;
        let len = sections.len();
        let target = sections
            .get_mut(section)
            .ok_or(DocumentError::SectionOutOfRange { index: section, len })?;

        match target.get_mut("turns") {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(DocumentError::MissingKey {
                path: format!("transcript.sections[{}].turns", section),
            }),
        }
    }

    fn section(&self, index: usize) -> Result<&Value, DocumentError> {
        let sections = self.sections()?;
        sections.get(index).ok_or(DocumentError::SectionOutOfRange {
            index,
            len: sections.len(),
        })
    }

    fn sections(&self) -> Result<&Vec<Value>, DocumentError> {
        let transcript = child(&self.root, "transcript", "transcript")?;
        child(transcript, "sections", "transcript.sections")?
            .as_array()
            .ok_or_else(|| DocumentError::NotAnArray {
                path: "transcript.sections".to_string(),
            })
    }

    fn sections_mut(&mut self) -> Result<&mut Vec<Value>, DocumentError> {
        self.root
            .get_mut("transcript")
            .ok_or_else(|| missing("transcript"))?
            .get_mut("sections")
            .ok_or_else(|| missing("transcript.sections"))?
            .as_array_mut()
            .ok_or_else(|| DocumentError::NotAnArray {
                path: "transcript.sections".to_string(),
            })
    }
}

fn child<'a>(value: &'a Value, key: &str, path: &str) -> Result<&'a Value, DocumentError> {
    value.get(key).ok_or_else(|| missing(path))
}

fn missing(path: &str) -> DocumentError {
    DocumentError::MissingKey {
        path: path.to_string(),
    }
}
