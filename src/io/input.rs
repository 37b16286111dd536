use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::cleaner::{phrase_set, CleanerConfig};
use crate::models::TranscriptDocument;

/// Parse a transcript JSON file
pub fn parse_document_file(path: &Path) -> Result<TranscriptDocument> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    parse_document_json(&content)
}

/// Parse a transcript JSON string
pub fn parse_document_json(json: &str) -> Result<TranscriptDocument> {
    let root = serde_json::from_str(json).context("Failed to parse transcript JSON")?;
    Ok(TranscriptDocument::from_value(root))
}

/// Phrase overrides loaded from a JSON file.
///
/// Each set that is present replaces the default set entirely.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PhraseFile {
    #[serde(default)]
    pub traffic_phrases: Option<Vec<String>>,
    #[serde(default)]
    pub nonverbal_markers: Option<Vec<String>>,
    #[serde(default)]
    pub simple_interjections: Option<Vec<String>>,
}

impl PhraseFile {
    /// Apply these overrides on top of an existing configuration
    pub fn apply(self, mut config: CleanerConfig) -> CleanerConfig {
        if let Some(phrases) = self.traffic_phrases {
            config.traffic_phrases = phrase_set(phrases.iter().map(String::as_str));
        }
        if let Some(markers) = self.nonverbal_markers {
            config.nonverbal_markers = phrase_set(markers.iter().map(String::as_str));
        }
        if let Some(interjections) = self.simple_interjections {
            config.simple_interjections = phrase_set(interjections.iter().map(String::as_str));
        }
        config
    }
}

/// Load phrase overrides from a JSON file
pub fn load_phrase_file(path: &Path) -> Result<PhraseFile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    serde_json::from_str(&content).with_context(|| format!("Invalid phrase file: {:?}", path))
}
