use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::FieldError;

/// Speaker attribution for a turn. Identity is the `name` string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Speaker {
    pub name: String,
    /// The source object in source order; `name` is written back in place
    pub fields: Map<String, Value>,
}

impl Speaker {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Map::new(),
        }
    }
}

impl TryFrom<Map<String, Value>> for Speaker {
    type Error = FieldError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = field(&fields, "name")?;
        Ok(Self { name, fields })
    }
}

impl From<Speaker> for Map<String, Value> {
    fn from(speaker: Speaker) -> Self {
        let mut fields = speaker.fields;
        fields.insert("name".to_string(), Value::String(speaker.name));
        fields
    }
}

/// One raw text fragment of a turn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct TextBlock {
    pub text: String,
    /// The source object in source order; `text` is written back in place
    pub fields: Map<String, Value>,
}

impl TextBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            fields: Map::new(),
        }
    }
}

impl TryFrom<Map<String, Value>> for TextBlock {
    type Error = FieldError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let text = field(&fields, "text")?;
        Ok(Self { text, fields })
    }
}

impl From<TextBlock> for Map<String, Value> {
    fn from(block: TextBlock) -> Self {
        let mut fields = block.fields;
        fields.insert("text".to_string(), Value::String(block.text));
        fields
    }
}

/// A contiguous utterance by a single speaker.
///
/// Timestamps keep the number representation of the source (`0` stays `0`).
/// On output the typed fields are written over their original keys, so
/// key order and unknown fields survive cleaning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>", into = "Map<String, Value>")]
pub struct Turn {
    pub speaker: Speaker,
    /// Start offset in seconds
    pub start: Number,
    /// Stop offset in seconds
    pub stop: Number,
    pub text_blocks: Vec<TextBlock>,
    /// The source object in source order
    pub fields: Map<String, Value>,
}

impl TryFrom<Map<String, Value>> for Turn {
    type Error = FieldError;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            speaker: field(&fields, "speaker")?,
            start: field(&fields, "start")?,
            stop: field(&fields, "stop")?,
            text_blocks: field(&fields, "text_blocks")?,
            fields,
        })
    }
}

impl From<Turn> for Map<String, Value> {
    fn from(turn: Turn) -> Self {
        let mut fields = turn.fields;
        let speaker = Map::from(turn.speaker);
        let blocks = turn.text_blocks.into_iter().map(|b| Value::Object(b.into())).collect();
        fields.insert("speaker".to_string(), Value::Object(speaker));
        fields.insert("start".to_string(), Value::Number(turn.start));
        fields.insert("stop".to_string(), Value::Number(turn.stop));
        fields.insert("text_blocks".to_string(), Value::Array(blocks));
        fields
    }
}

impl Turn {
    /// Start offset as seconds
    pub fn start_secs(&self) -> f64 {
        seconds(&self.start)
    }

    /// Stop offset as seconds
    pub fn stop_secs(&self) -> f64 {
        seconds(&self.stop)
    }

    /// Duration of this turn in seconds
    pub fn duration(&self) -> f64 {
        self.stop_secs() - self.start_secs()
    }

    /// Whether two turns are attributed to the same speaker
    pub fn same_speaker(&self, other: &Turn) -> bool {
        self.speaker.name == other.speaker.name
    }

    /// Fragments joined with single spaces, trimmed and lowercased
    pub fn normalized_text(&self) -> String {
        normalize_text(self.text_blocks.iter().map(|b| b.text.as_str()))
    }

    /// Fragments joined with single spaces, original casing kept
    pub fn display_text(&self) -> String {
        let joined: Vec<&str> = self.text_blocks.iter().map(|b| b.text.as_str()).collect();
        joined.join(" ").trim().to_string()
    }
}

#[cfg(test)]
impl Turn {
    pub fn new(speaker: &str, start: f64, stop: f64, texts: &[&str]) -> Self {
        Self {
            speaker: Speaker::new(speaker),
            start: Number::from_f64(start).unwrap(),
            stop: Number::from_f64(stop).unwrap(),
            text_blocks: texts.iter().map(|t| TextBlock::new(*t)).collect(),
            fields: Map::new(),
        }
    }
}

/// Join fragments with single spaces, then trim and lowercase
pub fn normalize_text<'a>(fragments: impl IntoIterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = fragments.into_iter().collect();
    joined.join(" ").trim().to_lowercase()
}

// Every JSON number converts without arbitrary_precision.
fn seconds(value: &Number) -> f64 {
    value.as_f64().unwrap_or_default()
}

fn field<T: DeserializeOwned>(fields: &Map<String, Value>, key: &'static str) -> Result<T, FieldError> {
    let value = fields.get(key).ok_or(FieldError::Missing(key))?;
    serde_json::from_value(value.clone()).map_err(|source| FieldError::Invalid { key, source })
}
