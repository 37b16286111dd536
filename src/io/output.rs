use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::{TranscriptDocument, Turn};

/// Write a document as 2-space indented JSON, non-ASCII text kept literal
pub fn write_document_json(document: &TranscriptDocument, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    let mut writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, document.as_value())
        .context("Failed to write JSON")?;
    writer.flush().context("Failed to write JSON")?;
    Ok(())
}

/// Plain-text rendering of cleaned turns
pub struct HumanTranscript<'a> {
    turns: &'a [Turn],
}

impl<'a> HumanTranscript<'a> {
    pub fn new(turns: &'a [Turn]) -> Self {
        Self { turns }
    }

    /// Format the turns as human-readable text
    pub fn format(&self) -> String {
        let mut output = String::new();

        for turn in self.turns {
            let start_time = format_timestamp(turn.start_secs());
            output.push_str(&format!("[{}] {}:\n", start_time, turn.speaker.name));
            output.push_str(&wrap_text(&turn.display_text(), 80));
            output.push_str("\n\n");
        }

        output
    }

    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

/// Format seconds as MM:SS.mmm
fn format_timestamp(seconds: f64) -> String {
    let ms = (seconds.max(0.0) * 1000.0).round() as u64;
    let secs = ms / 1000;
    format!("{:02}:{:02}.{:03}", secs / 60, secs % 60, ms % 1000)
}

/// Wrap text at approximately the given width
fn wrap_text(text: &str, width: usize) -> String {
    let mut result = String::new();
    let mut line_len = 0;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line_len + word_len + 1 > width && line_len > 0 {
            result.push('\n');
            line_len = 0;
        }
        if line_len > 0 {
            result.push(' ');
            line_len += 1;
        }
        result.push_str(word);
        line_len += word_len;
    }

    result
}
