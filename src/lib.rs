pub mod cleaner;
pub mod error;
pub mod io;
pub mod models;

pub use cleaner::{
    clean_document, clean_turns, CleanOutcome, CleanReport, CleanerConfig, DeletionReason,
    DeletionSet, DocumentOutcome, SectionScope,
};
pub use error::{DocumentError, FieldError};
pub use io::{
    load_phrase_file, parse_document_file, parse_document_json, write_document_json,
    HumanTranscript, PhraseFile,
};
pub use models::{Speaker, TextBlock, TranscriptDocument, Turn};
