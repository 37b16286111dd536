use thiserror::Error;

/// Errors raised while navigating a transcript document
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("missing key `{path}`")]
    MissingKey { path: String },
    #[error("`{path}` is not an array")]
    NotAnArray { path: String },
    #[error("section {index} out of range ({len} sections)")]
    SectionOutOfRange { index: usize, len: usize },
    #[error("malformed turn {index} in section {section}: {source}")]
    InvalidTurn {
        section: usize,
        index: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize turns: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// A required field of a speaker, text block or turn is missing or mistyped
#[derive(Error, Debug)]
pub enum FieldError {
    #[error("missing field `{0}`")]
    Missing(&'static str),
    #[error("invalid field `{key}`: {source}")]
    Invalid {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
