//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Failure conditions of a single render call."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("no glyph registered for topic `{0}`")]
    UnknownTopic(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
