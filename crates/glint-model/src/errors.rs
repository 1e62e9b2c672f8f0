//! ---
//! glint_section: "02-data-model"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Log entry schema and structured payload values."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ModelError>;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("line {line}: malformed log entry: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("timestamp {0}ms is outside the representable range")]
    InvalidTimestamp(i64),
}
