//! ---
//! glint_section: "02-data-model"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Log entry schema and structured payload values."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
//! Data model consumed by the Glint renderers: the log entry as delivered by
//! upstream producers, its payload values, the renderer options, and the
//! topic glyph table.

pub mod entry;
pub mod errors;
pub mod options;
pub mod topics;
pub mod value;

pub use entry::Entry;
pub use errors::{ModelError, Result};
pub use options::{ConsoleOptions, FormatOptions, StackStyle};
pub use topics::{StudioTopics, TopicTable};
pub use value::Value;
