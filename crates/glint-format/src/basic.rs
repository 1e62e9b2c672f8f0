//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Plain text line adapter."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use chrono::{DateTime, Utc};
use glint_common::time::iso_instant;
use glint_model::{Entry, FormatOptions, StackStyle, StudioTopics, TopicTable};

use crate::assembler::{Decor, LineAssembler, LineFormatter};
use crate::errors::Result;
use crate::stack::{self, CAUSED_BY};
use crate::stringify::JsonStringifier;
use crate::units::Formatted;

/// Undecorated segments for log files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDecor;

impl Decor for PlainDecor {
    type Stringifier = JsonStringifier;

    fn stringifier(&self) -> &JsonStringifier {
        &JsonStringifier
    }

    fn timestamp(&self, ts: &DateTime<Utc>) -> String {
        iso_instant(ts)
    }

    fn namespace(&self, ns: &str) -> String {
        format!("[{}]", ns)
    }

    fn field(&self, formatted: Formatted<'_>) -> String {
        let unit = formatted.unit.unwrap_or_default();
        match formatted.key {
            Some(key) => format!("{}={}{}", key, formatted.value, unit),
            None => format!("{}{}", formatted.value, unit),
        }
    }

    fn stack(&self, style: StackStyle, stack: &str) -> String {
        stack::plain(style, stack)
    }

    fn caused_by(&self) -> String {
        CAUSED_BY.to_owned()
    }
}

/// Renders entries as plain text lines:
/// `2018-06-29T15:35:22.634Z 📣 [test] Oh, hi! key="value"`.
#[derive(Debug, Clone)]
pub struct BasicFormatter<T = StudioTopics> {
    inner: LineAssembler<PlainDecor, T>,
}

impl BasicFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self::with_topics(options, StudioTopics)
    }
}

impl Default for BasicFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl<T: TopicTable> BasicFormatter<T> {
    pub fn with_topics(options: FormatOptions, topics: T) -> Self {
        Self {
            inner: LineAssembler::new(options, PlainDecor, topics),
        }
    }

    pub fn options(&self) -> &FormatOptions {
        self.inner.options()
    }
}

impl<T: TopicTable> LineFormatter for BasicFormatter<T> {
    fn format(&self, entry: &Entry) -> Result<String> {
        self.inner.assemble(entry)
    }
}
