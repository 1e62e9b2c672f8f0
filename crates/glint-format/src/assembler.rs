//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Segment ordering shared by the line adapters."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
//! A rendered line is built from up to six segments, always in this order:
//! timestamp, topic glyph, namespace, message, data fields, stack. Each one
//! is included only when its option is on and the entry carries it. The
//! cause, when rendered, follows on its own indented line.

use chrono::{DateTime, Utc};
use glint_model::{Entry, FormatOptions, StackStyle, TopicTable, Value};

use crate::errors::{FormatError, Result};
use crate::stringify::Stringifier;
use crate::units::{format_value, Formatted};

/// Anything that turns one entry into one newline-terminated chunk.
pub trait LineFormatter {
    fn format(&self, entry: &Entry) -> Result<String>;
}

impl<F: LineFormatter + ?Sized> LineFormatter for &F {
    fn format(&self, entry: &Entry) -> Result<String> {
        (**self).format(entry)
    }
}

impl<F: LineFormatter + ?Sized> LineFormatter for Box<F> {
    fn format(&self, entry: &Entry) -> Result<String> {
        (**self).format(entry)
    }
}

/// Per-segment rendering supplied by a line adapter.
pub trait Decor {
    type Stringifier: Stringifier;

    fn stringifier(&self) -> &Self::Stringifier;
    fn timestamp(&self, ts: &DateTime<Utc>) -> String;
    fn namespace(&self, ns: &str) -> String;
    /// One data field as `key=value` plus unit, or the bare value.
    fn field(&self, formatted: Formatted<'_>) -> String;
    fn stack(&self, style: StackStyle, stack: &str) -> String;
    fn caused_by(&self) -> String;
}

/// Builds lines from entries using a [`Decor`] and a topic table.
#[derive(Debug, Clone)]
pub struct LineAssembler<D, T> {
    options: FormatOptions,
    decor: D,
    topics: T,
}

impl<D: Decor, T: TopicTable> LineAssembler<D, T> {
    pub fn new(options: FormatOptions, decor: D, topics: T) -> Self {
        Self {
            options,
            decor,
            topics,
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    fn push_data(&self, parts: &mut Vec<String>, data: &Value) {
        let stringifier = self.decor.stringifier();
        match data {
            Value::Object(map) => {
                for (key, value) in map {
                    let formatted = format_value(Some(key.as_str()), value, stringifier);
                    parts.push(self.decor.field(formatted));
                }
            }
            // Top-level arrays are keyed by index.
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let key = index.to_string();
                    let formatted = format_value(Some(key.as_str()), item, stringifier);
                    parts.push(self.decor.field(formatted));
                }
            }
            scalar => parts.push(self.decor.field(format_value(None, scalar, stringifier))),
        }
    }

    /// Render `entry` as a single chunk ending in one newline.
    pub fn assemble(&self, entry: &Entry) -> Result<String> {
        let options = &self.options;
        let mut parts: Vec<String> = Vec::with_capacity(6);

        if options.ts {
            parts.push(self.decor.timestamp(&entry.ts));
        }
        if options.topic {
            let glyph = self
                .topics
                .glyph(&entry.topic)
                .ok_or_else(|| FormatError::UnknownTopic(entry.topic.clone()))?;
            parts.push(glyph.to_owned());
        }
        if options.ns {
            parts.push(self.decor.namespace(&entry.ns));
        }
        if let Some(msg) = entry.message() {
            parts.push(msg.to_owned());
        }
        if options.data {
            if let Some(data) = entry.payload() {
                self.push_data(&mut parts, data);
            }
        }
        if options.stack.is_enabled() {
            if let Some(stack) = entry.error_stack() {
                parts.push(self.decor.stack(options.stack, stack));
            }
        }

        parts.retain(|part| !part.is_empty());
        let mut line = parts.join(" ");
        if options.stack.is_enabled() {
            if let Some(cause) = entry.cause_stack() {
                line.push_str("\n  ");
                line.push_str(&self.decor.caused_by());
                line.push(' ');
                line.push_str(&self.decor.stack(options.stack, cause));
            }
        }
        line.push('\n');
        Ok(line)
    }
}

impl<D: Decor, T: TopicTable> LineFormatter for LineAssembler<D, T> {
    fn format(&self, entry: &Entry) -> Result<String> {
        self.assemble(entry)
    }
}
