//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Value stringification strategies for plain and decorated output."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use chrono::{DateTime, Local, Utc};
use glint_model::Value;
use serde_json::Number;
use tracing::debug;

use crate::escape::escape_str;
use crate::palette::Palette;

/// Turns a payload value into display text.
pub trait Stringifier {
    fn render(&self, value: &Value) -> String;
}

/// Numbers the way a log reader expects them: integers without a fraction,
/// floats in their shortest form (`7` rather than `7.0`).
pub(crate) fn number_text(number: &Number) -> String {
    if let Some(int) = number.as_i64() {
        int.to_string()
    } else if let Some(uint) = number.as_u64() {
        uint.to_string()
    } else {
        number.as_f64().map_or_else(|| number.to_string(), |float| float.to_string())
    }
}

/// Date and time in the host locale's short form, e.g. `1/1/1970, 1:00:00 AM`.
pub(crate) fn locale_text(instant: &DateTime<Utc>) -> String {
    instant
        .with_timezone(&Local)
        .format("%-m/%-d/%Y, %-I:%M:%S %p")
        .to_string()
}

/// JSON text, as written to log files.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonStringifier;

impl Stringifier for JsonStringifier {
    fn render(&self, value: &Value) -> String {
        serde_json::to_string(value).unwrap_or_else(|err| {
            debug!(error = %err, "value has no JSON form");
            String::new()
        })
    }
}

/// Colored, console-style rendering: single-quoted escaped strings, bare
/// object keys, and accent-colored punctuation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DecoratedStringifier<P> {
    palette: P,
}

impl<P: Palette> DecoratedStringifier<P> {
    pub fn new(palette: P) -> Self {
        Self { palette }
    }

    pub fn palette(&self) -> &P {
        &self.palette
    }
}

impl<P: Palette> Stringifier for DecoratedStringifier<P> {
    fn render(&self, value: &Value) -> String {
        let p = &self.palette;
        match value {
            Value::Null => p.null("null"),
            Value::Bool(flag) => p.number(&flag.to_string()),
            Value::Number(number) => p.number(&number_text(number)),
            Value::String(text) => p.string(&format!("'{}'", escape_str(text))),
            Value::Date(instant) => p.number(&locale_text(instant)),
            Value::Array(items) => {
                let rendered: Vec<String> = items.iter().map(|item| self.render(item)).collect();
                format!(
                    "{}{}{}",
                    p.accent("["),
                    rendered.join(&p.accent(", ")),
                    p.accent("]")
                )
            }
            Value::Object(map) if map.is_empty() => p.accent("{}"),
            Value::Object(map) => {
                let pairs: Vec<String> = map
                    .iter()
                    .map(|(key, item)| format!("{}{} {}", key, p.accent(":"), self.render(item)))
                    .collect();
                format!(
                    "{} {} {}",
                    p.accent("{"),
                    pairs.join(&p.accent(", ")),
                    p.accent("}")
                )
            }
        }
    }
}
