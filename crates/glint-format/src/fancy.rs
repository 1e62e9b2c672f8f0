//! ---
//! glint_section: "03-rendering-engine"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Color-decorated line adapter."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use chrono::{DateTime, Utc};
use glint_common::time::local_clock_time;
use glint_model::{Entry, FormatOptions, StackStyle, StudioTopics, TopicTable};

use crate::assembler::{Decor, LineAssembler, LineFormatter};
use crate::errors::Result;
use crate::palette::{Ansi, Palette};
use crate::stack::{self, CAUSED_BY};
use crate::stringify::DecoratedStringifier;
use crate::units::Formatted;

/// Segments passed through the styles of a [`Palette`].
#[derive(Debug, Clone, Copy, Default)]
pub struct FancyDecor<P> {
    stringifier: DecoratedStringifier<P>,
}

impl<P: Palette> FancyDecor<P> {
    pub fn new(palette: P) -> Self {
        Self {
            stringifier: DecoratedStringifier::new(palette),
        }
    }

    fn palette(&self) -> &P {
        self.stringifier.palette()
    }
}

impl<P: Palette> Decor for FancyDecor<P> {
    type Stringifier = DecoratedStringifier<P>;

    fn stringifier(&self) -> &DecoratedStringifier<P> {
        &self.stringifier
    }

    fn timestamp(&self, ts: &DateTime<Utc>) -> String {
        self.palette().muted(&local_clock_time(ts))
    }

    fn namespace(&self, ns: &str) -> String {
        self.palette().namespace(ns)
    }

    fn field(&self, formatted: Formatted<'_>) -> String {
        let value = match formatted.unit {
            Some(unit) => format!("{}{}", self.palette().number(&formatted.value), unit),
            None => formatted.value,
        };
        match formatted.key {
            Some(key) => format!("{}={}", self.palette().key(key), value),
            None => value,
        }
    }

    fn stack(&self, style: StackStyle, stack: &str) -> String {
        stack::decorated(style, stack, self.palette())
    }

    fn caused_by(&self) -> String {
        self.palette().accent(CAUSED_BY)
    }
}

/// Renders entries for a terminal: local clock time, colored namespace,
/// highlighted values and error messages.
#[derive(Debug, Clone)]
pub struct FancyFormatter<P = Ansi, T = StudioTopics> {
    inner: LineAssembler<FancyDecor<P>, T>,
}

impl FancyFormatter {
    /// ANSI colors and the stock topic table.
    pub fn new(options: FormatOptions) -> Self {
        Self::with_palette(options, Ansi)
    }
}

impl Default for FancyFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}

impl<P: Palette> FancyFormatter<P> {
    pub fn with_palette(options: FormatOptions, palette: P) -> Self {
        Self::with_topics(options, palette, StudioTopics)
    }
}

impl<P: Palette, T: TopicTable> FancyFormatter<P, T> {
    pub fn with_topics(options: FormatOptions, palette: P, topics: T) -> Self {
        Self {
            inner: LineAssembler::new(options, FancyDecor::new(palette), topics),
        }
    }

    pub fn options(&self) -> &FormatOptions {
        self.inner.options()
    }
}

impl<P: Palette, T: TopicTable> LineFormatter for FancyFormatter<P, T> {
    fn format(&self, entry: &Entry) -> Result<String> {
        self.inner.assemble(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::tests::Tags;
    use crate::palette::NoColor;
    use glint_model::Value;
    use serde_json::json;

    fn entry(topic: &str) -> Entry {
        Entry::at_millis(123, topic, "test").expect("entry")
    }

    fn local_time() -> String {
        format!("<muted>{}</muted>", local_clock_time(&entry("ok").ts))
    }

    fn render(options: FormatOptions, entry: &Entry) -> String {
        FancyFormatter::with_palette(options, Tags)
            .format(entry)
            .expect("format entry")
    }

    fn data(value: serde_json::Value) -> String {
        let e = entry("broadcast").with_msg("Data").with_data(Value::from(value));
        let out = render(FormatOptions::default(), &e);
        let prefix = format!("{} 📣 <ns>test</ns> Data ", local_time());
        out.strip_prefix(&prefix)
            .unwrap_or_else(|| panic!("unexpected prefix in {out:?}"))
            .to_owned()
    }

    #[test]
    fn formats_ts_topic_ns_and_msg() {
        let out = render(FormatOptions::default(), &entry("broadcast").with_msg("Oh, hi!"));
        assert_eq!(out, format!("{} 📣 <ns>test</ns> Oh, hi!\n", local_time()));
    }

    #[test]
    fn formats_data_object() {
        assert_eq!(
            data(json!({ "some": "string", "and": 42 })),
            "<key>some</key>=<str>'string'</str> <key>and</key>=<num>42</num>\n"
        );
    }

    #[test]
    fn formats_scalar_data() {
        assert_eq!(data(json!("Also string")), "<str>'Also string'</str>\n");
        assert_eq!(data(json!(1234)), "<num>1234</num>\n");
        assert_eq!(data(json!(true)), "<num>true</num>\n");
    }

    #[test]
    fn escapes_strings() {
        assert_eq!(
            data(json!({ "some": "str\nin'g" })),
            "<key>some</key>=<str>'str\\nin\\'g'</str>\n"
        );
        assert_eq!(
            data(json!({ "some": "\u{1}str\u{19}in\u{7f}g" })),
            "<key>some</key>=<str>'\\x01str\\x19in\\x7fg'</str>\n"
        );
        assert_eq!(data(json!({ "some": "äüöÄÜÖ" })), "<key>some</key>=<str>'äüöÄÜÖ'</str>\n");
    }

    #[test]
    fn highlights_arrays_and_objects() {
        assert_eq!(
            data(json!({ "some": [1, 2] })),
            "<key>some</key>=<accent>[</accent><num>1</num><accent>, </accent><num>2</num>\
             <accent>]</accent>\n"
        );
        assert_eq!(
            data(json!({ "some": { "a": 7 } })),
            "<key>some</key>=<accent>{</accent> a<accent>:</accent> <num>7</num> \
             <accent>}</accent>\n"
        );
        assert_eq!(data(json!({ "some": {} })), "<key>some</key>=<accent>{}</accent>\n");
    }

    #[test]
    fn keys_top_level_array_by_index() {
        assert_eq!(
            data(json!([1, "a"])),
            "<key>0</key>=<num>1</num> <key>1</key>=<str>'a'</str>\n"
        );
    }

    #[test]
    fn highlights_units() {
        let bare = FormatOptions {
            ts: false,
            ns: false,
            topic: false,
            ..FormatOptions::default()
        };
        let numbers = |value: serde_json::Value| {
            render(bare, &entry("numbers").with_msg("=").with_data(Value::from(value)))
        };
        assert_eq!(numbers(json!({ "ms": 7 })), "= <num>7</num>ms\n");
        assert_eq!(numbers(json!({ "ms": 7000 })), "= <num>7.0</num>s\n");
        assert_eq!(numbers(json!({ "ms": 150000 })), "= <num>2.5</num>m\n");
        assert_eq!(
            numbers(json!({ "took_ms": 7 })),
            "= <key>took</key>=<num>7</num>ms\n"
        );
    }

    #[test]
    fn formats_error_and_cause() {
        let options = FormatOptions {
            stack: StackStyle::Message,
            ..FormatOptions::default()
        };
        let e = entry("error")
            .with_msg("Oups")
            .with_stack("Error: Ouch!\n    at foo")
            .with_cause("Error: Cause\n    at bar");
        assert_eq!(
            render(options, &e),
            format!(
                "{} 🚨 <ns>test</ns> Oups <alert>Error: Ouch!</alert>\n  \
                 <accent>caused by</accent> <alert>Error: Cause</alert>\n",
                local_time()
            )
        );
    }

    #[test]
    fn peeks_into_error_and_cause() {
        let e = entry("error")
            .with_stack("Error: Ouch!\n    at foo\n    at baz")
            .with_cause("Error: Cause\n    at bar\n    at baz");
        assert_eq!(
            render(FormatOptions::default(), &e),
            format!(
                "{} 🚨 <ns>test</ns> <alert>Error: Ouch!</alert> <muted>at foo</muted>\n  \
                 <accent>caused by</accent> <alert>Error: Cause</alert> <muted>at bar</muted>\n",
                local_time()
            )
        );
    }

    #[test]
    fn cause_without_stack_still_gets_its_line() {
        let bare = FormatOptions {
            ts: false,
            topic: false,
            ns: false,
            ..FormatOptions::default()
        };
        let e = entry("error").with_msg("m").with_cause("Error: C\n    at z");
        assert_eq!(
            render(bare, &e),
            "m\n  <accent>caused by</accent> <alert>Error: C</alert> <muted>at z</muted>\n"
        );
    }

    #[test]
    fn full_stack_keeps_every_frame() {
        let options = FormatOptions {
            stack: StackStyle::Full,
            ..FormatOptions::default()
        };
        let e = entry("error").with_stack("Error: Ouch!\n    at foo\n    at bar");
        let out = render(options, &e);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines[0],
            format!("{} 🚨 <ns>test</ns> <alert>Error: Ouch!</alert>", local_time())
        );
        assert_eq!(lines[1], "<muted>    at foo");
        assert_eq!(lines[2], "    at bar</muted>");
    }

    #[test]
    fn options_drop_single_segments() {
        let e = entry("wtf").with_msg("WTF?!");
        let all = FormatOptions::default();
        assert_eq!(
            render(FormatOptions { ts: false, ..all }, &e),
            "👻 <ns>test</ns> WTF?!\n"
        );
        assert_eq!(
            render(FormatOptions { topic: false, ..all }, &e),
            format!("{} <ns>test</ns> WTF?!\n", local_time())
        );
        assert_eq!(
            render(FormatOptions { ns: false, ..all }, &e),
            format!("{} 👻 WTF?!\n", local_time())
        );

        let numbers = entry("numbers")
            .with_msg("Data")
            .with_data(Value::from(json!({ "bytes_foo": 42 })));
        assert_eq!(
            render(FormatOptions { data: false, ..all }, &numbers),
            format!("{} 🔢 <ns>test</ns> Data\n", local_time())
        );

        let ignored = entry("ignore").with_msg("Err").with_stack("Error: Oh oh!\n    at x");
        assert_eq!(
            render(FormatOptions { stack: StackStyle::Off, ..all }, &ignored),
            format!("{} 🙈 <ns>test</ns> Err\n", local_time())
        );
    }

    #[test]
    fn identity_palette_matches_console_style() {
        let e = entry("broadcast")
            .with_data(Value::from(json!({ "some": "string", "nested": { "ms": 7000 } })));
        let options = FormatOptions {
            ts: false,
            ..FormatOptions::default()
        };
        let out = FancyFormatter::with_palette(options, NoColor)
            .format(&e)
            .expect("format entry");
        assert_eq!(out, "📣 test some='string' nested={ ms: 7000 }\n");
    }
}
