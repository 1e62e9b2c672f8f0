//! ---
//! glint_section: "02-data-model"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Topic identifiers and their display glyphs."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::collections::HashMap;
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// Resolves a topic identifier to the glyph printed in front of the namespace.
pub trait TopicTable: Send + Sync {
    /// Returns `None` for identifiers the table does not know.
    fn glyph(&self, topic: &str) -> Option<&str>;
}

// Text-presentation symbols render one cell wide and carry a trailing space.
const STUDIO_TOPICS: &[(&str, &str)] = &[
    ("ok", "✅"),
    ("warn", "⚠️ "),
    ("error", "🚨"),
    ("ignore", "🙈"),
    ("issue", "🐛"),
    ("input", "➡️ "),
    ("output", "⬅️ "),
    ("send", "📤"),
    ("receive", "📥"),
    ("fetch", "📡"),
    ("finish", "🏁"),
    ("launch", "🚀"),
    ("terminate", "💥"),
    ("spawn", "🐣"),
    ("broadcast", "📣"),
    ("disk", "💾"),
    ("timing", "⏱ "),
    ("money", "💰"),
    ("numbers", "🔢"),
    ("wtf", "👻"),
];

/// The stock topic set emitted by studio-style loggers.
#[derive(Debug, Clone, Copy, Default)]
pub struct StudioTopics;

impl StudioTopics {
    /// Every known topic identifier in table order.
    pub fn topics() -> impl Iterator<Item = &'static str> {
        STUDIO_TOPICS.iter().map(|(topic, _)| *topic)
    }
}

impl TopicTable for StudioTopics {
    fn glyph(&self, topic: &str) -> Option<&str> {
        STUDIO_TOPICS
            .iter()
            .find(|(name, _)| *name == topic)
            .map(|(_, glyph)| *glyph)
    }
}

impl<S: BuildHasher + Send + Sync> TopicTable for HashMap<String, String, S> {
    fn glyph(&self, topic: &str) -> Option<&str> {
        self.get(topic).map(String::as_str)
    }
}

impl<S: BuildHasher + Send + Sync> TopicTable for IndexMap<String, String, S> {
    fn glyph(&self, topic: &str) -> Option<&str> {
        self.get(topic).map(String::as_str)
    }
}

impl<T: TopicTable + ?Sized> TopicTable for &T {
    fn glyph(&self, topic: &str) -> Option<&str> {
        (**self).glyph(topic)
    }
}

impl<T: TopicTable + ?Sized> TopicTable for std::sync::Arc<T> {
    fn glyph(&self, topic: &str) -> Option<&str> {
        (**self).glyph(topic)
    }
}
