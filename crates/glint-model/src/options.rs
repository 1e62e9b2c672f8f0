//! ---
//! glint_section: "02-data-model"
//! glint_subsection: "module"
//! glint_type: "source"
//! glint_scope: "code"
//! glint_description: "Renderer configuration surface."
//! glint_version: "v0.0.0-prealpha"
//! glint_owner: "tbd"
//! ---
use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

fn enabled() -> bool {
    true
}

/// How much of an error stack a line adapter prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StackStyle {
    /// Stack and cause are left out entirely.
    Off,
    /// Only the first line of the stack.
    Message,
    /// The first line plus the first trace frame.
    #[default]
    Peek,
    /// The stack as it was captured.
    Full,
}

impl StackStyle {
    pub fn is_enabled(self) -> bool {
        self != StackStyle::Off
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StackStyle::Off => "off",
            StackStyle::Message => "message",
            StackStyle::Peek => "peek",
            StackStyle::Full => "full",
        }
    }
}

impl fmt::Display for StackStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StackStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "off" | "false" => Ok(StackStyle::Off),
            "message" => Ok(StackStyle::Message),
            "peek" => Ok(StackStyle::Peek),
            "full" | "true" => Ok(StackStyle::Full),
            other => Err(format!("unknown stack style: {}", other)),
        }
    }
}

impl Serialize for StackStyle {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            StackStyle::Off => serializer.serialize_bool(false),
            other => serializer.serialize_str(other.as_str()),
        }
    }
}

impl<'de> Deserialize<'de> for StackStyle {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flag(bool),
            Name(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Flag(false) => Ok(StackStyle::Off),
            Repr::Flag(true) => Ok(StackStyle::Full),
            Repr::Name(name) => name.parse().map_err(D::Error::custom),
        }
    }
}

/// Segment switches shared by the line adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    #[serde(default = "enabled")]
    pub ts: bool,
    #[serde(default = "enabled")]
    pub topic: bool,
    #[serde(default = "enabled")]
    pub ns: bool,
    #[serde(default = "enabled")]
    pub data: bool,
    #[serde(default)]
    pub stack: StackStyle,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            ts: true,
            topic: true,
            ns: true,
            data: true,
            stack: StackStyle::default(),
        }
    }
}

/// Options for the console pass-through adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleOptions {
    /// Strip the padding some topic glyphs carry.
    #[serde(default = "enabled")]
    pub trim: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self { trim: true }
    }
}
